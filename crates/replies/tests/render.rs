//! Integration tests for rendering with the built-in English table

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use replies::{Fields, RenderError, Renderer, Reply, ReplyKind, fields};

fn renderer() -> Renderer {
    Renderer::builder().build().unwrap()
}

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap()
}

/// The smallest field set each kind's template needs.
fn minimal_fields(kind: ReplyKind) -> Fields {
    match kind {
        ReplyKind::Custom => fields! { "text" => "hello" },
        ReplyKind::BooleanConfig => fields! { "description" => "Signatures", "enabled" => true },
        ReplyKind::GivenCooldown => fields! { "duration" => TimeDelta::hours(1), "deleted" => false },
        ReplyKind::DeletionQueued | ReplyKind::UsersInfo => fields! { "count" => 3 },
        ReplyKind::TripcodeInfo => fields! { "tripcode" => None::<String> },
        ReplyKind::TripcodeSet => fields! { "tripname" => "anon", "tripcode" => "!abc" },
        ReplyKind::ErrNotInCache | ReplyKind::ErrNoUserById => {
            fields! { "id_refresh_interval" => 24 }
        }
        ReplyKind::ErrCooldown => fields! { "until" => at() },
        ReplyKind::ErrBlacklisted => fields! { "reason" => None::<String>, "contact" => None::<String> },
        ReplyKind::ErrMediaPermission => fields! { "kind" => "stickers" },
        ReplyKind::NotifBadwordValue | ReplyKind::NotifSetBadword => fields! {
            "filtername" => "spam",
            "badword" => "foo",
            "replacement" => "bar",
        },
        ReplyKind::NotifRemoveBadword => fields! { "filtername" => "spam", "badword" => "foo" },
        ReplyKind::UserInfo => fields! {
            "id" => "a1b2",
            "rank_i" => 0,
            "rank" => "USER",
            "positiveKarma" => 5,
            "negativeKarma" => 1,
            "warnings" => 0,
            "cooldown" => None::<DateTime<Utc>>,
            "lastActive" => at(),
        },
        ReplyKind::UserInfoMod => fields! {
            "id" => "a1b2",
            "karma" => 4,
            "cooldown" => None::<DateTime<Utc>>,
        },
        ReplyKind::UserNewId => fields! { "id" => "z9y8" },
        ReplyKind::UsersInfoExtended => fields! {
            "active" => 10,
            "inactive" => 2,
            "blacklisted" => 1,
            "total" => 13,
        },
        ReplyKind::ProgramVersion => fields! { "version" => "1.0" },
        _ => Fields::new(),
    }
}

#[test]
fn every_kind_renders_without_unresolved_placeholders() {
    let renderer = renderer();
    for &kind in ReplyKind::ALL {
        let text = renderer
            .render(&Reply::new(kind, minimal_fields(kind)))
            .unwrap_or_else(|e| panic!("{kind} failed to render: {e}"));
        assert!(!text.is_empty(), "{kind} rendered empty");
        assert!(
            !text.contains('{') && !text.contains('}'),
            "{kind} left a placeholder: {text}"
        );
    }
}

#[test]
fn rendering_is_idempotent() {
    let renderer = renderer();
    for &kind in ReplyKind::ALL {
        let reply = Reply::new(kind, minimal_fields(kind));
        assert_eq!(renderer.render(&reply).unwrap(), renderer.render(&reply).unwrap());
    }
}

#[test]
fn given_cooldown_with_deleted_message() {
    let text = renderer()
        .render(&Reply::new(
            ReplyKind::GivenCooldown,
            fields! { "duration" => TimeDelta::seconds(3600), "deleted" => true },
        ))
        .unwrap();
    assert!(text.contains("1 hour"));
    assert!(text.contains("(message also deleted)"));
}

#[test]
fn given_cooldown_without_deleted_message() {
    let text = renderer()
        .render(&Reply::new(
            ReplyKind::GivenCooldown,
            fields! { "duration" => TimeDelta::seconds(3600), "deleted" => false },
        ))
        .unwrap();
    assert!(text.contains("1 hour"));
    assert!(!text.contains("(message also deleted)"));
}

#[test]
fn missing_field_fails_with_field_missing() {
    let err = renderer().render(&Reply::bare(ReplyKind::ErrCooldown)).unwrap_err();
    assert!(matches!(err, RenderError::FieldMissing { ref name, .. } if name == "until"));
}

#[test]
fn missing_field_suggests_close_names() {
    let err = renderer()
        .render(&Reply::new(ReplyKind::ErrCooldown, fields! { "untill" => at() }))
        .unwrap_err();
    let RenderError::FieldMissing { suggestions, .. } = &err else {
        panic!("expected FieldMissing, got {err:?}");
    };
    assert_eq!(suggestions, &vec!["untill".to_string()]);
    assert!(err.to_string().contains("did you mean: untill?"));
}

#[test]
fn computed_template_reports_missing_condition_field() {
    let err = renderer()
        .render(&Reply::new(
            ReplyKind::GivenCooldown,
            fields! { "duration" => TimeDelta::hours(1) },
        ))
        .unwrap_err();
    assert!(matches!(err, RenderError::FieldMissing { ref name, .. } if name == "deleted"));
}

#[test]
fn computed_template_reports_wrong_field_type() {
    let err = renderer()
        .render(&Reply::new(ReplyKind::DeletionQueued, fields! { "count" => "three" }))
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::FieldType { expected: "number", found: "string", .. }
    ));
}

#[test]
fn escaped_fields_in_rendered_text() {
    let text = renderer()
        .render(&Reply::new(
            ReplyKind::BooleanConfig,
            fields! { "description" => "<script>", "enabled" => false },
        ))
        .unwrap();
    assert_eq!(text, "<b>&lt;script&gt;</b>: disabled");
}

#[test]
fn custom_text_is_not_escaped() {
    let text = renderer()
        .render(&Reply::new(ReplyKind::Custom, fields! { "text" => "<b>hi</b>" }))
        .unwrap();
    assert_eq!(text, "<b>hi</b>");
}

#[test]
fn cooldown_timestamp_is_formatted() {
    let text = renderer()
        .render(&Reply::new(ReplyKind::ErrCooldown, fields! { "until" => at() }))
        .unwrap();
    assert_eq!(text, "<em>Your cooldown expires at 2024-03-01 12:30 UTC</em>");
}

#[test]
fn commands_are_left_outside_emphasis() {
    let text = renderer().render(&Reply::bare(ReplyKind::UserNotInChat)).unwrap();
    assert_eq!(
        text,
        "<em>You're not in the chat yet. Use </em>/start<em> to join!</em>"
    );
}

#[test]
fn deletion_queued_pluralizes() {
    let renderer = renderer();
    let one = renderer
        .render(&Reply::new(ReplyKind::DeletionQueued, fields! { "count" => 1 }))
        .unwrap();
    let many = renderer
        .render(&Reply::new(ReplyKind::DeletionQueued, fields! { "count" => 7 }))
        .unwrap();
    assert_eq!(one, "<em>1 message matched, deletion was queued.</em>");
    assert_eq!(many, "<em>7 messages matched, deletion was queued.</em>");
}

#[test]
fn tripcode_info_branches_on_null() {
    let renderer = renderer();
    let unset = renderer
        .render(&Reply::new(ReplyKind::TripcodeInfo, fields! { "tripcode" => None::<String> }))
        .unwrap();
    let set = renderer
        .render(&Reply::new(ReplyKind::TripcodeInfo, fields! { "tripcode" => "a&b" }))
        .unwrap();
    assert_eq!(unset, "<b>tripcode</b>: unset");
    assert_eq!(set, "<b>tripcode</b>: <code>a&amp;b</code>");
}

#[test]
fn blacklisted_with_reason_and_contact() {
    let text = renderer()
        .render(&Reply::new(
            ReplyKind::ErrBlacklisted,
            fields! { "reason" => "spam", "contact" => "@admin" },
        ))
        .unwrap();
    assert_eq!(
        text,
        "<em>You've been blacklisted for spam</em><em>\ncontact:</em> @admin"
    );
}

#[test]
fn blacklisted_without_reason() {
    let text = renderer()
        .render(&Reply::new(
            ReplyKind::ErrBlacklisted,
            fields! { "reason" => "", "contact" => None::<String> },
        ))
        .unwrap();
    assert_eq!(text, "<em>You've been blacklisted</em>");
}

#[test]
fn user_info_with_warnings_and_cooldown() {
    let text = renderer()
        .render(&Reply::new(
            ReplyKind::UserInfo,
            fields! {
                "id" => "a1b2",
                "rank_i" => 10,
                "rank" => "MOD",
                "positiveKarma" => 5,
                "negativeKarma" => 1,
                "warnings" => 2,
                "warnExpiry" => at(),
                "cooldown" => at(),
                "lastActive" => at(),
            },
        ))
        .unwrap();
    assert!(text.contains("<b>warnings</b>: 2 :/ (one warning will be removed on 2024-03-01 12:30 UTC)"));
    assert!(text.contains("<b>cooldown</b>: yes, until 2024-03-01 12:30 UTC"));
}

#[test]
fn extra_fields_are_ignored() {
    let text = renderer()
        .render(&Reply::new(ReplyKind::UsersInfo, fields! { "count" => 4, "unused" => true }))
        .unwrap();
    assert_eq!(text, "<b>4</b> <i>users</i>");
}
