//! Integration tests for the template table

use replies::{ConfigError, RenderError, Renderer, ReplyKind, Template, TemplateTable, fields};

#[test]
fn english_table_covers_every_kind() {
    let table = TemplateTable::english();
    assert_eq!(table.len(), ReplyKind::ALL.len());
    assert!(table.validate().is_ok());
    for &kind in ReplyKind::ALL {
        assert!(table.lookup(kind).is_ok(), "{kind} has no template");
    }
}

#[test]
fn computed_and_static_entries() {
    let table = TemplateTable::english();
    assert!(table.lookup(ReplyKind::GivenCooldown).unwrap().is_computed());
    assert_eq!(
        table.lookup(ReplyKind::Custom).unwrap().as_static(),
        Some("{text}")
    );
}

#[test]
fn lookup_missing_kind_is_error() {
    let table = TemplateTable::new();
    assert!(matches!(
        table.lookup(ReplyKind::Success),
        Err(RenderError::MissingTemplate { kind: ReplyKind::Success })
    ));
}

#[test]
fn validate_lists_every_missing_kind() {
    let mut table = TemplateTable::english();
    let mut partial = TemplateTable::new();
    for kind in table.kinds().filter(|&k| k != ReplyKind::HelpAdmin && k != ReplyKind::Custom) {
        partial.insert(kind, table.lookup(kind).unwrap().clone());
    }
    let Err(ConfigError::MissingTemplates { kinds }) = partial.validate() else {
        panic!("expected missing templates");
    };
    assert_eq!(kinds, vec![ReplyKind::Custom, ReplyKind::HelpAdmin]);

    table.insert(ReplyKind::Custom, "{text");
    assert!(matches!(
        table.validate(),
        Err(ConfigError::InvalidTemplate { kind: ReplyKind::Custom, .. })
    ));
}

#[test]
fn resolve_computed_template() {
    let table = TemplateTable::english();
    let template = table.lookup(ReplyKind::BooleanConfig).unwrap();
    let text = template.resolve(&fields! { "enabled" => false }).unwrap();
    assert_eq!(text, "<b>{description!x}</b>: disabled");
}

#[test]
fn insert_returns_previous_template() {
    let mut table = TemplateTable::new();
    assert!(table.insert(ReplyKind::Success, "a").is_none());
    let previous = table.insert(ReplyKind::Success, Template::text("b"));
    assert_eq!(previous.and_then(|t| t.as_static().map(str::to_string)), Some("a".to_string()));
}

#[test]
fn renderer_rejects_incomplete_table() {
    let mut table = TemplateTable::new();
    table.insert(ReplyKind::Success, "ok");
    let err = Renderer::builder().table(table).build().unwrap_err();
    assert!(err.to_string().starts_with("no template for reply kinds: CUSTOM, BOOLEAN_CONFIG"));
}
