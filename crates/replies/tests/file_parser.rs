//! Integration tests for override file parsing

use replies::parser::{MatchArm, OverrideBody, ParseError, parse_file};

#[test]
fn test_single_entry() {
    let entries = parse_file(r#"SUCCESS = "hecho";"#).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].key, "SUCCESS");
    assert_eq!(entries[0].body, OverrideBody::Text("hecho".to_string()));
    assert_eq!((entries[0].line, entries[0].column), (1, 1));
}

#[test]
fn test_empty_file() {
    assert!(parse_file("").unwrap().is_empty());
    assert!(parse_file("  // only a comment\n\n").unwrap().is_empty());
}

#[test]
fn test_entries_keep_file_order_and_positions() {
    let entries = parse_file(
        r#"
// greetings
CHAT_JOIN = "Hola";
  CHAT_LEAVE = "Adiós";
"#,
    )
    .unwrap();
    let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
    assert_eq!(keys, vec!["CHAT_JOIN", "CHAT_LEAVE"]);
    assert_eq!((entries[0].line, entries[0].column), (3, 1));
    assert_eq!((entries[1].line, entries[1].column), (4, 3));
}

#[test]
fn test_string_escapes() {
    let entries = parse_file(r#"CUSTOM = "a \"quoted\" \\ line\nnext\ttab";"#).unwrap();
    assert_eq!(
        entries[0].body,
        OverrideBody::Text("a \"quoted\" \\ line\nnext\ttab".to_string())
    );
}

#[test]
fn test_template_text_is_returned_raw() {
    let entries = parse_file(r#"ERR_COOLDOWN = "{until!t} {{x}}";"#).unwrap();
    assert_eq!(
        entries[0].body,
        OverrideBody::Text("{until!t} {{x}}".to_string())
    );
}

#[test]
fn test_formatter_sentinel_is_an_ordinary_key() {
    let entries = parse_file(r#"_FORMATTER_ = "plain";"#).unwrap();
    assert_eq!(entries[0].key, "_FORMATTER_");
}

#[test]
fn test_match_block() {
    let entries = parse_file(
        r#"
GIVEN_COOLDOWN = :match(deleted) {
    true: "Cooldown de {duration!d} (mensaje borrado)",
    *other: "Cooldown de {duration!d}",
};
"#,
    )
    .unwrap();
    let OverrideBody::Match { field, arms } = &entries[0].body else {
        panic!("expected match body");
    };
    assert_eq!(field, "deleted");
    assert_eq!(
        arms,
        &vec![
            MatchArm {
                keys: vec!["true".to_string()],
                template: "Cooldown de {duration!d} (mensaje borrado)".to_string(),
                is_default: false,
            },
            MatchArm {
                keys: vec!["other".to_string()],
                template: "Cooldown de {duration!d}".to_string(),
                is_default: true,
            },
        ]
    );
}

#[test]
fn test_match_arm_with_several_keys() {
    let entries =
        parse_file(r#"DELETION_QUEUED = :match(count) { 0, -1: "nada", *other: "{count}" };"#)
            .unwrap();
    let OverrideBody::Match { arms, .. } = &entries[0].body else {
        panic!("expected match body");
    };
    assert_eq!(arms[0].keys, vec!["0", "-1"]);
    assert!(arms[1].is_default);
}

#[test]
fn test_comments_inside_match_block() {
    let entries = parse_file(
        r#"USERS_INFO = :match(count) {
    // singular
    one: "{count} usuario",
    *other: "{count} usuarios" // plural
};"#,
    )
    .unwrap();
    assert_eq!(entries.len(), 1);
}

#[test]
fn test_missing_semicolon_is_error() {
    let err = parse_file("SUCCESS = \"ok\"\nCHAT_JOIN = \"hi\";").unwrap_err();
    assert_eq!(err.position().0, 2);
}

#[test]
fn test_unterminated_string_is_error() {
    let err = parse_file(r#"SUCCESS = "ok"#).unwrap_err();
    assert_eq!(err.position().0, 1);
}

#[test]
fn test_missing_equals_is_error() {
    let err = parse_file(r#"SUCCESS "ok";"#).unwrap_err();
    assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
}
