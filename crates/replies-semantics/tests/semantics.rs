use replies_semantics::{
    ConversionId, FORMATTER_KEY, KNOWN_CONVERSIONS, NameTable, NameTableError, resolve_conversion,
    screaming_snake_case,
};

#[test]
fn known_conversions_resolve_and_round_trip() {
    for &code in KNOWN_CONVERSIONS {
        let id = resolve_conversion(code).expect("known code should resolve");
        assert_eq!(id.code(), code);
    }
    assert_eq!(resolve_conversion('x'), Some(ConversionId::Escape));
    assert_eq!(resolve_conversion('t'), Some(ConversionId::DateTime));
    assert_eq!(resolve_conversion('d'), Some(ConversionId::Duration));
}

#[test]
fn unknown_conversion_codes_do_not_resolve() {
    assert_eq!(resolve_conversion('z'), None);
    assert_eq!(resolve_conversion('r'), None);
    assert_eq!(resolve_conversion('X'), None);
}

#[test]
fn screaming_snake_case_matrix() {
    let cases = [
        ("Custom", "CUSTOM"),
        ("Success", "SUCCESS"),
        ("GivenCooldown", "GIVEN_COOLDOWN"),
        ("ErrNoUserById", "ERR_NO_USER_BY_ID"),
        ("UsersInfoExtended", "USERS_INFO_EXTENDED"),
        ("Html5Entity", "HTML5_ENTITY"),
        ("already_snake", "ALREADY_SNAKE"),
    ];
    for (input, expected) in cases {
        assert_eq!(screaming_snake_case(input), expected, "input: {input}");
    }
}

#[test]
fn name_table_assigns_ids_in_declaration_order() {
    let table = NameTable::new(["CUSTOM", "SUCCESS", "ERR_COOLDOWN"]).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.id("CUSTOM"), Some(0));
    assert_eq!(table.id("SUCCESS"), Some(1));
    assert_eq!(table.id("ERR_COOLDOWN"), Some(2));
    assert_eq!(table.id("MISSING"), None);
    assert_eq!(table.name(2), Some("ERR_COOLDOWN"));
    assert_eq!(table.name(3), None);
}

#[test]
fn name_table_is_bijective() {
    let table = NameTable::new(["A", "B", "C", "D"]).unwrap();
    for (index, name) in table.names().iter().enumerate() {
        assert_eq!(table.id(name), Some(index));
        assert_eq!(table.name(index), Some(name.as_str()));
    }
}

#[test]
fn name_table_rejects_duplicates() {
    let err = NameTable::new(["A", "B", "A"]).unwrap_err();
    assert_eq!(
        err,
        NameTableError::Duplicate {
            name: "A".to_string(),
            first: 0,
            second: 2,
        }
    );
    assert!(err.to_string().contains("duplicate reply kind 'A'"));
}

#[test]
fn name_table_rejects_reserved_formatter_key() {
    let err = NameTable::new(["A", FORMATTER_KEY]).unwrap_err();
    assert!(matches!(err, NameTableError::Reserved { index: 1, .. }));
}

#[test]
fn empty_name_table() {
    let table = NameTable::new(Vec::<String>::new()).unwrap();
    assert!(table.is_empty());
}
