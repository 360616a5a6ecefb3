//! Lint rules comparing overrides with the default templates.
//!
//! An override that reads a field the default never references will fail at
//! render time for callers that only supply the default's fields. An override
//! that drops a field usually means a translation lost information.

use std::collections::BTreeSet;

use crate::interpreter::error::LoadWarning;
use crate::interpreter::localization::{Localization, OverrideKey};
use crate::parser::{OverrideBody, OverrideEntry, parse_template};
use crate::table::{Template, TemplateTable};
use crate::types::ReplyKind;

/// Lint the static overrides of a loaded localization against `table`.
///
/// Computed templates on either side are skipped: their fields depend on the
/// reply being rendered.
///
/// ```
/// use replies::{FormatterRegistry, LoadWarning, Localization, ReplyKind, TemplateTable};
/// use replies::interpreter::lint_localization;
///
/// let localization = Localization::parse(
///     "es",
///     r#"ERR_COOLDOWN = "Tu cooldown expira el {when!t}";"#,
///     &FormatterRegistry::new(),
/// ).unwrap();
/// let warnings = lint_localization(&localization, &TemplateTable::english());
/// assert_eq!(warnings.len(), 2);
/// assert!(warnings.contains(&LoadWarning::UnknownField {
///     kind: ReplyKind::ErrCooldown,
///     field: "when".into(),
/// }));
/// ```
pub fn lint_localization(localization: &Localization, table: &TemplateTable) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    for kind in localization.overridden_kinds() {
        let Some(text) = localization.template(kind).and_then(Template::as_static) else {
            continue;
        };
        let Some(used) = static_fields(text) else {
            continue;
        };
        compare_with_default(kind, &used, table, &mut warnings);
    }
    warnings
}

/// Lint parsed override entries against `table`.
///
/// Unlike [`lint_localization`] this sees inside `:match` blocks: the fields
/// of an entry are the matched field plus every field any arm references.
/// Entries whose key is not a reply kind are skipped.
pub fn lint_entries(entries: &[OverrideEntry], table: &TemplateTable) -> Vec<LoadWarning> {
    let mut warnings = Vec::new();
    for entry in entries {
        let Some(OverrideKey::Kind(kind)) = OverrideKey::from_name(&entry.key) else {
            continue;
        };
        let used = match &entry.body {
            OverrideBody::Text(text) => static_fields(text),
            OverrideBody::Match { field, arms } => {
                arms.iter().try_fold(BTreeSet::from([field.clone()]), |mut used, arm| {
                    used.extend(static_fields(&arm.template)?);
                    Some(used)
                })
            }
        };
        if let Some(used) = used {
            compare_with_default(kind, &used, table, &mut warnings);
        }
    }
    warnings
}

fn static_fields(text: &str) -> Option<BTreeSet<String>> {
    let parsed = parse_template(text).ok()?;
    Some(parsed.field_names().into_iter().map(str::to_string).collect())
}

fn compare_with_default(
    kind: ReplyKind,
    used: &BTreeSet<String>,
    table: &TemplateTable,
    warnings: &mut Vec<LoadWarning>,
) {
    let Some(default) = table
        .get(kind)
        .and_then(Template::as_static)
        .and_then(static_fields)
    else {
        return;
    };
    for field in used.difference(&default) {
        warnings.push(LoadWarning::UnknownField {
            kind,
            field: field.clone(),
        });
    }
    for field in default.difference(used) {
        warnings.push(LoadWarning::DroppedField {
            kind,
            field: field.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::FormatterRegistry;
    use crate::parser::parse_file;

    fn localization(content: &str) -> Localization {
        Localization::parse("en", content, &FormatterRegistry::new()).unwrap()
    }

    #[test]
    fn matching_fields_produce_no_warnings() {
        let warnings = lint_localization(
            &localization(r#"ERR_COOLDOWN = "Wait until {until!t}";"#),
            &TemplateTable::english(),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn dropped_field_is_reported() {
        let warnings = lint_localization(
            &localization(r#"USERS_INFO_EXTENDED = "{active} active, {total} total";"#),
            &TemplateTable::english(),
        );
        assert_eq!(
            warnings,
            vec![
                LoadWarning::DroppedField {
                    kind: ReplyKind::UsersInfoExtended,
                    field: "blacklisted".into(),
                },
                LoadWarning::DroppedField {
                    kind: ReplyKind::UsersInfoExtended,
                    field: "inactive".into(),
                },
            ]
        );
    }

    #[test]
    fn computed_defaults_are_skipped() {
        let warnings = lint_localization(
            &localization(r#"GIVEN_COOLDOWN = "{anything}";"#),
            &TemplateTable::english(),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn match_arms_are_linted_together() {
        let entries = parse_file(
            r#"USERS_INFO = :match(count) { one: "{count} user", *other: "{count} users in {room}" };"#,
        )
        .unwrap();
        let warnings = lint_entries(&entries, &TemplateTable::english());
        assert_eq!(
            warnings,
            vec![LoadWarning::UnknownField {
                kind: ReplyKind::UsersInfo,
                field: "room".into(),
            }]
        );
    }
}
