//! CLDR plural category resolution for `:match` arms.
//!
//! English has "one" and "other", while Russian has "one", "few", "many" and
//! "other". Rules are built lazily per thread per normalized locale; malformed
//! language tags fall back to English and share its entry.

use std::cell::RefCell;
use std::collections::HashMap;

use icu_locale_core::{Locale, locale};
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by canonical locale, so
    /// spellings like `pt_BR` and `pt-br` share one entry.
    static PLURAL_RULES_CACHE: RefCell<HashMap<Locale, Option<PluralRules>>> =
        RefCell::new(HashMap::new());
}

fn cache_key(lang: &str) -> Locale {
    lang.replace('_', "-")
        .parse()
        .unwrap_or_else(|_| locale!("en"))
}

fn build_rules(locale: &Locale) -> Option<PluralRules> {
    PluralRules::try_new(locale.clone().into(), PluralRuleType::Cardinal.into()).ok()
}

fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR plural category for a number in a given language.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other".
///
/// # Examples
///
/// ```
/// use replies::interpreter::plural_category;
///
/// assert_eq!(plural_category("en", 1), "one");
/// assert_eq!(plural_category("en", 2), "other");
/// assert_eq!(plural_category("ru", 3), "few");
/// assert_eq!(plural_category("ru", 5), "many");
/// ```
pub fn plural_category(lang: &str, n: i64) -> &'static str {
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        let rules = cache.entry(cache_key(lang)).or_insert_with_key(|locale| {
            build_rules(locale).or_else(|| build_rules(&locale!("en")))
        });
        rules
            .as_ref()
            .map_or("other", |rules| category_str(rules.category_for(n)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spellings_of_one_locale_share_a_cache_entry() {
        assert_eq!(plural_category("pt_BR", 1), "one");
        let entries = PLURAL_RULES_CACHE.with_borrow(HashMap::len);
        assert_eq!(plural_category("pt-br", 1), "one");
        assert_eq!(plural_category("PT-BR", 1), "one");
        assert_eq!(PLURAL_RULES_CACHE.with_borrow(HashMap::len), entries);
    }

    #[test]
    fn malformed_tags_use_english_rules() {
        assert_eq!(plural_category("not a tag!", 1), "one");
        assert_eq!(plural_category("not a tag!", 3), "other");
        assert_eq!(cache_key("???"), locale!("en"));
    }
}
