//! CLDR plural categories and the ready-made pluralization extension.
//!
//! Range rules cover languages whose plural choice is a simple function of
//! the count's magnitude. Languages like Russian or Arabic instead need CLDR
//! grammatical categories ("one", "few", "many", ...), which is what the
//! extension hook exists for. This module provides both the raw category
//! lookup and a drop-in extension built on it.
//!
//! Plural rules are cached per thread per language to avoid re-creating
//! `PluralRules` instances on every call. The cache is initialized lazily
//! on first access within each thread.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use super::translator::PluralExtension;

/// Supported language codes for plural category resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a language code to a supported static string reference.
///
/// Returns the canonical `&'static str` for the language, or `"en"` for
/// unrecognized codes.
fn normalize_lang(lang: &str) -> &'static str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == lang)
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str) -> PluralRules {
    let loc = match lang {
        "ru" => locale!("ru"),
        "ar" => locale!("ar"),
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "it" => locale!("it"),
        "pt" => locale!("pt"),
        "ja" => locale!("ja"),
        "zh" => locale!("zh"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "th" => locale!("th"),
        "id" => locale!("id"),
        "el" => locale!("el"),
        "ro" => locale!("ro"),
        "fa" => locale!("fa"),
        "bn" => locale!("bn"),
        "hi" => locale!("hi"),
        "he" => locale!("he"),
        _ => locale!("en"),
    };
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("locale should be supported")
}

/// Translate a `PluralCategory` enum to its bag-key representation.
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

/// Get the CLDR cardinal plural category for a number in a given language.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other".
/// Rules are cached per thread per language, so repeated calls with the same
/// language code reuse the previously constructed `PluralRules`.
///
/// # Examples
///
/// ```
/// use idiom::plural_category;
///
/// // English: 1 = "one", everything else = "other"
/// assert_eq!(plural_category("en", 1), "one");
/// assert_eq!(plural_category("en", 2), "other");
///
/// // Russian: complex rules for "one", "few", "many", "other"
/// assert_eq!(plural_category("ru", 1), "one");
/// assert_eq!(plural_category("ru", 2), "few");
/// assert_eq!(plural_category("ru", 5), "many");
/// ```
pub fn plural_category(lang: &str, n: i64) -> &'static str {
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(code, _)| *code == lang) {
            return category_str(entry.1.category_for(n));
        }
        let rules = build_rules(lang);
        let category = category_str(rules.category_for(n));
        cache.push((lang, rules));
        category
    })
}

/// Build a pluralization extension that selects bag entries by CLDR category.
///
/// The returned function resolves an extension bag as follows:
///
/// 1. An absent or zero count selects the `"zero"` entry when the bag has one
///    (many translations special-case "no results" phrasing).
/// 2. Otherwise the entry for [`plural_category`] of the count.
/// 3. A bag missing that category falls back to `"other"`, then to the source
///    key itself.
///
/// The selected entry is returned as-is; the translator substitutes `%n` and
/// `%{...}` afterward.
///
/// # Example
///
/// ```
/// use idiom::{Translator, TranslationData, cldr_extension, formatting, translations};
///
/// let mut translator = Translator::with_data(
///     TranslationData::builder()
///         .table(translations! {
///             "%n results" => formatting! {
///                 "zero" => "нет результатов",
///                 "one" => "%n результат",
///                 "few" => "%n результата",
///                 "many" => "%n результатов",
///                 "other" => "%n результаты",
///             }
///         })
///         .build(),
/// );
/// translator.extend(cldr_extension("ru"));
///
/// assert_eq!(translator.translate_count("%n results", 0), "нет результатов");
/// assert_eq!(translator.translate_count("%n results", 1), "1 результат");
/// assert_eq!(translator.translate_count("%n results", 4), "4 результата");
/// assert_eq!(translator.translate_count("%n results", 11), "11 результатов");
/// ```
pub fn cldr_extension(lang: impl Into<String>) -> PluralExtension {
    let lang = lang.into();
    Box::new(move |key, count, _formatting, bag| {
        let category = match count {
            None | Some(0) if bag.contains_key("zero") => "zero",
            _ => plural_category(&lang, count.unwrap_or(0)),
        };
        bag.get(category)
            .or_else(|| bag.get("other"))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    })
}
