//! Plural resolution: picking a template out of a translation value.
//!
//! This is the selection step only. Substitution happens afterward in the
//! facade, and extension bags are surfaced to the caller rather than resolved
//! here, since bag semantics belong entirely to the registered extension.

use std::collections::HashMap;

use crate::types::TranslationValue;

/// Outcome of resolving a translation value against an optional count.
pub(crate) enum Resolution<'a> {
    /// A template was selected; `%n` / `%{...}` are still unsubstituted.
    Template(&'a str),

    /// The value is an extension bag; selection is deferred to the extension.
    Bag(&'a HashMap<String, String>),

    /// The value does not match this count; the caller falls through to the
    /// next tier.
    Miss,
}

/// Resolve a value to a template for the given count.
///
/// - `Plain` matches only an absent count. A plain string looked up with a
///   count is a miss, which the fallback chain then masks.
/// - `PluralRules` are scanned in list order; the first rule whose range
///   contains the count wins. Rules are never reordered.
/// - `ExtensionBag` always surfaces as [`Resolution::Bag`].
pub(crate) fn resolve<'a>(value: &'a TranslationValue, count: Option<i64>) -> Resolution<'a> {
    match value {
        TranslationValue::Plain(text) => match count {
            None => Resolution::Template(text),
            Some(_) => Resolution::Miss,
        },
        TranslationValue::PluralRules(rules) => rules
            .iter()
            .find(|rule| rule.matches(count))
            .map_or(Resolution::Miss, |rule| Resolution::Template(&rule.text)),
        TranslationValue::ExtensionBag(bag) => Resolution::Bag(bag),
    }
}
