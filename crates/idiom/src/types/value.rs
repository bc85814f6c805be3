use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::PluralRule;

/// A translation table entry.
///
/// Every key in a [`TranslationTable`](super::TranslationTable) maps to
/// exactly one of these shapes, so a value can never be both a plain string
/// and a rule list at once:
///
/// - [`Plain`](TranslationValue::Plain) — a single template string.
/// - [`PluralRules`](TranslationValue::PluralRules) — an ordered list of
///   count-range rules; first match wins.
/// - [`ExtensionBag`](TranslationValue::ExtensionBag) — an opaque category →
///   template map resolved by a registered pluralization extension.
///
/// Deserialization is untagged: a string becomes `Plain`, a sequence of
/// `[low, high, text]` triples becomes `PluralRules`, and a map becomes
/// `ExtensionBag`.
///
/// # Example
///
/// ```
/// use idiom::{PluralRule, TranslationValue};
///
/// let plain: TranslationValue = "Hello translated".into();
/// let rules: TranslationValue = vec![
///     PluralRule::new(1, 1, "%n comment"),
///     PluralRule::new(2, None, "%n comments"),
/// ]
/// .into();
///
/// assert!(plain.as_plain().is_some());
/// assert_eq!(rules.as_rules().map(<[_]>::len), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    /// A single template string, valid only for count-less lookups.
    Plain(String),

    /// Ordered plural-range rules, evaluated first match wins.
    PluralRules(Vec<PluralRule>),

    /// Opaque category → template map for a pluralization extension.
    ExtensionBag(HashMap<String, String>),
}

impl TranslationValue {
    /// Get this value as a plain template, if it is one.
    pub fn as_plain(&self) -> Option<&str> {
        match self {
            TranslationValue::Plain(text) => Some(text),
            _ => None,
        }
    }

    /// Get this value's plural rules, if it has any.
    pub fn as_rules(&self) -> Option<&[PluralRule]> {
        match self {
            TranslationValue::PluralRules(rules) => Some(rules),
            _ => None,
        }
    }

    /// Get this value's extension bag, if it is one.
    pub fn as_bag(&self) -> Option<&HashMap<String, String>> {
        match self {
            TranslationValue::ExtensionBag(bag) => Some(bag),
            _ => None,
        }
    }
}

impl From<&str> for TranslationValue {
    fn from(text: &str) -> Self {
        TranslationValue::Plain(text.to_string())
    }
}

impl From<String> for TranslationValue {
    fn from(text: String) -> Self {
        TranslationValue::Plain(text)
    }
}

impl From<Vec<PluralRule>> for TranslationValue {
    fn from(rules: Vec<PluralRule>) -> Self {
        TranslationValue::PluralRules(rules)
    }
}

impl From<HashMap<String, String>> for TranslationValue {
    fn from(bag: HashMap<String, String>) -> Self {
        TranslationValue::ExtensionBag(bag)
    }
}
