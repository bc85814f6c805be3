use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::TranslationValue;

/// A merged source-key → translation-value table.
///
/// Keys are the source-language strings themselves, matched exactly and
/// case-sensitively. Merging is a shallow key overwrite: the last write wins.
///
/// # Example
///
/// ```
/// use idiom::{TranslationTable, translations};
///
/// let mut table = translations! { "Hello" => "Bonjour" };
/// table.merge(translations! { "Hello" => "Salut", "Bye" => "Au revoir" });
///
/// assert_eq!(table.get("Hello").and_then(|v| v.as_plain()), Some("Salut"));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(HashMap<String, TranslationValue>);

impl TranslationTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the value for a source key.
    pub fn get(&self, key: &str) -> Option<&TranslationValue> {
        self.0.get(key)
    }

    /// Insert a value for a source key, returning any previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<TranslationValue>,
    ) -> Option<TranslationValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Merge `other` into this table; overlapping keys take `other`'s value.
    pub fn merge(&mut self, other: TranslationTable) {
        self.0.extend(other.0);
    }

    /// Number of keys in the table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, TranslationValue>> for TranslationTable {
    fn from(entries: HashMap<String, TranslationValue>) -> Self {
        Self(entries)
    }
}

impl FromIterator<(String, TranslationValue)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (String, TranslationValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
