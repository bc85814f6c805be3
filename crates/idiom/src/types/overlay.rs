use std::collections::HashMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::TranslationTable;

/// A context-scoped translation table.
///
/// An overlay carries a set of required context attributes and a table that
/// takes precedence over the main table whenever every required attribute is
/// present in the active context with an equal value. Overlays are consulted
/// in insertion order and the first full match wins.
///
/// # Example
///
/// ```
/// use idiom::{ContextOverlay, formatting, translations};
///
/// let overlay = ContextOverlay::builder()
///     .matches(formatting! { "gender" => "female" })
///     .table(translations! { "%{name} updated their profile" => "%{name} updated her profile" })
///     .build();
///
/// assert!(overlay.applies_to(&formatting! { "gender" => "female", "role" => "admin" }));
/// assert!(!overlay.applies_to(&formatting! { "gender" => "male" }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
pub struct ContextOverlay {
    /// Required context attributes; all must match for the overlay to apply.
    #[serde(default)]
    #[builder(default)]
    pub matches: HashMap<String, String>,

    /// Translations used when this overlay applies.
    #[serde(default)]
    #[builder(default)]
    pub table: TranslationTable,
}

impl ContextOverlay {
    /// Check whether every required attribute is present in `context` with an
    /// equal value. An overlay with no required attributes applies to any
    /// context; extra context attributes are ignored.
    pub fn applies_to(&self, context: &HashMap<String, String>) -> bool {
        self.matches
            .iter()
            .all(|(key, value)| context.get(key) == Some(value))
    }
}
