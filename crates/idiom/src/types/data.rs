use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{ContextOverlay, TranslationTable};

/// The payload a loader hands to [`Translator::add`](crate::Translator::add).
///
/// This crate does not parse any on-disk format itself; an external loader
/// deserializes whatever source it likes into a `TranslationData` (all types
/// here implement serde) and merges it in.
///
/// # Example
///
/// ```
/// use idiom::{TranslationData, Translator, translations};
///
/// let data = TranslationData::builder()
///     .table(translations! { "Hello" => "Hello translated" })
///     .build();
///
/// let translator = Translator::with_data(data);
/// assert_eq!(translator.translate("Hello"), "Hello translated");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
pub struct TranslationData {
    /// Translations merged into the main table (last write wins per key).
    #[serde(default)]
    #[builder(default)]
    pub table: TranslationTable,

    /// Context overlays appended in order, never deduplicated.
    #[serde(default)]
    #[builder(default)]
    pub overlays: Vec<ContextOverlay>,
}
