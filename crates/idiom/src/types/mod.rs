mod data;
mod overlay;
mod rule;
mod table;
mod value;

pub use data::TranslationData;
pub use overlay::ContextOverlay;
pub use rule::PluralRule;
pub use table::TranslationTable;
pub use value::TranslationValue;
