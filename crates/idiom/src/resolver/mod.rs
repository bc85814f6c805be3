//! The resolution engine: context matching, plural selection, substitution,
//! and the `Translator` facade tying them together.

mod cldr;
mod lookup;
mod options;
mod substitute;
mod translator;

pub use cldr::{cldr_extension, plural_category};
pub use options::{TranslateArg, TranslateOptions};
pub use translator::{PluralExtension, Translator};
