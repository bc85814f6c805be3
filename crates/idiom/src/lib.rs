//! Run-time translation resolution.
//!
//! Given a source string key, an optional count, optional named placeholders,
//! and an optional context (e.g. grammatical gender), [`Translator`] resolves
//! the best matching localized string: context overlays first, then the main
//! table, falling back to the key itself with substitutions applied. Missing
//! keys never fail; worst case the input is echoed back, so unlocalized
//! builds keep working.
//!
//! Loading data from files is a loader's job, not this crate's: all data
//! types implement serde, so any serde-backed format can produce a
//! [`TranslationData`] to hand to [`Translator::add`].
//!
//! ```
//! use idiom::{PluralRule, TranslationData, Translator, formatting, translations};
//!
//! let mut translator = Translator::with_data(
//!     TranslationData::builder()
//!         .table(translations! {
//!             "Welcome %{name}" => "Bienvenue %{name}",
//!             "%n comments" => vec![
//!                 PluralRule::new(0, 0, "%n comments"),
//!                 PluralRule::new(1, 1, "%n comment"),
//!                 PluralRule::new(2, None, "%n comments"),
//!             ],
//!         })
//!         .build(),
//! );
//!
//! assert_eq!(
//!     translator.translate_args("Welcome %{name}", [formatting! { "name" => "John" }.into()]),
//!     "Bienvenue John",
//! );
//! assert_eq!(translator.translate_count("%n comments", 1), "1 comment");
//! ```

pub mod resolver;
pub mod types;

pub use resolver::{
    PluralExtension, TranslateArg, TranslateOptions, Translator, cldr_extension, plural_category,
};
pub use types::{ContextOverlay, PluralRule, TranslationData, TranslationTable, TranslationValue};

/// Creates a `HashMap<String, String>` from key-value pairs.
///
/// Handy for both placeholder maps and context maps, and for extension bags
/// (which convert into [`TranslationValue::ExtensionBag`]).
///
/// # Example
///
/// ```
/// use idiom::formatting;
///
/// let f = formatting! { "name" => "John", "album" => "Holiday" };
/// assert_eq!(f.len(), 2);
/// assert_eq!(f["name"], "John");
/// ```
#[macro_export]
macro_rules! formatting {
    {} => {
        ::std::collections::HashMap::<String, String>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, String>::new();
            $(
                map.insert($key.to_string(), $value.to_string());
            )+
            map
        }
    };
}

/// Creates a [`TranslationTable`] from key-value pairs.
///
/// Values are converted via `Into<TranslationValue>`: strings become plain
/// templates, `Vec<PluralRule>` becomes a rule list, and a
/// `HashMap<String, String>` becomes an extension bag.
///
/// # Example
///
/// ```
/// use idiom::{PluralRule, translations};
///
/// let table = translations! {
///     "Hello" => "Hello translated",
///     "%n comments" => vec![PluralRule::new(1, 1, "%n comment")],
/// };
/// assert_eq!(table.len(), 2);
/// ```
#[macro_export]
macro_rules! translations {
    {} => {
        $crate::TranslationTable::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut table = $crate::TranslationTable::new();
            $(
                table.insert($key, $value);
            )+
            table
        }
    };
}
