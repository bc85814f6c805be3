//! Call options for translation and the legacy positional-argument adapter.

use std::collections::HashMap;

use bon::Builder;

/// Options for a single [`translate_with`](crate::Translator::translate_with)
/// call. All fields are optional; `TranslateOptions::default()` is a bare
/// key lookup.
///
/// # Example
///
/// ```
/// use idiom::{TranslateOptions, Translator, formatting};
///
/// let translator = Translator::new();
/// let options = TranslateOptions::builder()
///     .count(3)
///     .formatting(formatting! { "name" => "John" })
///     .build();
///
/// // No data loaded: the key itself is the text, still substituted.
/// assert_eq!(
///     translator.translate_with("%{name} has %n items", &options),
///     "John has 3 items",
/// );
/// ```
#[derive(Debug, Clone, Default, Builder)]
pub struct TranslateOptions {
    /// Count for plural-range selection and `%n` substitution.
    pub count: Option<i64>,

    /// Named placeholder values for `%{name}` substitution.
    pub formatting: Option<HashMap<String, String>>,

    /// Explicit context, overriding the translator's global context entirely
    /// when present.
    pub context: Option<HashMap<String, String>>,
}

/// One positional argument in the legacy variadic call shape.
///
/// Historical callers passed a count, a placeholder map, and a context map
/// positionally, in any combination. The [`From`] impls below let such call
/// sites keep their shape via [`translate_args`](crate::Translator::translate_args).
#[derive(Debug, Clone)]
pub enum TranslateArg {
    /// An integral argument: the count.
    Count(i64),

    /// A string-keyed string-valued map: placeholders or context.
    Map(HashMap<String, String>),
}

impl TranslateOptions {
    /// Disambiguate positional arguments into named options.
    ///
    /// The first integral argument is the count. Map arguments fill by
    /// position: the first is always the placeholders, the second is always
    /// the context. Surplus arguments are ignored.
    pub(crate) fn from_args(args: impl IntoIterator<Item = TranslateArg>) -> Self {
        let mut options = TranslateOptions::default();
        for arg in args {
            match arg {
                TranslateArg::Count(n) => {
                    if options.count.is_none() {
                        options.count = Some(n);
                    }
                }
                TranslateArg::Map(map) => {
                    if options.formatting.is_none() {
                        options.formatting = Some(map);
                    } else if options.context.is_none() {
                        options.context = Some(map);
                    }
                }
            }
        }
        options
    }
}

impl From<i32> for TranslateArg {
    fn from(n: i32) -> Self {
        TranslateArg::Count(n as i64)
    }
}

impl From<i64> for TranslateArg {
    fn from(n: i64) -> Self {
        TranslateArg::Count(n)
    }
}

impl From<u32> for TranslateArg {
    fn from(n: u32) -> Self {
        TranslateArg::Count(n as i64)
    }
}

impl From<usize> for TranslateArg {
    fn from(n: usize) -> Self {
        TranslateArg::Count(n as i64)
    }
}

impl From<HashMap<String, String>> for TranslateArg {
    fn from(map: HashMap<String, String>) -> Self {
        TranslateArg::Map(map)
    }
}

impl From<&HashMap<String, String>> for TranslateArg {
    fn from(map: &HashMap<String, String>) -> Self {
        TranslateArg::Map(map.clone())
    }
}
