//! The translation facade.
//!
//! `Translator` owns the merged translation state and orchestrates one
//! resolution per call: pick the first overlay matching the effective context,
//! try the key there, then in the main table, and finally echo the source key
//! with substitutions applied. Resolution never fails for a missing key.

use std::collections::HashMap;

use crate::resolver::lookup::{self, Resolution};
use crate::resolver::options::{TranslateArg, TranslateOptions};
use crate::resolver::substitute::{apply_count, apply_formatting, passthrough};
use crate::types::{ContextOverlay, TranslationData, TranslationTable};

/// A pluralization extension: chooses which entry of an extension bag applies.
///
/// Arguments are the source key, the count, the placeholder map, and the raw
/// (unsubstituted) bag. The returned string is still a template; the
/// translator substitutes `%n` / `-%n` and `%{...}` into it afterward, so an
/// extension must not pre-apply them.
pub type PluralExtension = Box<
    dyn Fn(&str, Option<i64>, Option<&HashMap<String, String>>, &HashMap<String, String>) -> String,
>;

/// Run-time translation engine.
///
/// A `Translator` starts empty: with no data loaded, every lookup echoes its
/// key with count and placeholder substitution applied, so unlocalized builds
/// keep working. Loaders merge data in with [`add`](Self::add); translation
/// itself goes through [`translate`](Self::translate) and friends.
///
/// Mutation takes `&mut self`, so the borrow checker already serializes
/// mutation against in-flight translations. To share a translator across
/// threads, wrap it in your own lock.
///
/// # Example
///
/// ```
/// use idiom::{TranslationData, Translator, translations};
///
/// let mut translator = Translator::new();
/// assert_eq!(translator.translate("Hello"), "Hello");
///
/// translator.add(
///     TranslationData::builder()
///         .table(translations! { "Hello" => "Hello translated" })
///         .build(),
/// );
/// assert_eq!(translator.translate("Hello"), "Hello translated");
/// ```
#[derive(Default)]
pub struct Translator {
    /// Merged main table; `None` until the first `add`.
    main: Option<TranslationTable>,

    /// Context overlays in insertion order.
    overlays: Vec<ContextOverlay>,

    /// Global context attributes, used when a call supplies no context.
    global_context: HashMap<String, String>,

    /// Registered pluralization extension, if any.
    extension: Option<PluralExtension>,
}

impl Translator {
    /// Create an empty translator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a translator pre-loaded with `data`.
    pub fn with_data(data: TranslationData) -> Self {
        let mut translator = Self::new();
        translator.add(data);
        translator
    }

    // =========================================================================
    // Data & Context Mutation
    // =========================================================================

    /// Merge translation data into this translator.
    ///
    /// Table entries are merged key-by-key with the incoming value winning on
    /// overlap; overlays are appended after any existing ones. Nothing is ever
    /// removed by `add`.
    ///
    /// # Example
    ///
    /// ```
    /// use idiom::{TranslationData, Translator, translations};
    ///
    /// let mut translator = Translator::new();
    /// translator.add(
    ///     TranslationData::builder()
    ///         .table(translations! { "Yes" => "Oui" })
    ///         .build(),
    /// );
    /// translator.add(
    ///     TranslationData::builder()
    ///         .table(translations! { "No" => "Non" })
    ///         .build(),
    /// );
    ///
    /// assert_eq!(translator.translate("Yes"), "Oui");
    /// assert_eq!(translator.translate("No"), "Non");
    /// ```
    pub fn add(&mut self, data: TranslationData) {
        self.main.get_or_insert_default().merge(data.table);
        self.overlays.extend(data.overlays);
    }

    /// Set a global context attribute, e.g. `("gender", "female")`.
    ///
    /// The global context applies to every call that does not pass an
    /// explicit context of its own.
    pub fn set_context(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.global_context.insert(name.into(), value.into());
    }

    /// Remove a global context attribute.
    pub fn clear_context(&mut self, name: &str) {
        self.global_context.remove(name);
    }

    /// Install a pluralization extension.
    ///
    /// The extension is consulted whenever a key resolves to an extension bag.
    /// There is exactly one active extension per translator; installing a new
    /// one replaces the previous one. See [`cldr_extension`](crate::cldr_extension)
    /// for a ready-made CLDR-category implementation.
    pub fn extend(&mut self, extension: PluralExtension) {
        self.extension = Some(extension);
    }

    /// Drop all loaded translation data (main table and overlays).
    pub fn reset_data(&mut self) {
        self.main = None;
        self.overlays.clear();
    }

    /// Drop all global context attributes.
    pub fn reset_context(&mut self) {
        self.global_context.clear();
    }

    /// Drop all translation data and global context.
    pub fn reset(&mut self) {
        self.reset_data();
        self.reset_context();
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate a key with no count, placeholders, or explicit context.
    pub fn translate(&self, key: &str) -> String {
        self.translate_with(key, &TranslateOptions::default())
    }

    /// Translate a key with a count for plural selection.
    ///
    /// # Example
    ///
    /// ```
    /// use idiom::{PluralRule, TranslationData, Translator, translations};
    ///
    /// let translator = Translator::with_data(
    ///     TranslationData::builder()
    ///         .table(translations! {
    ///             "%n comments" => vec![
    ///                 PluralRule::new(0, 0, "%n comments"),
    ///                 PluralRule::new(1, 1, "%n comment"),
    ///                 PluralRule::new(2, None, "%n comments"),
    ///             ]
    ///         })
    ///         .build(),
    /// );
    ///
    /// assert_eq!(translator.translate_count("%n comments", 1), "1 comment");
    /// assert_eq!(translator.translate_count("%n comments", 10), "10 comments");
    /// ```
    pub fn translate_count(&self, key: &str, count: i64) -> String {
        self.translate_with(key, &TranslateOptions::builder().count(count).build())
    }

    /// Translate a key: the canonical entry point.
    ///
    /// Resolution runs three tiers and never fails:
    ///
    /// 1. The first overlay whose required attributes all match the effective
    ///    context (the explicit `options.context` if present, else the global
    ///    context).
    /// 2. The main table.
    /// 3. Passthrough: the key itself, with count and placeholder
    ///    substitution applied.
    ///
    /// Within a table, a plain value matches only a count-less call, plural
    /// rules are scanned in order, and an extension bag is resolved by the
    /// registered extension (or passes through, ending the chain, when none
    /// is installed).
    pub fn translate_with(&self, key: &str, options: &TranslateOptions) -> String {
        let count = options.count;
        let formatting = options.formatting.as_ref();

        let Some(main) = &self.main else {
            return passthrough(key, count, formatting);
        };

        let context = options.context.as_ref().unwrap_or(&self.global_context);
        if let Some(overlay) = self.matching_overlay(context) {
            if let Some(result) = self.find_in_table(&overlay.table, key, count, formatting) {
                return result;
            }
        }

        if let Some(result) = self.find_in_table(main, key, count, formatting) {
            return result;
        }

        passthrough(key, count, formatting)
    }

    /// Translate a key with legacy positional arguments.
    ///
    /// Thin adapter over [`translate_with`](Self::translate_with) for call
    /// sites written against the historical variadic shape: the first
    /// integral argument is the count, and map arguments fill placeholders
    /// first, then context.
    ///
    /// # Example
    ///
    /// ```
    /// use idiom::{Translator, formatting};
    ///
    /// let translator = Translator::new();
    /// let result = translator.translate_args(
    ///     "%{name} has %n items",
    ///     [4.into(), formatting! { "name" => "John" }.into()],
    /// );
    /// assert_eq!(result, "John has 4 items");
    /// ```
    pub fn translate_args(
        &self,
        key: &str,
        args: impl IntoIterator<Item = TranslateArg>,
    ) -> String {
        self.translate_with(key, &TranslateOptions::from_args(args))
    }

    // =========================================================================
    // Resolution internals
    // =========================================================================

    /// First overlay whose required attributes all match `context`.
    fn matching_overlay(&self, context: &HashMap<String, String>) -> Option<&ContextOverlay> {
        self.overlays
            .iter()
            .find(|overlay| overlay.applies_to(context))
    }

    /// Resolve `key` within one table, finishing with substitution.
    ///
    /// Returns `None` when the key is absent or its value does not match the
    /// count, letting the caller fall through to the next tier. An extension
    /// bag is always a hit: either the extension's chosen template, or the
    /// passthrough text when no extension is installed.
    fn find_in_table(
        &self,
        table: &TranslationTable,
        key: &str,
        count: Option<i64>,
        formatting: Option<&HashMap<String, String>>,
    ) -> Option<String> {
        let value = table.get(key)?;
        match lookup::resolve(value, count) {
            Resolution::Template(template) => {
                Some(apply_formatting(&apply_count(template, count), formatting))
            }
            Resolution::Bag(bag) => Some(match &self.extension {
                Some(extension) => {
                    let template = extension(key, count, formatting, bag);
                    apply_formatting(&apply_count(&template, count), formatting)
                }
                None => passthrough(key, count, formatting),
            }),
            Resolution::Miss => None,
        }
    }
}
