//! Count and placeholder substitution.
//!
//! Pure string transforms applied to a template after it has been selected;
//! they know nothing about tables or contexts. Count substitution runs before
//! placeholder substitution so an extension returning `"%n results"` still
//! picks up the count.

use std::collections::HashMap;

/// Substitute the count into a template.
///
/// `-%n` tokens are replaced with the negated count *before* plain `%n`
/// tokens, so `-%n` with count `-10` becomes `10` and the later `%n` pass
/// cannot re-match inside the already-substituted digits. With no count the
/// template is returned unchanged, tokens and all.
pub fn apply_count(text: &str, count: Option<i64>) -> String {
    match count {
        Some(n) => text
            .replace("-%n", &(-n).to_string())
            .replace("%n", &n.to_string()),
        None => text.to_string(),
    }
}

/// Substitute named placeholders into a template.
///
/// Each `%{name}` token is replaced with the corresponding value by simple
/// sequential literal replacement. With no placeholder map the template is
/// returned unchanged.
pub fn apply_formatting(text: &str, formatting: Option<&HashMap<String, String>>) -> String {
    match formatting {
        Some(map) => {
            let mut result = text.to_string();
            for (name, value) in map {
                result = result.replace(&format!("%{{{name}}}"), value);
            }
            result
        }
        None => text.to_string(),
    }
}

/// The untranslated fallback: treat the source key itself as the text.
///
/// Only plain `%n` is substituted here; the `-%n` negation applies to
/// translated templates, not to source keys.
pub fn passthrough(key: &str, count: Option<i64>, formatting: Option<&HashMap<String, String>>) -> String {
    let text = match count {
        Some(n) => key.replace("%n", &n.to_string()),
        None => key.to_string(),
    };
    apply_formatting(&text, formatting)
}
