//! Plural-range selection: bounds, ordering, and the plain-with-count miss.

use idiom::{PluralRule, TranslationData, Translator, translations};

fn comment_translator() -> Translator {
    Translator::with_data(
        TranslationData::builder()
            .table(translations! {
                "%n comments" => vec![
                    PluralRule::new(0, 0, "%n comments"),
                    PluralRule::new(1, 1, "%n comment"),
                    PluralRule::new(2, None, "%n comments"),
                ]
            })
            .build(),
    )
}

// =============================================================================
// Range selection
// =============================================================================

#[test]
fn selects_by_count() {
    let translator = comment_translator();
    assert_eq!(translator.translate_count("%n comments", 0), "0 comments");
    assert_eq!(translator.translate_count("%n comments", 1), "1 comment");
    assert_eq!(translator.translate_count("%n comments", 2), "2 comments");
    assert_eq!(translator.translate_count("%n comments", 10), "10 comments");
}

#[test]
fn negative_ranges_and_negation() {
    let translator = Translator::with_data(
        TranslationData::builder()
            .table(translations! {
                "Due in %n days" => vec![
                    PluralRule::new(None, -2, "Due -%n days ago"),
                    PluralRule::new(-1, -1, "Due Yesterday"),
                    PluralRule::new(0, 0, "Due Today"),
                    PluralRule::new(1, 1, "Due Tomorrow"),
                    PluralRule::new(2, None, "Due in %n days"),
                ]
            })
            .build(),
    );

    assert_eq!(translator.translate_count("Due in %n days", -10), "Due 10 days ago");
    assert_eq!(translator.translate_count("Due in %n days", -2), "Due 2 days ago");
    assert_eq!(translator.translate_count("Due in %n days", -1), "Due Yesterday");
    assert_eq!(translator.translate_count("Due in %n days", 0), "Due Today");
    assert_eq!(translator.translate_count("Due in %n days", 1), "Due Tomorrow");
    assert_eq!(translator.translate_count("Due in %n days", 2), "Due in 2 days");
    assert_eq!(translator.translate_count("Due in %n days", 10), "Due in 10 days");
}

#[test]
fn first_matching_rule_wins() {
    // Both rules cover 5; list order decides.
    let translator = Translator::with_data(
        TranslationData::builder()
            .table(translations! {
                "%n items" => vec![
                    PluralRule::new(0, None, "first"),
                    PluralRule::new(5, 5, "second"),
                ]
            })
            .build(),
    );
    assert_eq!(translator.translate_count("%n items", 5), "first");
}

#[test]
fn unmatched_count_falls_back_to_passthrough() {
    let translator = Translator::with_data(
        TranslationData::builder()
            .table(translations! {
                "%n items" => vec![PluralRule::new(0, 0, "no items")]
            })
            .build(),
    );
    assert_eq!(translator.translate_count("%n items", 7), "7 items");
}

// =============================================================================
// Absent count
// =============================================================================

#[test]
fn open_rule_matches_absent_count() {
    let translator = Translator::with_data(
        TranslationData::builder()
            .table(translations! {
                "items" => vec![
                    PluralRule::new(1, 1, "one item"),
                    PluralRule::new(None, None, "some items"),
                ]
            })
            .build(),
    );
    assert_eq!(translator.translate("items"), "some items");
}

#[test]
fn bounded_rules_never_match_absent_count() {
    let translator = Translator::with_data(
        TranslationData::builder()
            .table(translations! {
                "%n comments" => vec![
                    PluralRule::new(0, 0, "%n comments"),
                    PluralRule::new(1, None, "%n comments"),
                ]
            })
            .build(),
    );
    assert_eq!(translator.translate("%n comments"), "%n comments");
}

#[test]
fn fully_open_rule_ignores_present_count() {
    let rule = PluralRule::new(None, None, "whatever");
    assert!(rule.matches(None));
    assert!(!rule.matches(Some(0)));
    assert!(!rule.matches(Some(-3)));
}

// =============================================================================
// Plain-with-count miss
// =============================================================================

#[test]
fn plain_value_with_count_is_not_found() {
    // A plain string only matches count-less lookups; with a count the
    // fallback chain ends at passthrough even though the key is in the table.
    let translator = Translator::with_data(
        TranslationData::builder()
            .table(translations! { "Hello" => "Hello translated" })
            .build(),
    );
    assert_eq!(translator.translate_count("Hello", 2), "Hello");
}
