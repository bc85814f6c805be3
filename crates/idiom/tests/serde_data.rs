//! Serde integration: loaders deserialize data, rules stay permissive.

use idiom::{PluralRule, TranslationData, TranslationValue, Translator};
use serde_json::json;

// =============================================================================
// Loading deserialized data
// =============================================================================

#[test]
fn translation_data_from_json() {
    let data: TranslationData = serde_json::from_value(json!({
        "table": {
            "Hello": "Hello translated",
            "%n comments": [
                [0, 0, "%n comments"],
                [1, 1, "%n comment"],
                [2, null, "%n comments"],
            ],
            "%n results": { "one": "%n результат", "many": "%n результатов" },
        },
        "overlays": [
            {
                "matches": { "gender": "female" },
                "table": { "their profile": "her profile" },
            }
        ],
    }))
    .unwrap();

    let translator = Translator::with_data(data);
    assert_eq!(translator.translate("Hello"), "Hello translated");
    assert_eq!(translator.translate_count("%n comments", 1), "1 comment");
}

#[test]
fn untagged_value_shapes() {
    let plain: TranslationValue = serde_json::from_value(json!("text")).unwrap();
    assert_eq!(plain, TranslationValue::Plain("text".to_string()));

    let rules: TranslationValue = serde_json::from_value(json!([[1, 1, "one"]])).unwrap();
    assert_eq!(
        rules,
        TranslationValue::PluralRules(vec![PluralRule::new(1, 1, "one")])
    );

    let bag: TranslationValue = serde_json::from_value(json!({ "one": "x" })).unwrap();
    assert!(bag.as_bag().is_some_and(|b| b["one"] == "x"));
}

#[test]
fn data_fields_default_when_absent() {
    let data: TranslationData = serde_json::from_value(json!({})).unwrap();
    assert!(data.table.is_empty());
    assert!(data.overlays.is_empty());
}

// =============================================================================
// Permissive rule parsing
// =============================================================================

#[test]
fn null_bounds_are_open() {
    let rule: PluralRule = serde_json::from_value(json!([null, -2, "Due -%n days ago"])).unwrap();
    assert_eq!(rule, PluralRule::new(None, -2, "Due -%n days ago"));
}

#[test]
fn non_integer_bounds_are_open() {
    let rule: PluralRule = serde_json::from_value(json!(["low", 1.5, "%n items"])).unwrap();
    assert_eq!(rule.low, None);
    assert_eq!(rule.high, None);
    assert_eq!(rule.text, "%n items");
}

#[test]
fn missing_elements_default() {
    let rule: PluralRule = serde_json::from_value(json!([2])).unwrap();
    assert_eq!(rule, PluralRule::new(2, None, ""));
}

#[test]
fn non_string_text_is_empty() {
    let rule: PluralRule = serde_json::from_value(json!([0, 0, 42])).unwrap();
    assert_eq!(rule.text, "");
}

#[test]
fn extra_elements_are_ignored() {
    let rule: PluralRule = serde_json::from_value(json!([0, 0, "zero", "extra", 9])).unwrap();
    assert_eq!(rule, PluralRule::new(0, 0, "zero"));
}

#[test]
fn malformed_rule_still_translates_permissively() {
    // A rule with a junk lower bound degrades to an open bound, so it matches
    // everything up to its high bound instead of failing the whole load.
    let data: TranslationData = serde_json::from_value(json!({
        "table": {
            "%n items": [[{"bad": true}, 0, "none"], [1, null, "%n items"]],
        },
    }))
    .unwrap();

    let translator = Translator::with_data(data);
    assert_eq!(translator.translate_count("%n items", -5), "none");
    assert_eq!(translator.translate_count("%n items", 3), "3 items");
}

// =============================================================================
// Serialization
// =============================================================================

#[test]
fn rule_serializes_as_triple() {
    let value = serde_json::to_value(PluralRule::new(2, None, "%n comments")).unwrap();
    assert_eq!(value, json!([2, null, "%n comments"]));
}

#[test]
fn plain_value_serializes_untagged() {
    let value = serde_json::to_value(TranslationValue::Plain("x".to_string())).unwrap();
    assert_eq!(value, json!("x"));
}
