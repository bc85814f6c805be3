//! Legacy positional-argument disambiguation and the options builder.

use idiom::{
    ContextOverlay, TranslateArg, TranslateOptions, TranslationData, Translator, formatting,
    translations,
};

fn translator() -> Translator {
    Translator::with_data(
        TranslationData::builder()
            .table(translations! { "Hello %{name}" => "Bonjour %{name}" })
            .overlays(vec![
                ContextOverlay::builder()
                    .matches(formatting! { "gender" => "female" })
                    .table(translations! { "Hello %{name}" => "Bonjour Madame %{name}" })
                    .build(),
            ])
            .build(),
    )
}

// =============================================================================
// Positional disambiguation
// =============================================================================

#[test]
fn lone_integer_is_the_count() {
    let t = Translator::new();
    assert_eq!(t.translate_args("%n comments", [3.into()]), "3 comments");
}

#[test]
fn lone_map_is_the_placeholders() {
    let t = translator();
    let result = t.translate_args("Hello %{name}", [formatting! { "name" => "Jane" }.into()]);
    assert_eq!(result, "Bonjour Jane");
}

#[test]
fn two_maps_are_placeholders_then_context() {
    let t = translator();
    let result = t.translate_args(
        "Hello %{name}",
        [
            formatting! { "name" => "Jane" }.into(),
            formatting! { "gender" => "female" }.into(),
        ],
    );
    assert_eq!(result, "Bonjour Madame Jane");
}

#[test]
fn count_then_two_maps() {
    let t = Translator::new();
    let result = t.translate_args(
        "%{name} has %n items",
        [
            2.into(),
            formatting! { "name" => "Jane" }.into(),
            formatting! { "unused" => "x" }.into(),
        ],
    );
    assert_eq!(result, "Jane has 2 items");
}

#[test]
fn count_position_does_not_matter() {
    let t = Translator::new();
    let result = t.translate_args(
        "%{name} has %n items",
        [formatting! { "name" => "Jane" }.into(), 2.into()],
    );
    assert_eq!(result, "Jane has 2 items");
}

#[test]
fn no_arguments_is_a_bare_lookup() {
    let t = translator();
    let args: [TranslateArg; 0] = [];
    assert_eq!(t.translate_args("Hello %{name}", args), "Bonjour %{name}");
}

// =============================================================================
// Canonical options
// =============================================================================

#[test]
fn builder_matches_positional_behavior() {
    let t = translator();

    let positional = t.translate_args(
        "Hello %{name}",
        [
            formatting! { "name" => "Jane" }.into(),
            formatting! { "gender" => "female" }.into(),
        ],
    );
    let canonical = t.translate_with(
        "Hello %{name}",
        &TranslateOptions::builder()
            .formatting(formatting! { "name" => "Jane" })
            .context(formatting! { "gender" => "female" })
            .build(),
    );
    assert_eq!(positional, canonical);
}

#[test]
fn default_options_are_a_bare_lookup() {
    let t = translator();
    assert_eq!(
        t.translate_with("Hello %{name}", &TranslateOptions::default()),
        t.translate("Hello %{name}"),
    );
}
