use currency_bot::localization::{t_args_lang, t_lang};

#[test]
fn test_russian_and_english_catalogs_are_complete() {
    for key in [
        "welcome",
        "choose-direction",
        "pick-direction-first",
        "enter-from-currency",
        "enter-to-currency",
        "invalid-amount",
        "conversion-failed",
        "manual-entry-label",
    ] {
        for lang in [None, Some("ru")] {
            let text = t_lang(key, lang);
            assert!(
                !text.starts_with("Missing"),
                "key {key} unresolved for {lang:?}: {text}"
            );
        }
    }
}

#[test]
fn test_conversion_result_interpolates_all_fields() {
    let text = t_args_lang(
        "conversion-result",
        Some("ru"),
        &[
            ("amount", "100"),
            ("from", "USD"),
            ("converted", "9 050"),
            ("to", "RUB"),
        ],
    );
    assert_eq!(text, "✅ 100 USD = 9 050 RUB");
}

#[test]
fn test_amount_prompt_names_the_source_currency() {
    let en = t_args_lang("enter-amount", Some("en"), &[("currency", "USD")]);
    assert_eq!(en, "Enter the amount in USD:");

    let ru = t_args_lang("enter-amount", Some("ru"), &[("currency", "USD")]);
    assert_eq!(ru, "Введите сумму в USD:");
}
