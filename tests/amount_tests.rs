use currency_bot::amount::{format_amount, parse_amount};

/// Real users mix thousands separators and decimal marks freely.
#[test]
fn test_parse_handles_mixed_separators() {
    assert_eq!(parse_amount("1 234,56"), Some(1234.56));
    assert_eq!(parse_amount("1,000.5"), Some(1000.5));
    assert_eq!(parse_amount("1\u{00A0}234,56"), Some(1234.56));
    assert_eq!(parse_amount("  42  "), Some(42.0));
}

#[test]
fn test_parse_rejects_non_numbers() {
    assert_eq!(parse_amount("abc"), None);
    assert_eq!(parse_amount(""), None);
    assert_eq!(parse_amount("100 dollars"), None);
}

#[test]
fn test_format_groups_thousands_with_spaces() {
    assert_eq!(format_amount(1000.0), "1 000");
    assert_eq!(format_amount(1000.5), "1 000.50");
    assert_eq!(format_amount(0.0), "0");
    assert_eq!(format_amount(987654321.0), "987 654 321");
}

/// Formatting an integer then parsing it back yields the same integer.
#[test]
fn test_format_parse_idempotence_on_integers() {
    for value in [0.0, 7.0, 1000.0, 250000.0, 1234567.0] {
        let formatted = format_amount(value);
        assert_eq!(parse_amount(&formatted), Some(value), "via {formatted:?}");
    }
}
