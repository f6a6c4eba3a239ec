//! # Amount Parsing and Formatting
//!
//! Normalizes free-form numeric input from users (who mix thousands
//! separators, non-breaking spaces and comma decimal marks) and renders
//! amounts back as space-grouped display strings.

/// Parse a user-entered amount into a finite `f64`.
///
/// Normalization is applied in order: trim, map non-breaking and thin
/// spaces to ASCII spaces, strip all spaces (thousands separators), then
/// resolve the decimal mark. Returns `None` for anything that does not
/// parse as a finite number; never panics.
///
/// # Examples
///
/// ```rust
/// use currency_bot::amount::parse_amount;
///
/// assert_eq!(parse_amount("1 234,56"), Some(1234.56));
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(text: &str) -> Option<f64> {
    let mut normalized = text
        .trim()
        .replace('\u{00A0}', " ")
        .replace('\u{2009}', " ")
        .replace(' ', "");

    // A comma alongside a period is a thousands separator ("1,000.5");
    // a comma on its own is a decimal mark ("1234,56").
    if normalized.contains('.') {
        normalized = normalized.replace(',', "");
    } else {
        normalized = normalized.replace(',', ".");
    }

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format an amount with the default two fraction digits.
pub fn format_amount(value: f64) -> String {
    format_amount_with(value, 2)
}

/// Format an amount for display: thousands grouped by a plain space,
/// period as the decimal separator, independent of locale.
///
/// Mathematically integer values render with no fractional part (no
/// trailing ".00"); everything else gets exactly `decimals` fraction
/// digits. Total function: non-finite input falls back to the value's
/// plain textual form.
pub fn format_amount_with(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if value.fract() == 0.0 {
        group_thousands(&format!("{value:.0}"))
    } else {
        let rendered = format!("{value:.decimals$}");
        match rendered.split_once('.') {
            Some((int_part, frac_part)) => {
                format!("{}.{}", group_thousands(int_part), frac_part)
            }
            None => group_thousands(&rendered),
        }
    }
}

/// Insert a space between every group of three digits, counting from the
/// right. Keeps a leading minus sign intact.
fn group_thousands(digits: &str) -> String {
    let (sign, unsigned) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(unsigned.len() + unsigned.len() / 3 + 1);
    let offset = unsigned.len() % 3;
    for (i, c) in unsigned.chars().enumerate() {
        if i > 0 && i % 3 == offset % 3 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    format!("{sign}{grouped}")
}
