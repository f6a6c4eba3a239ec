//! Static quick-select configuration: the fixed currency-pair shortcuts
//! offered on the inline keyboard, plus the manual-entry sentinel.
//!
//! The state machine is parameterized over this list and treats currency
//! codes as opaque uppercase strings; nothing else in the crate hardcodes
//! currency knowledge.

/// One quick-select shortcut: a button label and the pair it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyPair {
    pub label: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

/// The fixed conversion directions offered as buttons, two per keyboard row.
pub const QUICK_PAIRS: [CurrencyPair; 8] = [
    CurrencyPair { label: "USD → RUB", from: "USD", to: "RUB" },
    CurrencyPair { label: "RUB → USD", from: "RUB", to: "USD" },
    CurrencyPair { label: "CNY → KZT", from: "CNY", to: "KZT" },
    CurrencyPair { label: "KZT → CNY", from: "KZT", to: "CNY" },
    CurrencyPair { label: "USD → KZT", from: "USD", to: "KZT" },
    CurrencyPair { label: "KZT → USD", from: "KZT", to: "USD" },
    CurrencyPair { label: "EUR → KZT", from: "EUR", to: "KZT" },
    CurrencyPair { label: "KZT → EUR", from: "KZT", to: "EUR" },
];

/// Callback payload of the manual-entry button.
pub const MANUAL_CALLBACK: &str = "manual";

/// Encode a pair as callback data, e.g. `usd_rub`.
pub fn pair_callback_data(pair: &CurrencyPair) -> String {
    format!(
        "{}_{}",
        pair.from.to_lowercase(),
        pair.to.to_lowercase()
    )
}

/// Decode quick-select callback data back into an uppercase `(from, to)`
/// pair. Callback payloads originate from keyboards this bot rendered, but
/// they travel through the client and are validated rather than trusted:
/// anything that is not two plausible currency codes joined by `_` yields
/// `None`.
pub fn parse_pair_callback(data: &str) -> Option<(String, String)> {
    let (from, to) = data.split_once('_')?;
    if !is_currency_code(from) || !is_currency_code(to) {
        return None;
    }
    Some((from.to_uppercase(), to.to_uppercase()))
}

fn is_currency_code(code: &str) -> bool {
    (2..=5).contains(&code.len()) && code.chars().all(|c| c.is_ascii_alphabetic())
}
