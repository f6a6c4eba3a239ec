//! UI Builder module for creating the direction-selection keyboard

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

// Import localization
use crate::localization::t_lang;

// Import quick-select configuration
use crate::pairs::{pair_callback_data, MANUAL_CALLBACK, QUICK_PAIRS};

/// Create the inline keyboard of quick-select currency pairs, two per row,
/// with the manual-entry option on its own row at the bottom.
pub fn currency_keyboard(language_code: Option<&str>) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = Vec::new();

    for row in QUICK_PAIRS.chunks(2) {
        rows.push(
            row.iter()
                .map(|pair| {
                    InlineKeyboardButton::callback(pair.label.to_string(), pair_callback_data(pair))
                })
                .collect(),
        );
    }

    rows.push(vec![InlineKeyboardButton::callback(
        t_lang("manual-entry-label", language_code),
        MANUAL_CALLBACK.to_string(),
    )]);

    InlineKeyboardMarkup::new(rows)
}
