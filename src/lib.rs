//! # Currency Converter Telegram Bot
//!
//! A Telegram bot that converts between currencies: the user picks a
//! direction (quick-select pair buttons or manual entry of two codes),
//! enters an amount, and gets back a live-rate conversion.

pub mod amount;
pub mod bot;
pub mod conversation;
pub mod localization;
pub mod pairs;
pub mod rates;
pub mod store;
