//! Message Handler module for processing incoming Telegram messages
//!
//! Free text is the fuel of the conversation state machine: depending on
//! the user's current record it is a currency code, an amount, or noise.
//! The terminal `Convert` outcome runs the rate lookup and reports the
//! result; everything else is a prompt.

use anyhow::Result;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{debug, error, info};

// Import localization
use crate::localization::{t_args_lang, t_lang};

// Import the conversation core
use crate::amount::format_amount;
use crate::conversation::{apply_event, ConversionRequest, Event, Outcome};
use crate::rates::{convert, RateProvider};
use crate::store::ConversationStore;

// Import UI builder functions
use super::ui_builder::currency_keyboard;

/// Handle an incoming message: `/start` shows the direction keyboard,
/// any other text is fed to the state machine. Non-text messages are
/// ignored.
pub async fn message_handler(
    bot: Bot,
    msg: Message,
    store: ConversationStore,
    rates: Arc<dyn RateProvider>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let Some(user) = msg.from.as_ref() else {
        debug!(chat_id = %msg.chat.id, "Ignoring message without a sender");
        return Ok(());
    };
    let user_id = user.id.0;
    let language_code = user.language_code.as_deref();

    debug!(user_id = %user_id, message_length = text.len(), "Received text message from user");

    // Handle /start command
    if text == "/start" {
        let greeting = format!(
            "{}\n{}",
            t_lang("welcome", language_code),
            t_lang("choose-direction", language_code)
        );
        bot.send_message(msg.chat.id, greeting)
            .reply_markup(currency_keyboard(language_code))
            .await?;
        return Ok(());
    }

    let outcome = apply_event(&store, user_id, Event::Text(text.to_string())).await;

    match outcome {
        Outcome::AskDirection => {
            bot.send_message(msg.chat.id, t_lang("pick-direction-first", language_code))
                .reply_markup(currency_keyboard(language_code))
                .await?;
        }
        Outcome::AskFromCurrency => {
            bot.send_message(msg.chat.id, t_lang("enter-from-currency", language_code))
                .await?;
        }
        Outcome::AskToCurrency => {
            bot.send_message(msg.chat.id, t_lang("enter-to-currency", language_code))
                .await?;
        }
        Outcome::AskAmount { from } => {
            bot.send_message(
                msg.chat.id,
                t_args_lang("enter-amount", language_code, &[("currency", &from)]),
            )
            .await?;
        }
        Outcome::InvalidAmount => {
            bot.send_message(msg.chat.id, t_lang("invalid-amount", language_code))
                .reply_markup(currency_keyboard(language_code))
                .await?;
        }
        Outcome::Convert(request) => {
            run_conversion(&bot, msg.chat.id, language_code, rates.as_ref(), request).await?;
        }
    }

    Ok(())
}

/// Execute one conversion attempt and report the result. The user's record
/// is already cleared by the time this runs; a failure here surfaces as a
/// generic message and the user restarts with a fresh direction choice.
async fn run_conversion(
    bot: &Bot,
    chat_id: ChatId,
    language_code: Option<&str>,
    rates: &dyn RateProvider,
    request: ConversionRequest,
) -> Result<()> {
    match convert(rates, &request).await {
        Ok(converted) => {
            info!(
                chat_id = %chat_id,
                from = %request.from,
                to = %request.to,
                "Conversion succeeded"
            );
            let result = t_args_lang(
                "conversion-result",
                language_code,
                &[
                    ("amount", &format_amount(request.amount)),
                    ("from", &request.from),
                    ("converted", &format_amount(converted)),
                    ("to", &request.to),
                ],
            );
            bot.send_message(chat_id, result)
                .reply_markup(currency_keyboard(language_code))
                .await?;
        }
        Err(e) => {
            error!(
                chat_id = %chat_id,
                from = %request.from,
                to = %request.to,
                error = %e,
                "Rate lookup failed"
            );
            bot.send_message(chat_id, t_lang("conversion-failed", language_code))
                .reply_markup(currency_keyboard(language_code))
                .await?;
        }
    }

    Ok(())
}
