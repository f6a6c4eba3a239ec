//! Callback Handler module for processing inline keyboard callback queries

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{debug, warn};

// Import localization
use crate::localization::{t_args_lang, t_lang};

// Import the conversation core
use crate::conversation::{apply_event, Event, Outcome};
use crate::pairs::{parse_pair_callback, MANUAL_CALLBACK};
use crate::store::ConversationStore;

/// Handle a button press: the manual sentinel or a `{from}_{to}` pair.
/// The payload comes back through the client, so it is validated rather
/// than trusted; anything malformed is logged and acknowledged without
/// touching conversation state.
pub async fn callback_handler(bot: Bot, q: CallbackQuery, store: ConversationStore) -> Result<()> {
    let user_id = q.from.id.0;
    let language_code = q.from.language_code.as_deref();
    let data = q.data.as_deref().unwrap_or("");

    debug!(user_id = %user_id, data = %data, "Received callback query from user");

    let event = if data == MANUAL_CALLBACK {
        Some(Event::ManualRequested)
    } else {
        parse_pair_callback(data).map(|(from, to)| Event::PairSelected { from, to })
    };

    match event {
        Some(event) => {
            let outcome = apply_event(&store, user_id, event).await;
            if let Some(msg) = &q.message {
                match outcome {
                    Outcome::AskFromCurrency => {
                        bot.send_message(
                            msg.chat().id,
                            t_lang("enter-from-currency", language_code),
                        )
                        .await?;
                    }
                    Outcome::AskAmount { from } => {
                        bot.send_message(
                            msg.chat().id,
                            t_args_lang("enter-amount", language_code, &[("currency", &from)]),
                        )
                        .await?;
                    }
                    // Button events only ever prompt for a currency or an
                    // amount.
                    _ => {}
                }
            }
        }
        None => {
            warn!(user_id = %user_id, data = %data, "Ignoring malformed callback payload");
        }
    }

    // Answer the callback query to remove the loading state
    bot.answer_callback_query(q.id).await?;

    Ok(())
}
