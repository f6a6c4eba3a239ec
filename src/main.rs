use anyhow::Result;
use log::info;
use std::env;
use std::sync::Arc;
use teloxide::prelude::*;

use currency_bot::bot::{callback_handler, message_handler};
use currency_bot::rates::{ExchangeRateApi, RateProvider};
use currency_bot::store::ConversationStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    info!("Starting Currency Converter Telegram Bot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Get bot token and rate-provider key from environment
    let bot_token = env::var("BOT_TOKEN").expect("BOT_TOKEN must be set");
    let api_key = env::var("EXCHANGE_API_KEY").expect("EXCHANGE_API_KEY must be set");

    // Conversation records live in memory for the lifetime of the process
    let store = ConversationStore::new();
    let rates: Arc<dyn RateProvider> = Arc::new(ExchangeRateApi::new(api_key));

    // Initialize the bot
    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with shared state
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint({
            let store = store.clone();
            let rates = Arc::clone(&rates);
            move |bot: Bot, msg: Message| {
                let store = store.clone();
                let rates = Arc::clone(&rates);
                async move { message_handler(bot, msg, store, rates).await }
            }
        }))
        .branch(Update::filter_callback_query().endpoint({
            let store = store.clone();
            move |bot: Bot, q: CallbackQuery| {
                let store = store.clone();
                async move { callback_handler(bot, q, store).await }
            }
        }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
