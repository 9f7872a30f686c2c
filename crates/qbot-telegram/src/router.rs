use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use qbot_core::{
    config::Config, messaging::port::MessagingPort, ports::ContentSource, session::SessionStore,
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub content: Arc<dyn ContentSource>,
    pub messenger: Arc<dyn MessagingPort>,
    pub sessions: Arc<SessionStore>,
}

pub async fn run_polling(cfg: Arc<Config>, content: Arc<dyn ContentSource>) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    // Basic startup info.
    if let Ok(me) = bot.get_me().await {
        println!("qbot started: @{}", me.username());
    }
    println!("Content provider: {}", cfg.api_base_url);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));

    let state = Arc::new(AppState {
        cfg,
        content,
        messenger,
        sessions: Arc::new(SessionStore::new()),
    });

    let handler = dptree::entry()
        .branch(Update::filter_callback_query().endpoint(handlers::handle_callback))
        .branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
