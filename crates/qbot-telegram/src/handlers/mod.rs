//! Telegram update handlers.
//!
//! Two entry points, matching the dispatcher branches: callback queries
//! (inline-keyboard navigation) and plain messages (commands plus the
//! free-text verse-range syntax). Anything unrecognized is deliberately a
//! no-op; there is no default handler.

use std::sync::Arc;

use teloxide::{
    prelude::*,
    types::{CallbackQuery, Message},
};

use crate::router::AppState;

mod callback;
mod commands;
mod text;

pub async fn handle_callback(
    bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    callback::handle_callback(bot, q, state).await
}

pub async fn handle_message(bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        // Media and other message kinds are ignored.
        return Ok(());
    };

    if text.starts_with('/') {
        return commands::handle_command(bot, msg, state).await;
    }

    text::handle_text(bot, msg, state).await
}
