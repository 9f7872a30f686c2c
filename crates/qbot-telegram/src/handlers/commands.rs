use std::sync::Arc;

use teloxide::prelude::*;

use qbot_core::{domain::ChatId, keyboards};

use crate::router::AppState;

const WELCOME: &str = "<b>Assalomu alaykum!</b> Qur'on botiga xush kelibsiz.\n\n\
Suralarni tanlash uchun tugmadan foydalaning yoki diapazonni kiriting.\n\
Misol: <code>1:1-5</code> (1-sura, 1-dan 5-oyatgacha audio)";

pub async fn handle_command(
    _bot: Bot,
    msg: Message,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);
    let command = msg.text().unwrap_or_default();

    match command.split_whitespace().next().unwrap_or_default() {
        "/start" => {
            // First contact: this also creates the default session.
            state.sessions.get_or_default(chat_id).await;
            if let Err(e) = state
                .messenger
                .send_keyboard(chat_id, WELCOME, keyboards::main_menu())
                .await
            {
                eprintln!("/start reply failed for chat {}: {e}", chat_id.0);
            }
        }
        // Unknown commands are ignored on purpose.
        _ => {}
    }

    Ok(())
}
