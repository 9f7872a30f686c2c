use std::sync::Arc;

use teloxide::prelude::*;

use qbot_core::{domain::ChatId, nav::AudioRangeRequest, range_audio};

use crate::router::AppState;

const RANGE_REJECTED: &str =
    "⚠️ Diapazon noto'g'ri yoki juda katta (maksimum 11 ta oyat).";

/// Free-text handler. A line matching `chapter:start-end` goes to the
/// range-audio aggregator; everything else is silently ignored.
pub async fn handle_text(_bot: Bot, msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = ChatId(msg.chat.id.0);

    let req = match AudioRangeRequest::parse(text) {
        None => return Ok(()),
        Some(Err(e)) => {
            // Rejected before any upstream call; a warning, not an error state.
            eprintln!("range rejected for chat {}: {e}", chat_id.0);
            if let Err(e) = state.messenger.send_html(chat_id, RANGE_REJECTED).await {
                eprintln!("range warning failed for chat {}: {e}", chat_id.0);
            }
            return Ok(());
        }
        Some(Ok(req)) => req,
    };

    if let Err(e) = range_audio::deliver_range_audio(
        state.content.as_ref(),
        state.messenger.as_ref(),
        chat_id,
        req,
        &state.cfg.reciter_edition,
    )
    .await
    {
        // Only transport failures land here; upstream fetch failures already
        // replaced the status message inside the aggregator.
        eprintln!("range audio delivery failed for chat {}: {e}", chat_id.0);
    }

    Ok(())
}
