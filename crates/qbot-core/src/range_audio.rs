//! Range-audio aggregation.
//!
//! A free-text line like `2:5-8` asks for recitations of verses 5..=8 of
//! chapter 2 as one grouped reply. Delivery is all-or-nothing: either every
//! verse's clip is fetched and the group is sent, or the transient status
//! message is replaced by an error notice and nothing is delivered.

use crate::{
    domain::ChatId,
    messaging::{port::MessagingPort, types::AudioItem},
    nav::AudioRangeRequest,
    ports::ContentSource,
    Result,
};

const STATUS_TEXT: &str = "🔄 Audio tayyorlanmoqda, iltimos kuting...";
const FAILURE_TEXT: &str = "❌ Audiolarni yuklashda xatolik yuz berdi.";

/// Fetch and deliver an accepted range request.
///
/// Fetches run strictly in ascending verse order, one at a time, to cap
/// burst load on the content provider and to keep captions ordered without
/// re-sorting. Exactly one terminal state is reached per request: the group
/// is sent and the status message deleted, or the status message is edited
/// into [`FAILURE_TEXT`] and zero clips are sent.
pub async fn deliver_range_audio(
    content: &dyn ContentSource,
    messenger: &dyn MessagingPort,
    chat_id: ChatId,
    req: AudioRangeRequest,
    reciter: &str,
) -> Result<()> {
    let status = messenger.send_html(chat_id, STATUS_TEXT).await?;

    let mut items = Vec::with_capacity(req.verse_count() as usize);
    for verse in req.start..=req.end {
        match content.verse_audio(req.chapter, verse, reciter).await {
            Ok(url) => {
                items.push(
                    AudioItem::new(url).caption(format!("{}-sura, {verse}-oyat", req.chapter)),
                );
            }
            Err(e) => {
                // Abort: a truncated range must never be delivered as if
                // it were complete.
                eprintln!(
                    "range audio fetch failed at {}:{verse}: {e}",
                    req.chapter
                );
                messenger.edit_html(status, FAILURE_TEXT).await?;
                return Ok(());
            }
        }
    }

    messenger.send_audio_group(chat_id, items).await?;
    messenger.delete_message(status).await?;
    Ok(())
}
