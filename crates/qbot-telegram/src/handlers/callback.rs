use std::sync::Arc;

use teloxide::prelude::*;

use qbot_core::{
    domain::{ChatId, MessageId, MessageRef},
    errors::Error,
    keyboards,
    messaging::types::AudioItem,
    nav::NavCommand,
};

use crate::router::AppState;

const PICK_CHAPTER: &str = "📖 Kerakli surani tanlang:";
const CHAPTER_LIST: &str = "📖 Suralar ro'yxati:";
const MAIN_MENU: &str = "Asosiy menyu:";
const CATALOG_UNAVAILABLE: &str = "⚠️ Xizmat vaqtincha ishlamayapti.";
const AUDIO_MISSING: &str = "❌ Audio topilmadi.";
const GUIDE: &str = "<b>Qo'llanma</b>\n\n\
▫️ Suralar ro'yxatidan surani tanlang va oyatlar bo'ylab tugmalar bilan yuring.\n\
▫️ 🔊 Audio tugmasi joriy oyat qiroatini yuboradi.\n\
▫️ Bir nechta oyat audiosi uchun diapazon yozing.\n\
Misol: <code>2:5-8</code> (2-sura, 5-dan 8-oyatgacha)";

/// Short user-visible notice for a failed navigation step.
fn user_notice(e: &Error) -> &'static str {
    match e {
        Error::NotFound(_) => "Topilmadi.",
        _ => "Xatolik!",
    }
}

pub async fn handle_callback(
    _bot: Bot,
    q: CallbackQuery,
    state: Arc<AppState>,
) -> ResponseResult<()> {
    let cb_id = q.id.clone();
    let data = q.data.clone().unwrap_or_default();

    // The originating message carries the screen we edit in place.
    let origin = q.message.as_ref().map(|m| MessageRef {
        chat_id: ChatId(m.chat.id.0),
        message_id: MessageId(m.id.0),
    });

    let outcome = match (NavCommand::decode(&data), origin) {
        (Some(cmd), Some(origin)) => dispatch(cmd, origin, &state).await,
        // Unrecognized token or a detached query: intentional no-op, but the
        // interaction still gets acknowledged so the client spinner clears.
        _ => Ok(None),
    };

    // Exactly one acknowledgment per invocation, success or failure.
    let ack = match &outcome {
        Ok(toast) => state.messenger.answer_callback(&cb_id, toast.as_deref()).await,
        Err(e) => {
            eprintln!("callback '{data}' failed: {e}");
            state
                .messenger
                .answer_callback(&cb_id, Some(user_notice(e)))
                .await
        }
    };
    if let Err(e) = ack {
        eprintln!("callback ack failed for '{data}': {e}");
    }

    Ok(())
}

/// Run one navigation command: content fetches, keyboard build, exactly one
/// screen transition. Returns an optional toast for the acknowledgment.
async fn dispatch(
    cmd: NavCommand,
    origin: MessageRef,
    state: &AppState,
) -> qbot_core::Result<Option<String>> {
    match cmd {
        NavCommand::ListChapters => show_chapter_page(origin, 0, PICK_CHAPTER, state).await,
        NavCommand::Page(page) => {
            show_chapter_page(origin, page as usize, CHAPTER_LIST, state).await
        }

        NavCommand::ViewChapter(number) => {
            let chapter = state.content.chapter(number).await?;
            let html = format!(
                "🕋 <b>{}. {}</b>\n\n▫️ Oyatlar soni: {}\n💡 Oyatni o'qish uchun quyidagi tugmalarni bosing:",
                chapter.number, chapter.name, chapter.verse_count
            );
            state
                .messenger
                .edit_keyboard(
                    origin,
                    &html,
                    keyboards::verse_navigation(number, 1, chapter.verse_count),
                )
                .await?;
            Ok(None)
        }

        NavCommand::Verse { chapter, verse } => {
            let session = state.sessions.get_or_default(origin.chat_id).await;
            let translation = state
                .content
                .verse(chapter, verse, session.language.translation_edition())
                .await?;
            let original = state
                .content
                .verse(chapter, verse, &state.cfg.script_edition)
                .await?;
            let detail = state.content.chapter(chapter).await?;

            let html = format!(
                "📖 <b>{}, {verse}-oyat</b>\n\n{}\n\n🇺🇿 <b>Ma'nosi:</b>\n{}",
                detail.translated_name, original.text, translation.text
            );
            state
                .messenger
                .edit_keyboard(
                    origin,
                    &html,
                    keyboards::verse_navigation(chapter, verse, detail.verse_count),
                )
                .await?;
            Ok(None)
        }

        NavCommand::Audio { chapter, verse } => {
            let sent = async {
                let url = state
                    .content
                    .verse_audio(chapter, verse, &state.cfg.reciter_edition)
                    .await?;
                state
                    .messenger
                    .send_audio(
                        origin.chat_id,
                        AudioItem::new(url)
                            .title(format!("{verse}-oyat"))
                            .performer(state.cfg.reciter_name.clone()),
                    )
                    .await?;
                Ok::<_, Error>(())
            }
            .await;

            match sent {
                Ok(()) => Ok(Some("Audio yuborilmoqda...".to_string())),
                Err(e) => {
                    // Degrade to a reply instead of a toast so the notice
                    // stays visible next to the verse screen.
                    eprintln!("audio {chapter}:{verse} failed: {e}");
                    state.messenger.send_html(origin.chat_id, AUDIO_MISSING).await?;
                    Ok(None)
                }
            }
        }

        NavCommand::Guide => {
            state
                .messenger
                .edit_keyboard(origin, GUIDE, keyboards::guide_menu())
                .await?;
            Ok(None)
        }

        NavCommand::BackToMain => {
            state
                .messenger
                .edit_keyboard(origin, MAIN_MENU, keyboards::main_menu())
                .await?;
            Ok(None)
        }

        // Inert page indicator: self-loop, acknowledgment only.
        NavCommand::Noop => Ok(None),
    }
}

async fn show_chapter_page(
    origin: MessageRef,
    page: usize,
    heading: &str,
    state: &AppState,
) -> qbot_core::Result<Option<String>> {
    let chapters = state.content.list_chapters().await;
    if chapters.is_empty() {
        // Empty means "temporarily unavailable", never a zero-chapter corpus.
        return Ok(Some(CATALOG_UNAVAILABLE.to_string()));
    }

    state
        .messenger
        .edit_keyboard(origin, heading, keyboards::chapter_list_page(&chapters, page))
        .await?;
    Ok(None)
}
