use async_trait::async_trait;

use crate::{
    domain::{ChatId, MessageRef},
    messaging::types::{AudioItem, InlineKeyboard},
    Result,
};

/// Cross-messenger port.
///
/// Telegram is the first implementation; the shape is the six primitives the
/// navigation core actually needs, so other transports can fit behind it.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_html(&self, chat_id: ChatId, html: &str) -> Result<MessageRef>;
    async fn edit_html(&self, msg: MessageRef, html: &str) -> Result<()>;
    async fn delete_message(&self, msg: MessageRef) -> Result<()>;

    async fn send_keyboard(
        &self,
        chat_id: ChatId,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<MessageRef>;

    /// Edit a message's text and controls in place (token-triggered
    /// navigation edits the current screen rather than posting a new one).
    async fn edit_keyboard(
        &self,
        msg: MessageRef,
        html: &str,
        keyboard: InlineKeyboard,
    ) -> Result<()>;

    async fn send_audio(&self, chat_id: ChatId, item: AudioItem) -> Result<MessageRef>;

    /// Deliver several clips as one grouped reply.
    async fn send_audio_group(&self, chat_id: ChatId, items: Vec<AudioItem>) -> Result<()>;

    /// Acknowledge a callback interaction, optionally with a short toast.
    async fn answer_callback(&self, callback_id: &str, toast: Option<&str>) -> Result<()>;
}
