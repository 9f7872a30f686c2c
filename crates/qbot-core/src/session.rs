use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::domain::{ChatId, Language};

/// Per-chat session data. Created with defaults on first contact; the
/// language flag is currently write-once (no switch path is wired yet).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionData {
    pub language: Language,
}

/// In-memory session store. The only cross-update state the bot keeps;
/// everything else is reconstructed from callback tokens.
#[derive(Default)]
pub struct SessionStore {
    inner: Mutex<HashMap<i64, SessionData>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Session for a chat, created with defaults on first contact.
    pub async fn get_or_default(&self, chat_id: ChatId) -> SessionData {
        let mut map = self.inner.lock().await;
        *map.entry(chat_id.0).or_default()
    }

    pub async fn set_language(&self, chat_id: ChatId, language: Language) {
        let mut map = self.inner.lock().await;
        map.entry(chat_id.0).or_default().language = language;
    }
}
