use serde::Deserialize;

/// Number of surahs in the catalog. Fixed by the corpus itself.
pub const CHAPTER_COUNT: u32 = 114;

/// Telegram chat id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub i64);

/// Telegram message id (numeric).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(pub i32);

/// A stable reference to a Telegram message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MessageRef {
    pub chat_id: ChatId,
    pub message_id: MessageId,
}

/// One catalog entry as served by the content provider.
///
/// Identity is `number`; never persisted locally. Field renames follow the
/// AlQuran Cloud payload.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChapterSummary {
    pub number: u32,
    /// Name in Arabic script.
    pub name: String,
    /// English rendering of the name, used for button labels.
    #[serde(rename = "englishName")]
    pub translated_name: String,
    #[serde(rename = "numberOfAyahs")]
    pub verse_count: u32,
}

/// One verse in a specific edition (original script or a translation).
/// Fetched on demand, never cached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verse {
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// UI language of a chat session. Only Uzbek is wired today; the enum exists
/// so a language-switch path has somewhere to go.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Uzbek,
}

impl Language {
    /// Translation edition id for this language on the content provider.
    pub fn translation_edition(self) -> &'static str {
        match self {
            Language::Uzbek => "uz.sodik",
        }
    }
}
