/// Inline keyboard as an ordered grid of rows.
///
/// Telegram-specific markup conversion lives in the Telegram adapter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineKeyboard {
    pub rows: Vec<Vec<InlineButton>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

impl InlineKeyboard {
    pub fn new(rows: Vec<Vec<InlineButton>>) -> Self {
        Self { rows }
    }
}

/// One recitation clip, referenced by URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioItem {
    pub url: String,
    pub caption: Option<String>,
    pub title: Option<String>,
    pub performer: Option<String>,
}

impl AudioItem {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            caption: None,
            title: None,
            performer: None,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn performer(mut self, performer: impl Into<String>) -> Self {
        self.performer = Some(performer.into());
        self
    }
}
