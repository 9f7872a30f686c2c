/// Core error type for the bot.
///
/// Adapter crates should map their specific errors into this type so the bot
/// core can handle failures consistently (user-facing notice vs process fault).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    /// Requested chapter/verse is outside the catalog. User input error,
    /// shown as a short notice.
    #[error("not found: {0}")]
    NotFound(String),

    /// Content provider unreachable or returned an invalid payload. Shown
    /// as a generic failure notice, never surfaced raw.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Malformed or oversized verse range. Rejected before any upstream call.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("external error: {0}")]
    External(String),
}

pub type Result<T> = std::result::Result<T, Error>;
