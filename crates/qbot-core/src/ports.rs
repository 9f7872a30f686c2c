use async_trait::async_trait;

use crate::{
    domain::{ChapterSummary, Verse},
    Result,
};

/// Hexagonal port for the read-only content provider.
///
/// The HTTP implementation lives in `qbot-quran`; tests substitute in-memory
/// fakes. All operations are idempotent and side-effect free beyond the
/// remote call itself.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Full catalog in ascending order by chapter number.
    ///
    /// Returns an empty Vec on transport failure: callers must treat empty
    /// as "temporarily unavailable", not as a zero-chapter corpus. This is
    /// deliberately a different contract from [`ContentSource::chapter`],
    /// which propagates.
    async fn list_chapters(&self) -> Vec<ChapterSummary>;

    /// Single catalog entry. `NotFound` if `number` is outside the catalog,
    /// `Upstream` on transport failure.
    async fn chapter(&self, number: u32) -> Result<ChapterSummary>;

    /// One verse in the given edition (original script or a translation).
    async fn verse(&self, chapter: u32, verse: u32, edition: &str) -> Result<Verse>;

    /// Audio URL for one verse in the given reciter edition.
    async fn verse_audio(&self, chapter: u32, verse: u32, reciter: &str) -> Result<String>;
}
