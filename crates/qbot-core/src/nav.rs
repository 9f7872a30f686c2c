//! Callback-token codec and free-text range parsing.
//!
//! Navigation position is never stored server-side: every screen carries its
//! target state encoded in the button's callback data, and each interaction
//! reconstructs state from that token alone.

use regex::Regex;
use std::sync::OnceLock;

use crate::{errors::Error, Result};

/// Widest verse range a single free-text request may cover (`end - start`).
pub const MAX_RANGE_SPAN: u32 = 10;

/// A decoded callback token.
///
/// The wire grammar is:
/// `list_surahs` | `page_<n>` | `view_surah_<n>` | `ayah_<n>_<m>` |
/// `audio_<n>_<m>` | `guide` | `back_to_main` | `noop`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    ListChapters,
    Page(u32),
    ViewChapter(u32),
    Verse { chapter: u32, verse: u32 },
    Audio { chapter: u32, verse: u32 },
    Guide,
    BackToMain,
    Noop,
}

impl NavCommand {
    /// Canonical token for this command. Always round-trips through
    /// [`NavCommand::decode`]; stays far below Telegram's 64-byte
    /// callback-data limit.
    pub fn encode(&self) -> String {
        match self {
            NavCommand::ListChapters => "list_surahs".to_string(),
            NavCommand::Page(n) => format!("page_{n}"),
            NavCommand::ViewChapter(n) => format!("view_surah_{n}"),
            NavCommand::Verse { chapter, verse } => format!("ayah_{chapter}_{verse}"),
            NavCommand::Audio { chapter, verse } => format!("audio_{chapter}_{verse}"),
            NavCommand::Guide => "guide".to_string(),
            NavCommand::BackToMain => "back_to_main".to_string(),
            NavCommand::Noop => "noop".to_string(),
        }
    }

    /// Decode a callback token. First match wins; the shapes are disjoint by
    /// their literal prefixes. `None` means "unrecognized" and the caller
    /// ignores the input (ack only, no screen change).
    ///
    /// Numeric parameters keep `parseInt` semantics from the JS original: a
    /// leading run of digits is accepted and trailing garbage is ignored
    /// (`page_3x` decodes as page 3). An empty digit run fails the match.
    pub fn decode(data: &str) -> Option<NavCommand> {
        match data {
            "list_surahs" => return Some(NavCommand::ListChapters),
            "guide" => return Some(NavCommand::Guide),
            "back_to_main" => return Some(NavCommand::BackToMain),
            "noop" => return Some(NavCommand::Noop),
            _ => {}
        }

        if let Some(rest) = data.strip_prefix("page_") {
            return parse_leading_u32(rest).map(NavCommand::Page);
        }
        if let Some(rest) = data.strip_prefix("view_surah_") {
            return parse_leading_u32(rest).map(NavCommand::ViewChapter);
        }
        if let Some(rest) = data.strip_prefix("ayah_") {
            return parse_u32_pair(rest).map(|(chapter, verse)| NavCommand::Verse { chapter, verse });
        }
        if let Some(rest) = data.strip_prefix("audio_") {
            return parse_u32_pair(rest).map(|(chapter, verse)| NavCommand::Audio { chapter, verse });
        }

        None
    }
}

/// Parse the leading decimal run of `s`, ignoring anything after it.
fn parse_leading_u32(s: &str) -> Option<u32> {
    let digits: &str = {
        let end = s
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        &s[..end]
    };
    if digits.is_empty() {
        return None;
    }
    digits.parse::<u32>().ok()
}

/// `<n>_<m>` with the same leading-digit tolerance on the second number.
fn parse_u32_pair(s: &str) -> Option<(u32, u32)> {
    let (first, second) = s.split_once('_')?;
    if first.is_empty() || !first.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n = first.parse::<u32>().ok()?;
    let m = parse_leading_u32(second)?;
    Some((n, m))
}

/// A validated free-text audio range: `chapter:start-end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioRangeRequest {
    pub chapter: u32,
    pub start: u32,
    pub end: u32,
}

fn range_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)[:\s-](\d+)-(\d+)$").expect("range pattern"))
}

impl AudioRangeRequest {
    /// Validate a raw triple. Rejections are `Validation` errors and must be
    /// shown inline before any upstream call is made.
    pub fn new(chapter: u32, start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(Error::Validation(format!(
                "start verse {start} is after end verse {end}"
            )));
        }
        if end - start > MAX_RANGE_SPAN {
            return Err(Error::Validation(format!(
                "range spans {} verses, maximum is {}",
                end - start + 1,
                MAX_RANGE_SPAN + 1
            )));
        }
        Ok(Self {
            chapter,
            start,
            end,
        })
    }

    /// Match a free-text line against `^(\d+)[:\s-](\d+)-(\d+)$`.
    ///
    /// `None` means the line is not a range request at all (silently
    /// ignored); `Some(Err(..))` means it matched but failed validation.
    pub fn parse(text: &str) -> Option<Result<Self>> {
        let caps = range_pattern().captures(text.trim())?;
        let chapter = caps[1].parse::<u32>().ok()?;
        let start = caps[2].parse::<u32>().ok()?;
        let end = caps[3].parse::<u32>().ok()?;
        Some(Self::new(chapter, start, end))
    }

    /// Number of verses covered. Never zero.
    pub fn verse_count(&self) -> u32 {
        self.end - self.start + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_fixed_tokens() {
        assert_eq!(
            NavCommand::decode("list_surahs"),
            Some(NavCommand::ListChapters)
        );
        assert_eq!(NavCommand::decode("guide"), Some(NavCommand::Guide));
        assert_eq!(
            NavCommand::decode("back_to_main"),
            Some(NavCommand::BackToMain)
        );
        assert_eq!(NavCommand::decode("noop"), Some(NavCommand::Noop));
    }

    #[test]
    fn decodes_parameterized_tokens() {
        assert_eq!(NavCommand::decode("page_0"), Some(NavCommand::Page(0)));
        assert_eq!(NavCommand::decode("page_11"), Some(NavCommand::Page(11)));
        assert_eq!(
            NavCommand::decode("view_surah_114"),
            Some(NavCommand::ViewChapter(114))
        );
        assert_eq!(
            NavCommand::decode("ayah_2_255"),
            Some(NavCommand::Verse {
                chapter: 2,
                verse: 255
            })
        );
        assert_eq!(
            NavCommand::decode("audio_1_7"),
            Some(NavCommand::Audio {
                chapter: 1,
                verse: 7
            })
        );
    }

    #[test]
    fn keeps_parse_int_leniency() {
        // Trailing garbage after the digit run is ignored, like parseInt.
        assert_eq!(NavCommand::decode("page_3x"), Some(NavCommand::Page(3)));
        assert_eq!(
            NavCommand::decode("ayah_1_7extra"),
            Some(NavCommand::Verse {
                chapter: 1,
                verse: 7
            })
        );
        // But an empty digit run is not a match.
        assert_eq!(NavCommand::decode("page_"), None);
        assert_eq!(NavCommand::decode("page_x3"), None);
        assert_eq!(NavCommand::decode("ayah_1_"), None);
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(NavCommand::decode(""), None);
        assert_eq!(NavCommand::decode("surahs"), None);
        assert_eq!(NavCommand::decode("ayah_1"), None);
        assert_eq!(NavCommand::decode("2:5-8"), None);
    }

    #[test]
    fn verse_tokens_round_trip() {
        for chapter in [1u32, 2, 18, 114] {
            for verse in [1u32, 7, 255] {
                let cmd = NavCommand::Verse { chapter, verse };
                assert_eq!(NavCommand::decode(&cmd.encode()), Some(cmd));
            }
        }
    }

    #[test]
    fn all_tokens_fit_callback_data_limit() {
        let widest = [
            NavCommand::Verse {
                chapter: u32::MAX,
                verse: u32::MAX,
            },
            NavCommand::Audio {
                chapter: u32::MAX,
                verse: u32::MAX,
            },
            NavCommand::Page(u32::MAX),
            NavCommand::ViewChapter(u32::MAX),
        ];
        for cmd in widest {
            assert!(cmd.encode().len() <= 64);
        }
    }

    #[test]
    fn parses_range_text() {
        let req = AudioRangeRequest::parse("2:5-8").unwrap().unwrap();
        assert_eq!((req.chapter, req.start, req.end), (2, 5, 8));
        // Space and dash separators are accepted too.
        assert!(AudioRangeRequest::parse("2 5-8").is_some());
        assert!(AudioRangeRequest::parse("2-5-8").is_some());
        assert!(AudioRangeRequest::parse("hello").is_none());
        assert!(AudioRangeRequest::parse("2:5").is_none());
        assert!(AudioRangeRequest::parse("2:5-8 extra").is_none());
    }

    #[test]
    fn rejects_inverted_range() {
        let res = AudioRangeRequest::parse("2:8-5").unwrap();
        assert!(matches!(res, Err(Error::Validation(_))));
    }

    #[test]
    fn rejects_oversized_range() {
        let res = AudioRangeRequest::parse("2:1-20").unwrap();
        assert!(matches!(res, Err(Error::Validation(_))));
        // The widest allowed window still passes.
        let ok = AudioRangeRequest::parse("2:1-11").unwrap().unwrap();
        assert_eq!(ok.verse_count(), 11);
    }
}
