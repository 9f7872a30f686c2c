//! Pure keyboard builders.
//!
//! Every screen's controls are computed here from navigation state alone; no
//! I/O, deterministic given inputs. The Telegram adapter converts
//! [`InlineKeyboard`] grids into its own markup type.

use crate::domain::ChapterSummary;
use crate::messaging::types::{InlineButton, InlineKeyboard};
use crate::nav::NavCommand;

/// Chapters shown per catalog page.
pub const PAGE_SIZE: usize = 10;

/// Fixed two-entry main menu: browse the catalog or open the guide.
pub fn main_menu() -> InlineKeyboard {
    InlineKeyboard::new(vec![
        vec![button("📖 Suralar ro'yxati", NavCommand::ListChapters)],
        vec![button("📖 Qo'llanma", NavCommand::Guide)],
    ])
}

/// One page of the chapter catalog.
///
/// Chapter buttons go two per row (a lone trailing button gets its own row),
/// followed by a navigation row — "previous" only past page 0, an inert
/// `page / total` indicator, "next" only while chapters remain — and a
/// back-to-main row. A `page` at or beyond the last page yields just the
/// navigation and back rows.
pub fn chapter_list_page(chapters: &[ChapterSummary], page: usize) -> InlineKeyboard {
    let start = page.saturating_mul(PAGE_SIZE);
    let slice = if start < chapters.len() {
        &chapters[start..(start + PAGE_SIZE).min(chapters.len())]
    } else {
        &[]
    };

    let mut rows: Vec<Vec<InlineButton>> = Vec::new();
    for pair in slice.chunks(2) {
        rows.push(
            pair.iter()
                .map(|s| {
                    button(
                        &format!("{}. {}", s.number, s.translated_name),
                        NavCommand::ViewChapter(s.number),
                    )
                })
                .collect(),
        );
    }

    let total_pages = chapters.len().div_ceil(PAGE_SIZE);
    let mut nav = Vec::new();
    if page > 0 {
        nav.push(button("⬅️", NavCommand::Page(page as u32 - 1)));
    }
    nav.push(button(
        &format!("{} / {}", page + 1, total_pages),
        NavCommand::Noop,
    ));
    if start + PAGE_SIZE < chapters.len() {
        nav.push(button("➡️", NavCommand::Page(page as u32 + 1)));
    }
    rows.push(nav);

    rows.push(vec![button("🏠 Asosiy menyu", NavCommand::BackToMain)]);
    InlineKeyboard::new(rows)
}

/// Controls for a single verse screen.
///
/// Audio row, then previous/next bound to the neighboring verses — each
/// omitted (not disabled) at its boundary, and the whole row omitted for a
/// one-verse chapter — then the back row.
pub fn verse_navigation(chapter: u32, current: u32, total: u32) -> InlineKeyboard {
    let mut rows = vec![vec![button(
        "🔊 Audio",
        NavCommand::Audio {
            chapter,
            verse: current,
        },
    )]];

    let mut step = Vec::new();
    if current > 1 {
        step.push(button(
            "⬅️ Oldingi",
            NavCommand::Verse {
                chapter,
                verse: current - 1,
            },
        ));
    }
    if current < total {
        step.push(button(
            "Keyingi ➡️",
            NavCommand::Verse {
                chapter,
                verse: current + 1,
            },
        ));
    }
    if !step.is_empty() {
        rows.push(step);
    }

    rows.push(vec![
        button("📚 Sura ro'yxatiga", NavCommand::ListChapters),
        button("🏠 Menyu", NavCommand::BackToMain),
    ]);
    InlineKeyboard::new(rows)
}

/// Guide screen only needs a way home.
pub fn guide_menu() -> InlineKeyboard {
    InlineKeyboard::new(vec![vec![button("🏠 Asosiy menyu", NavCommand::BackToMain)]])
}

fn button(label: &str, cmd: NavCommand) -> InlineButton {
    InlineButton {
        label: label.to_string(),
        callback_data: cmd.encode(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: u32) -> Vec<ChapterSummary> {
        (1..=n)
            .map(|i| ChapterSummary {
                number: i,
                name: format!("سورة {i}"),
                translated_name: format!("Surah {i}"),
                verse_count: 7,
            })
            .collect()
    }

    fn chapter_buttons(kb: &InlineKeyboard) -> Vec<&InlineButton> {
        kb.rows
            .iter()
            .flatten()
            .filter(|b| b.callback_data.starts_with("view_surah_"))
            .collect()
    }

    fn has_token(kb: &InlineKeyboard, token: &str) -> bool {
        kb.rows.iter().flatten().any(|b| b.callback_data == token)
    }

    #[test]
    fn main_menu_is_stable() {
        let kb = main_menu();
        assert_eq!(kb.rows.len(), 2);
        assert_eq!(kb.rows[0][0].callback_data, "list_surahs");
        assert_eq!(kb.rows[1][0].callback_data, "guide");
        // Repeated invocations yield the identical grid.
        assert_eq!(main_menu(), kb);
    }

    #[test]
    fn pagination_over_full_catalog() {
        let chapters = catalog(114);
        let total_pages = 12;
        for page in 0..total_pages {
            let kb = chapter_list_page(&chapters, page);
            let expected = PAGE_SIZE.min(114 - page * PAGE_SIZE);
            assert_eq!(chapter_buttons(&kb).len(), expected, "page {page}");
            assert_eq!(
                has_token(&kb, &format!("page_{}", page.wrapping_sub(1))),
                page > 0,
                "prev on page {page}"
            );
            assert_eq!(
                has_token(&kb, &format!("page_{}", page + 1)),
                (page + 1) * PAGE_SIZE < 114,
                "next on page {page}"
            );
        }
    }

    #[test]
    fn page_indicator_is_inert() {
        let chapters = catalog(114);
        let kb = chapter_list_page(&chapters, 3);
        let noop = kb
            .rows
            .iter()
            .flatten()
            .find(|b| b.callback_data == "noop")
            .expect("indicator");
        assert_eq!(noop.label, "4 / 12");
    }

    #[test]
    fn chapter_rows_pair_up_with_lone_trailer() {
        // 5 chapters on the last page: 2+2+1 across three rows.
        let chapters = catalog(5);
        let kb = chapter_list_page(&chapters, 0);
        let widths: Vec<usize> = kb
            .rows
            .iter()
            .filter(|r| r[0].callback_data.starts_with("view_surah_"))
            .map(|r| r.len())
            .collect();
        assert_eq!(widths, vec![2, 2, 1]);
    }

    #[test]
    fn page_beyond_end_degrades_to_controls_only() {
        let chapters = catalog(114);
        let kb = chapter_list_page(&chapters, 99);
        assert!(chapter_buttons(&kb).is_empty());
        assert!(has_token(&kb, "noop"));
        assert!(has_token(&kb, "back_to_main"));
        // Going further back from nowhere is still offered.
        assert!(has_token(&kb, "page_98"));
        assert!(!has_token(&kb, "page_100"));
        // No row may be empty.
        assert!(kb.rows.iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn verse_navigation_boundaries() {
        // Interior verse: both neighbors present.
        let kb = verse_navigation(2, 5, 286);
        assert!(has_token(&kb, "ayah_2_4"));
        assert!(has_token(&kb, "ayah_2_6"));

        // First verse: no previous.
        let kb = verse_navigation(2, 1, 286);
        assert!(!has_token(&kb, "ayah_2_0"));
        assert!(has_token(&kb, "ayah_2_2"));

        // Last verse of chapter 1 (7 ayahs): previous only.
        let kb = verse_navigation(1, 7, 7);
        assert!(has_token(&kb, "ayah_1_6"));
        assert!(!has_token(&kb, "ayah_1_8"));

        // Single-verse chapter: the step row disappears entirely.
        let kb = verse_navigation(3, 1, 1);
        assert!(kb.rows.iter().all(|r| !r.is_empty()));
        assert!(!kb
            .rows
            .iter()
            .flatten()
            .any(|b| b.callback_data.starts_with("ayah_")));
    }

    #[test]
    fn verse_navigation_always_offers_audio_and_exits() {
        let kb = verse_navigation(1, 3, 7);
        assert!(has_token(&kb, "audio_1_3"));
        assert!(has_token(&kb, "list_surahs"));
        assert!(has_token(&kb, "back_to_main"));
    }
}
