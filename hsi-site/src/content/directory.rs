//! Chapter directory presentation

use serde::Serialize;
use shared::models::{Chapter, ChapterStatus};

use super::flags::country_flag;

/// Countries shown in the forming strip while no forming chapter
/// exists in the store yet
pub const STATIC_FORMING: [(&str, &str); 6] = [
    ("Japan", "🇯🇵"),
    ("Taiwan", "🇹🇼"),
    ("USA", "🇺🇸"),
    ("Germany", "🇩🇪"),
    ("Spain", "🇪🇸"),
    ("France", "🇫🇷"),
];

/// Chapters split into the two display cohorts
#[derive(Debug, Default)]
pub struct Partition {
    pub established: Vec<Chapter>,
    pub forming: Vec<Chapter>,
}

/// Split chapters into established (established or active) and forming
/// cohorts. Inactive chapters appear in neither; input order is kept.
pub fn partition(chapters: Vec<Chapter>) -> Partition {
    let mut split = Partition::default();
    for chapter in chapters {
        if chapter.status.is_established_like() {
            split.established.push(chapter);
        } else if chapter.status == ChapterStatus::Forming {
            split.forming.push(chapter);
        }
    }
    split
}

/// One entry in the forming-chapters strip
#[derive(Debug, Clone, Serialize)]
pub struct FormingEntry {
    pub country_name: String,
    pub flag: String,
    /// True when the entry comes from the static placeholder list
    pub placeholder: bool,
}

/// Entries for the forming strip: live forming chapters when any exist,
/// otherwise the static placeholder countries
pub fn forming_entries(forming: &[Chapter]) -> Vec<FormingEntry> {
    if forming.is_empty() {
        STATIC_FORMING
            .iter()
            .map(|(country, flag)| FormingEntry {
                country_name: (*country).to_string(),
                flag: (*flag).to_string(),
                placeholder: true,
            })
            .collect()
    } else {
        forming
            .iter()
            .map(|chapter| FormingEntry {
                country_name: chapter.country_name_en.clone(),
                flag: country_flag(&chapter.country_code),
                placeholder: false,
            })
            .collect()
    }
}
