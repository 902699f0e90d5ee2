//! Reduce per-episode diary reviews to one row per show + season.

use crate::domain::selection::{Direction, dedupe_by_key};
use crate::domain::{DiaryEntry, MediaItem};

/// Look up the season name by id in the review's embedded season list.
/// Falls back to whatever the source put in `season_name`.
fn resolve_season_name(entry: &DiaryEntry) -> &str {
    entry
        .show_seasons
        .iter()
        .rev()
        .find(|s| s.id == entry.season_id)
        .map(|s| s.name.as_str())
        .unwrap_or(entry.season_name.as_str())
}

/// Map diary entries to `"<show>, <season>"` rows, keeping the first (newest)
/// occurrence of each title.
pub fn resolve_seasons(entries: &[DiaryEntry], show_base_url: &str) -> Vec<MediaItem> {
    let base = show_base_url.trim_end_matches('/');
    let rows: Vec<MediaItem> = entries
        .iter()
        .map(|entry| MediaItem {
            title: format!("{}, {}", entry.show_name, resolve_season_name(entry)),
            url: format!("{}/{}", base, entry.show_id),
        })
        .collect();
    dedupe_by_key(rows, |item| item.title.clone(), Direction::Forward)
}
