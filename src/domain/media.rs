//! Per-source media normalization: raw source records -> capped, deduped rows.

use crate::domain::seasons::resolve_seasons;
use crate::domain::selection::{Direction, cap_to_recent, dedupe_by_key};
use crate::domain::titles::{canonicalize_source_url, strip_rating_year_suffix};
use crate::domain::{DiaryEntry, FeedItem, MediaItem, ScrapedLink};

fn dedupe_titles(items: Vec<MediaItem>) -> Vec<MediaItem> {
    dedupe_by_key(items, |item| item.title.clone(), Direction::Forward)
}

/// Letterboxd diary feed: strip `, YYYY - ★★★` and the account segment from links.
pub fn normalize_movies(feed: &[FeedItem], limit: usize) -> Vec<MediaItem> {
    let items = cap_to_recent(feed, limit)
        .into_iter()
        .map(|item| MediaItem {
            title: strip_rating_year_suffix(&item.title),
            url: canonicalize_source_url(&item.link),
        })
        .collect();
    dedupe_titles(items)
}

/// Oku reading feed. Titles and links are already clean.
pub fn normalize_books(feed: &[FeedItem], limit: usize) -> Vec<MediaItem> {
    let items = cap_to_recent(feed, limit)
        .into_iter()
        .map(|item| MediaItem {
            title: item.title,
            url: item.link,
        })
        .collect();
    dedupe_titles(items)
}

/// Serializd diary. Dedupe happens per show + season before capping, so three
/// episodes of one season still leave room for other shows.
pub fn normalize_shows(diary: &[DiaryEntry], show_base_url: &str, limit: usize) -> Vec<MediaItem> {
    cap_to_recent(&resolve_seasons(diary, show_base_url), limit)
}

/// Backloggd "playing" shelf. `href` values are site-relative.
pub fn normalize_games(
    scraped: &[ScrapedLink],
    site_base_url: &str,
    limit: usize,
) -> Vec<MediaItem> {
    let base = site_base_url.trim_end_matches('/');
    let items = scraped
        .iter()
        .map(|link| MediaItem {
            title: link.title.trim().to_string(),
            url: format!("{}{}", base, link.href),
        })
        .collect();
    cap_to_recent(&dedupe_titles(items), limit)
}
