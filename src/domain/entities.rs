//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/feed/HTML types here — these are mapped from adapters.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// A single movie, book, show, or game row, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub title: String,
    pub url: String,
}

impl MediaItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }
}

/// Raw RSS item as emitted by a feed (newest first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
}

/// Raw fragment scraped from an HTML page. `href` is site-relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedLink {
    pub title: String,
    pub href: String,
}

/// Missing and `null` both decode to the type's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One season of a show, as embedded in a diary review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShowSeason {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// A single review from the show-tracking diary.
///
/// Show-level reviews carry no season; `season_id` is then 0 and the title
/// falls back to `season_name`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub season_id: i64,
    /// Usually absent in the source; resolved from `show_seasons`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub season_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub show_seasons: Vec<ShowSeason>,
}

/// A single stay from the travel log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelEntry {
    pub city: String,
    pub country_name: String,
    pub country_code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Calendar year tag, e.g. "2024".
    pub year: String,
    pub is_transit: bool,
}

/// A reconciled country visit, paired with its flag glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryVisit {
    pub name: String,
    pub code: String,
    pub flag: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCategory {
    Movies,
    Books,
    Shows,
    Games,
}

/// The final markdown document. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    body: String,
}

impl Report {
    pub fn new(body: String) -> Self {
        Self { body }
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }
}
