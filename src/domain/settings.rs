//! Run-wide constants, passed explicitly into the core so tests can swap them.

use crate::domain::MediaCategory;
use crate::domain::selection::DEFAULT_RECENT_LIMIT;
use crate::domain::travel::{KnownMissingTrip, known_missing_trips};

/// Fallback text for sections with nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub movies: String,
    pub books: String,
    pub shows: String,
    pub games: String,
    pub countries: String,
}

impl Placeholders {
    pub fn for_category(&self, category: MediaCategory) -> &str {
        match category {
            MediaCategory::Movies => &self.movies,
            MediaCategory::Books => &self.books,
            MediaCategory::Shows => &self.shows,
            MediaCategory::Games => &self.games,
        }
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self {
            movies: "Not watched any movies recently.".to_string(),
            books: "Not reading any books at the moment.".to_string(),
            shows: "Not watched any TV shows recently.".to_string(),
            games: "Not playing any video games at the moment.".to_string(),
            countries: "No countries visited.".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DigestSettings {
    pub recent_limit: usize,
    pub placeholders: Placeholders,
    /// Airport/layover cities that never count as a visit.
    pub excluded_cities: Vec<String>,
    pub known_missing_trips: Vec<KnownMissingTrip>,
}

impl Default for DigestSettings {
    fn default() -> Self {
        Self {
            recent_limit: DEFAULT_RECENT_LIMIT,
            placeholders: Placeholders::default(),
            excluded_cities: ["Doha", "Dubai", "Istanbul"]
                .into_iter()
                .map(String::from)
                .collect(),
            known_missing_trips: known_missing_trips(),
        }
    }
}
