//! Title and URL cleanup for feed sources.
//!
//! Letterboxd titles look like `Heat, 1995 - ★★★★★` and links carry the
//! account segment (`https://letterboxd.com/<user>/film/heat/`).

use regex::Regex;
use std::sync::LazyLock;

/// `, YYYY` at the very end, optionally followed by ` - ` and up to five stars.
static RATING_YEAR_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r", ([0-9]{4})(?: - ?[★]{0,5})?$").expect("valid suffix regex"));

/// `https://<domain>/<account>/` prefix.
static ACCOUNT_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(https?://[^/]+)/[^/]+/").expect("valid account regex"));

/// Remove a trailing `, <year>[ - <stars>]` suffix. Input without one is returned unchanged.
pub fn strip_rating_year_suffix(raw: &str) -> String {
    match RATING_YEAR_SUFFIX.find(raw) {
        Some(m) => raw[..m.start()].to_string(),
        None => raw.to_string(),
    }
}

/// Drop the account path segment: `https://d/<user>/rest` -> `https://d/rest`.
pub fn canonicalize_source_url(raw: &str) -> String {
    ACCOUNT_SEGMENT.replace(raw, "$1/").into_owned()
}
