//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters. Every source returns records newest first.

use crate::domain::{DiaryEntry, DigestError, FeedItem, Report, ScrapedLink, TravelEntry};

/// RSS/Atom feed client (Letterboxd, Oku).
#[async_trait::async_trait]
pub trait FeedPort: Send + Sync {
    /// Fetch and parse the feed at `url`. Items keep feed order.
    async fn fetch_feed(&self, url: &str) -> Result<Vec<FeedItem>, DigestError>;
}

/// Show-tracking diary client (Serializd).
#[async_trait::async_trait]
pub trait DiaryPort: Send + Sync {
    async fn fetch_diary(&self, url: &str) -> Result<Vec<DiaryEntry>, DigestError>;
}

/// HTML scrape client (Backloggd).
#[async_trait::async_trait]
pub trait ScrapePort: Send + Sync {
    /// Scrape the game shelf at `url`.
    ///
    /// # Errors
    /// `DigestError::EmptyResult` when the page yields zero matches.
    async fn scrape_games(&self, url: &str) -> Result<Vec<ScrapedLink>, DigestError>;
}

/// Travel-log client.
#[async_trait::async_trait]
pub trait TravelLogPort: Send + Sync {
    async fn fetch_trips(&self, url: &str) -> Result<Vec<TravelEntry>, DigestError>;
}

/// Flag glyph lookup keyed by two-letter country code.
pub trait FlagLookup: Send + Sync {
    fn flag_for(&self, country_code: &str) -> Option<String>;
}

/// Static preamble source and report sink.
#[async_trait::async_trait]
pub trait ReportStore: Send + Sync {
    async fn read_static(&self) -> Result<String, DigestError>;

    /// Persist the finished report. Either the whole document lands or nothing does.
    async fn write_report(&self, report: &Report) -> Result<(), DigestError>;
}
