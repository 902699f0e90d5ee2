//! Digest assembly: fetch every source in turn -> normalize -> render -> persist.
//!
//! - Sources are fetched sequentially; the first error aborts the run
//! - The report is written last, so a failed run leaves the old document intact
//! - Section order and headings are fixed

use crate::domain::markdown::{format_country_section, format_media_section};
use crate::domain::media::{normalize_books, normalize_games, normalize_movies, normalize_shows};
use crate::domain::travel::reconcile_travel;
use crate::domain::{CountryVisit, DigestError, DigestSettings, MediaCategory, MediaItem, Report};
use crate::ports::{DiaryPort, FeedPort, FlagLookup, ReportStore, ScrapePort, TravelLogPort};
use crate::shared::config::SourceUrls;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

const TRAVEL_HEADER: &str = "## 🌍 Travel";
const TRAVEL_ATTRIBUTION: &str = "Countries I've visited, from [Nomad List](https://nomads.com).";
const BOOKS_HEADER: &str = "## 📚 Books";
const BOOKS_ATTRIBUTION: &str = "Recently read, from [Oku](https://oku.club).";
const SCREEN_HEADER: &str = "## 🎬 Movies and TV Shows";
const SCREEN_ATTRIBUTION: &str =
    "Recently watched, from [Letterboxd](https://letterboxd.com) and [Serializd](https://www.serializd.com).";
const MOVIES_SUBHEADER: &str = "### Recently watched movies";
const SHOWS_SUBHEADER: &str = "### Recently watched TV shows";
const GAMES_HEADER: &str = "## 🎮 Video Games";
const GAMES_ATTRIBUTION: &str = "Currently playing, from [Backloggd](https://backloggd.com).";

/// Outbound ports the digest needs, bundled for construction.
pub struct DigestPorts {
    pub feeds: Arc<dyn FeedPort>,
    pub diary: Arc<dyn DiaryPort>,
    pub scraper: Arc<dyn ScrapePort>,
    pub travel: Arc<dyn TravelLogPort>,
    pub flags: Arc<dyn FlagLookup>,
    pub store: Arc<dyn ReportStore>,
}

/// Normalized, render-ready lists for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digest {
    /// `(year, visits)`, in configured year order.
    pub travel: Vec<(String, Vec<CountryVisit>)>,
    pub books: Vec<MediaItem>,
    pub movies: Vec<MediaItem>,
    pub shows: Vec<MediaItem>,
    pub games: Vec<MediaItem>,
}

/// Digest service. Coordinates the sources, the core pipeline and the report store.
pub struct DigestService {
    ports: DigestPorts,
    urls: SourceUrls,
    settings: DigestSettings,
}

impl DigestService {
    pub fn new(ports: DigestPorts, urls: SourceUrls, settings: DigestSettings) -> Self {
        Self {
            ports,
            urls,
            settings,
        }
    }

    /// Fetch and normalize every source, in section order.
    pub async fn collect(&self) -> Result<Digest, DigestError> {
        let limit = self.settings.recent_limit;

        let trips = self.ports.travel.fetch_trips(&self.urls.travel_log).await?;
        let travel: Vec<(String, Vec<CountryVisit>)> = self
            .urls
            .travel_years
            .iter()
            .map(|year| {
                let visits = reconcile_travel(&trips, year, &self.settings, |code| {
                    self.ports.flags.flag_for(code)
                });
                info!(year = %year, countries = visits.len(), "reconciled travel");
                (year.clone(), visits)
            })
            .collect();

        let book_feed = self.ports.feeds.fetch_feed(&self.urls.books_feed).await?;
        let books = normalize_books(&book_feed, limit);
        info!(count = books.len(), "normalized books");

        let movie_feed = self.ports.feeds.fetch_feed(&self.urls.movies_feed).await?;
        let movies = normalize_movies(&movie_feed, limit);
        info!(count = movies.len(), "normalized movies");

        let diary = self.ports.diary.fetch_diary(&self.urls.shows_diary).await?;
        let shows = normalize_shows(&diary, &self.urls.show_base, limit);
        info!(count = shows.len(), "normalized shows");

        let scraped = self.ports.scraper.scrape_games(&self.urls.games_page).await?;
        let games = normalize_games(&scraped, &self.urls.games_base, limit);
        info!(count = games.len(), "normalized games");

        Ok(Digest {
            travel,
            books,
            movies,
            shows,
            games,
        })
    }

    /// Full run: collect, assemble against the static preamble, persist.
    pub async fn run(&self, today: NaiveDate) -> Result<Report, DigestError> {
        let digest = self.collect().await?;
        let static_content = self.ports.store.read_static().await?;
        let report = assemble_report(&static_content, &digest, &self.settings, today);
        self.ports.store.write_report(&report).await?;
        info!(date = %today, "digest complete");
        Ok(report)
    }
}

fn push_section(md: &mut String, header: &str, attribution: &str) {
    md.push_str(header);
    md.push('\n');
    md.push_str(attribution);
    md.push_str("\n\n");
}

fn push_subsection(md: &mut String, header: &str, body: &str) {
    md.push_str(header);
    md.push_str("\n\n");
    md.push_str(body);
}

/// Concatenate the static preamble with every rendered section and the footer.
pub fn assemble_report(
    static_content: &str,
    digest: &Digest,
    settings: &DigestSettings,
    today: NaiveDate,
) -> Report {
    let placeholders = &settings.placeholders;
    let mut md = String::new();
    md.push_str(static_content);
    md.push_str("\n\n");

    push_section(&mut md, TRAVEL_HEADER, TRAVEL_ATTRIBUTION);
    for (year, visits) in &digest.travel {
        push_subsection(
            &mut md,
            &format!("### Countries visited in {}", year),
            &format_country_section(visits, placeholders),
        );
    }

    push_section(&mut md, BOOKS_HEADER, BOOKS_ATTRIBUTION);
    md.push_str(&format_media_section(&digest.books, MediaCategory::Books, placeholders));

    push_section(&mut md, SCREEN_HEADER, SCREEN_ATTRIBUTION);
    push_subsection(
        &mut md,
        MOVIES_SUBHEADER,
        &format_media_section(&digest.movies, MediaCategory::Movies, placeholders),
    );
    push_subsection(
        &mut md,
        SHOWS_SUBHEADER,
        &format_media_section(&digest.shows, MediaCategory::Shows, placeholders),
    );

    push_section(&mut md, GAMES_HEADER, GAMES_ATTRIBUTION);
    md.push_str(&format_media_section(&digest.games, MediaCategory::Games, placeholders));

    md.push_str("---\n\n");
    md.push_str(&format!("Last updated: {}", today.format("%-d %b %Y")));

    Report::new(md)
}
