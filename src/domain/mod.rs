//! Core domain layer. No external I/O dependencies.
//!
//! Entities and the normalization pipeline live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod markdown;
pub mod media;
pub mod seasons;
pub mod selection;
pub mod settings;
pub mod titles;
pub mod travel;

pub use entities::{
    CountryVisit, DiaryEntry, FeedItem, MediaCategory, MediaItem, Report, ScrapedLink, ShowSeason,
    TravelEntry,
};
pub use errors::DigestError;
pub use settings::{DigestSettings, Placeholders};
