//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by application into infrastructure (sources, flags, filesystem)

pub mod outbound;

pub use outbound::{DiaryPort, FeedPort, FlagLookup, ReportStore, ScrapePort, TravelLogPort};
