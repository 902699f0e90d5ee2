//! Implements TravelLogPort against a Nomad List style profile JSON.
//!
//! Expected shape: `{"trips": [{"place", "country", "country_code", "date_start",
//! "date_end", "transit"?}]}`, newest trip first.

use super::get_text;
use crate::domain::{DigestError, TravelEntry};
use crate::ports::TravelLogPort;
use chrono::{Datelike, NaiveDate};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

const SOURCE: &str = "travel log";

#[derive(Deserialize)]
struct TravelDocument {
    trips: Vec<Trip>,
}

#[derive(Deserialize)]
struct Trip {
    place: String,
    country: String,
    country_code: String,
    date_start: NaiveDate,
    date_end: NaiveDate,
    #[serde(default)]
    transit: bool,
}

impl From<Trip> for TravelEntry {
    fn from(t: Trip) -> Self {
        TravelEntry {
            city: t.place,
            country_name: t.country,
            country_code: t.country_code.to_uppercase(),
            year: t.date_start.year().to_string(),
            start_date: t.date_start,
            end_date: t.date_end,
            is_transit: t.transit,
        }
    }
}

pub struct NomadTravelLog {
    client: Client,
}

impl NomadTravelLog {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    fn parse_trips(json: &str) -> Result<Vec<TravelEntry>, DigestError> {
        let doc: TravelDocument = serde_json::from_str(json)
            .map_err(|e| DigestError::parse(SOURCE, format!("invalid travel JSON: {}", e)))?;
        Ok(doc.trips.into_iter().map(TravelEntry::from).collect())
    }
}

impl Default for NomadTravelLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl TravelLogPort for NomadTravelLog {
    async fn fetch_trips(&self, url: &str) -> Result<Vec<TravelEntry>, DigestError> {
        let body = get_text(&self.client, url, SOURCE).await?;
        let trips = Self::parse_trips(&body)?;
        info!(count = trips.len(), "fetched travel log");
        Ok(trips)
    }
}
