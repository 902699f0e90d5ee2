//! Implements DiaryPort against the Serializd diary JSON endpoint.

use super::get_text;
use crate::domain::{DiaryEntry, DigestError};
use crate::ports::DiaryPort;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

const SOURCE: &str = "serializd";

/// Diary document: `{"reviews": [...]}`. Other fields are ignored.
#[derive(Deserialize)]
struct DiaryDocument {
    reviews: Vec<DiaryEntry>,
}

pub struct SerializdDiary {
    client: Client,
}

impl SerializdDiary {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    fn parse_reviews(json: &str) -> Result<Vec<DiaryEntry>, DigestError> {
        let doc: DiaryDocument = serde_json::from_str(json)
            .map_err(|e| DigestError::parse(SOURCE, format!("invalid diary JSON: {}", e)))?;
        Ok(doc.reviews)
    }
}

impl Default for SerializdDiary {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl DiaryPort for SerializdDiary {
    async fn fetch_diary(&self, url: &str) -> Result<Vec<DiaryEntry>, DigestError> {
        let body = get_text(&self.client, url, SOURCE).await?;
        let reviews = Self::parse_reviews(&body)?;
        info!(count = reviews.len(), "fetched diary reviews");
        Ok(reviews)
    }
}
