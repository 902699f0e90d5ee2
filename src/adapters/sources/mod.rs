//! HTTP source adapters. One per external service.

pub mod backloggd;
pub mod feed;
pub mod nomad;
pub mod serializd;

pub use backloggd::BackloggdScraper;
pub use feed::FeedAdapter;
pub use nomad::NomadTravelLog;
pub use serializd::SerializdDiary;

use crate::domain::DigestError;
use reqwest::Client;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("now-digest/", env!("CARGO_PKG_VERSION"));

/// GET `url` and read the body as text. Transport errors and non-2xx statuses
/// become `DigestError::Fetch`.
pub(crate) async fn get_text(
    client: &Client,
    url: &str,
    source_name: &'static str,
) -> Result<String, DigestError> {
    debug!(source = source_name, url, "fetching");
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, USER_AGENT)
        .send()
        .await
        .map_err(|e| DigestError::fetch(source_name, format!("HTTP request failed: {}", e)))?;

    if !response.status().is_success() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        warn!(source = source_name, status = %status, "source returned error");
        return Err(DigestError::fetch(
            source_name,
            format!(
                "unexpected status {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            ),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| DigestError::fetch(source_name, format!("Failed to read body: {}", e)))
}
