//! Implements FeedPort over syndication feeds (Letterboxd, Oku).
//!
//! RSS 2.0 and Atom are both accepted; each entry keeps its title and first link.

use super::get_text;
use crate::domain::{DigestError, FeedItem};
use crate::ports::FeedPort;
use reqwest::Client;
use tracing::info;

const SOURCE: &str = "feed";

/// Feed client. One instance serves every feed URL.
pub struct FeedAdapter {
    client: Client,
}

impl FeedAdapter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Parse a feed document into items, keeping document order.
    fn parse_items(xml: &str) -> Result<Vec<FeedItem>, DigestError> {
        let feed = feed_rs::parser::parse(xml.as_bytes())
            .map_err(|e| DigestError::parse(SOURCE, format!("invalid feed: {}", e)))?;
        Ok(feed
            .entries
            .into_iter()
            .map(|entry| FeedItem {
                title: entry.title.map(|t| t.content).unwrap_or_default(),
                link: entry
                    .links
                    .into_iter()
                    .next()
                    .map(|l| l.href)
                    .unwrap_or_default(),
            })
            .collect())
    }
}

impl Default for FeedAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl FeedPort for FeedAdapter {
    async fn fetch_feed(&self, url: &str) -> Result<Vec<FeedItem>, DigestError> {
        let body = get_text(&self.client, url, SOURCE).await?;
        let items = Self::parse_items(&body)?;
        info!(url, count = items.len(), "fetched feed");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FEED: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<rss version="2.0">
  <channel>
    <title>Letterboxd - someone</title>
    <link>https://letterboxd.com/someone/</link>
    <description>Letterboxd - someone</description>
    <item>
      <title>Heat, 1995 - ★★★★★</title>
      <link>https://letterboxd.com/someone/film/heat/</link>
    </item>
    <item>
      <title>Alien, 1979</title>
      <link>https://letterboxd.com/someone/film/alien/</link>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Currently reading</title>
  <id>urn:oku:collection:abc</id>
  <updated>2025-02-20T10:00:00Z</updated>
  <entry>
    <title>Piranesi</title>
    <id>urn:oku:book:piranesi</id>
    <updated>2025-02-20T10:00:00Z</updated>
    <link href="https://oku.club/book/piranesi"/>
  </entry>
  <entry>
    <title>Middlemarch</title>
    <id>urn:oku:book:middlemarch</id>
    <updated>2025-02-18T10:00:00Z</updated>
    <link rel="alternate" href="https://oku.club/book/middlemarch"/>
    <link rel="related" href="https://oku.club/author/eliot"/>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_items_keeps_order() {
        let items = FeedAdapter::parse_items(FEED).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Heat, 1995 - ★★★★★");
        assert_eq!(items[1].link, "https://letterboxd.com/someone/film/alien/");
    }

    #[test]
    fn test_parse_atom_entries() {
        let items = FeedAdapter::parse_items(ATOM).unwrap();
        assert_eq!(
            items,
            vec![
                FeedItem {
                    title: "Piranesi".to_string(),
                    link: "https://oku.club/book/piranesi".to_string(),
                },
                FeedItem {
                    title: "Middlemarch".to_string(),
                    link: "https://oku.club/book/middlemarch".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_items_rejects_garbage() {
        let err = FeedAdapter::parse_items("<html>nope").unwrap_err();
        assert!(matches!(err, DigestError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_fetch_feed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/someone/rss/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FEED))
            .mount(&server)
            .await;

        let adapter = FeedAdapter::new();
        let items = adapter
            .fetch_feed(&format!("{}/someone/rss/", server.uri()))
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_atom_feed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rss/collection/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_string(ATOM))
            .mount(&server)
            .await;

        let items = FeedAdapter::new()
            .fetch_feed(&format!("{}/rss/collection/abc", server.uri()))
            .await
            .unwrap();
        assert_eq!(items[0].title, "Piranesi");
    }

    #[tokio::test]
    async fn test_fetch_feed_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = FeedAdapter::new()
            .fetch_feed(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, DigestError::Fetch { .. }));
    }
}
