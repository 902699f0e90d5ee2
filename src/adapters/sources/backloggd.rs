//! Implements ScrapePort by scraping a Backloggd shelf page.
//!
//! Each game card is a `div.rating-hover` holding the title in
//! `div.game-text-centered` and a site-relative link in its first `a`.

use super::get_text;
use crate::domain::{DigestError, ScrapedLink};
use crate::ports::ScrapePort;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

const SOURCE: &str = "backloggd";

const CARD_SELECTOR: &str = "div.rating-hover";
const TITLE_SELECTOR: &str = "div.game-text-centered";
const LINK_SELECTOR: &str = "a";

pub struct BackloggdScraper {
    client: Client,
}

fn selector(css: &'static str) -> Result<Selector, DigestError> {
    Selector::parse(css)
        .map_err(|e| DigestError::parse(SOURCE, format!("bad selector {}: {}", css, e)))
}

fn child_text(card: &ElementRef<'_>, sel: &Selector) -> String {
    card.select(sel)
        .flat_map(|el| el.text())
        .collect::<String>()
        .trim()
        .to_string()
}

impl BackloggdScraper {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Extract game cards in page order. Cards without a link are skipped.
    fn parse_games(html: &str) -> Result<Vec<ScrapedLink>, DigestError> {
        let card_sel = selector(CARD_SELECTOR)?;
        let title_sel = selector(TITLE_SELECTOR)?;
        let link_sel = selector(LINK_SELECTOR)?;

        let doc = Html::parse_document(html);
        let mut games = Vec::new();
        for card in doc.select(&card_sel) {
            let title = child_text(&card, &title_sel);
            let href = card
                .select(&link_sel)
                .next()
                .and_then(|a| a.value().attr("href"));
            match href {
                Some(href) => games.push(ScrapedLink {
                    title,
                    href: href.to_string(),
                }),
                None => debug!(title = %title, "game card without link, skipping"),
            }
        }
        Ok(games)
    }
}

impl Default for BackloggdScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ScrapePort for BackloggdScraper {
    async fn scrape_games(&self, url: &str) -> Result<Vec<ScrapedLink>, DigestError> {
        let body = get_text(&self.client, url, SOURCE).await?;
        let games = Self::parse_games(&body)?;
        if games.is_empty() {
            return Err(DigestError::EmptyResult {
                source_name: SOURCE,
            });
        }
        info!(url, count = games.len(), "scraped games");
        Ok(games)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SHELF: &str = r#"<html><body>
      <div class="row">
        <div class="rating-hover">
          <a href="/games/hades-ii/"><img src="cover.jpg"></a>
          <div class="game-text-centered"> Hades II </div>
        </div>
        <div class="rating-hover">
          <a href="/games/balatro/"><img src="cover.jpg"></a>
          <div class="game-text-centered">Balatro</div>
        </div>
        <div class="rating-hover">
          <div class="game-text-centered">Orphan card</div>
        </div>
      </div>
    </body></html>"#;

    #[test]
    fn test_parse_games() {
        let games = BackloggdScraper::parse_games(SHELF).unwrap();
        assert_eq!(
            games,
            vec![
                ScrapedLink {
                    title: "Hades II".to_string(),
                    href: "/games/hades-ii/".to_string(),
                },
                ScrapedLink {
                    title: "Balatro".to_string(),
                    href: "/games/balatro/".to_string(),
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_shelf_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/u/someone/playing/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body></body></html>"))
            .mount(&server)
            .await;

        let err = BackloggdScraper::new()
            .scrape_games(&format!("{}/u/someone/playing/", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, DigestError::EmptyResult { source_name: "backloggd" }));
    }

    #[tokio::test]
    async fn test_scrape_games() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/u/someone/playing/"))
            .respond_with(ResponseTemplate::new(200).set_body_string(SHELF))
            .mount(&server)
            .await;

        let games = BackloggdScraper::new()
            .scrape_games(&format!("{}/u/someone/playing/", server.uri()))
            .await
            .unwrap();
        assert_eq!(games.len(), 2);
    }
}
