//! Application configuration. Source URLs, paths, digest tuning.

use crate::domain::{DigestError, DigestSettings};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

pub const DEFAULT_BACKLOGGD_BASE: &str = "https://backloggd.com";
pub const DEFAULT_SERIALIZD_SHOW_BASE: &str = "https://www.serializd.com/show";
pub const DEFAULT_STATIC_PATH: &str = "static.md";
pub const DEFAULT_OUTPUT_PATH: &str = "now.md";

/// Every location the digest reads from, resolved from [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUrls {
    pub movies_feed: String,
    pub books_feed: String,
    pub shows_diary: String,
    pub show_base: String,
    pub games_page: String,
    pub games_base: String,
    pub travel_log: String,
    /// Newest first; one travel subsection per entry.
    pub travel_years: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Letterboxd RSS feed URL. Read from NOW_DIGEST_LETTERBOXD_RSS.
    #[serde(default)]
    pub letterboxd_rss: Option<String>,

    /// Oku RSS feed URL. Read from NOW_DIGEST_OKU_RSS.
    #[serde(default)]
    pub oku_rss: Option<String>,

    /// Serializd diary JSON URL. Read from NOW_DIGEST_SERIALIZD_DIARY_URL.
    #[serde(default)]
    pub serializd_diary_url: Option<String>,

    #[serde(default)]
    pub serializd_show_base: Option<String>,

    #[serde(default)]
    pub backloggd_base: Option<String>,

    /// Backloggd profile name. Read from NOW_DIGEST_BACKLOGGD_USERNAME.
    #[serde(default)]
    pub backloggd_username: Option<String>,

    /// Travel log JSON URL. Read from NOW_DIGEST_TRAVEL_LOG_URL.
    #[serde(default)]
    pub travel_log_url: Option<String>,

    /// Comma-separated years, e.g. "2025,2024". Defaults to this year and last.
    #[serde(default)]
    pub travel_years: Option<String>,

    /// Comma-separated layover cities. Replaces the built-in list when set.
    #[serde(default)]
    pub excluded_cities: Option<String>,

    #[serde(default)]
    pub recent_limit: Option<usize>,

    #[serde(default)]
    pub static_path: Option<String>,

    #[serde(default)]
    pub output_path: Option<String>,
}

fn required<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str, DigestError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| DigestError::Config(format!("set NOW_DIGEST_{} (env or .env)", key)))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("NOW_DIGEST").try_parsing(true));
        if let Ok(path) = std::env::var("NOW_DIGEST_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    pub fn backloggd_base_or_default(&self) -> String {
        self.backloggd_base
            .clone()
            .unwrap_or_else(|| DEFAULT_BACKLOGGD_BASE.to_string())
            .trim_end_matches('/')
            .to_string()
    }

    pub fn serializd_show_base_or_default(&self) -> String {
        self.serializd_show_base
            .clone()
            .unwrap_or_else(|| DEFAULT_SERIALIZD_SHOW_BASE.to_string())
    }

    pub fn static_path_or_default(&self) -> String {
        self.static_path
            .clone()
            .unwrap_or_else(|| DEFAULT_STATIC_PATH.to_string())
    }

    pub fn output_path_or_default(&self) -> String {
        self.output_path
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string())
    }

    /// Configured years, or `today`'s year followed by the previous one.
    pub fn travel_years_or_default(&self, today: NaiveDate) -> Vec<String> {
        let years = self
            .travel_years
            .as_deref()
            .map(split_list)
            .unwrap_or_default();
        if !years.is_empty() {
            return years;
        }
        vec![today.year().to_string(), (today.year() - 1).to_string()]
    }

    /// Built-in digest settings with any configured overrides applied.
    pub fn digest_settings(&self) -> DigestSettings {
        let mut settings = DigestSettings::default();
        if let Some(limit) = self.recent_limit {
            settings.recent_limit = limit;
        }
        if let Some(cities) = self.excluded_cities.as_deref() {
            settings.excluded_cities = split_list(cities);
        }
        settings
    }

    /// Resolve every source location. Fails on the first missing required key.
    pub fn source_urls(&self, today: NaiveDate) -> Result<SourceUrls, DigestError> {
        let games_base = self.backloggd_base_or_default();
        let username = required(&self.backloggd_username, "BACKLOGGD_USERNAME")?;
        Ok(SourceUrls {
            movies_feed: required(&self.letterboxd_rss, "LETTERBOXD_RSS")?.to_string(),
            books_feed: required(&self.oku_rss, "OKU_RSS")?.to_string(),
            shows_diary: required(&self.serializd_diary_url, "SERIALIZD_DIARY_URL")?.to_string(),
            show_base: self.serializd_show_base_or_default(),
            games_page: format!("{}/u/{}/playing/", games_base, username),
            games_base,
            travel_log: required(&self.travel_log_url, "TRAVEL_LOG_URL")?.to_string(),
            travel_years: self.travel_years_or_default(today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> AppConfig {
        AppConfig {
            letterboxd_rss: Some("https://letterboxd.com/someone/rss/".to_string()),
            oku_rss: Some("https://oku.club/rss/collection/abc".to_string()),
            serializd_diary_url: Some(
                "https://www.serializd.com/api/user/someone/diary".to_string(),
            ),
            backloggd_username: Some("someone".to_string()),
            travel_log_url: Some("https://nomads.com/@someone.json".to_string()),
            ..AppConfig::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn test_source_urls_defaults() {
        let urls = full_config().source_urls(today()).unwrap();
        assert_eq!(urls.games_page, "https://backloggd.com/u/someone/playing/");
        assert_eq!(urls.games_base, "https://backloggd.com");
        assert_eq!(urls.show_base, DEFAULT_SERIALIZD_SHOW_BASE);
        assert_eq!(urls.travel_years, vec!["2025", "2024"]);
    }

    #[test]
    fn test_missing_required_key() {
        let cfg = AppConfig {
            oku_rss: None,
            ..full_config()
        };
        let err = cfg.source_urls(today()).unwrap_err();
        assert!(matches!(err, DigestError::Config(ref m) if m.contains("OKU_RSS")));
    }

    #[test]
    fn test_configured_years_and_overrides() {
        let cfg = AppConfig {
            travel_years: Some("2023, 2022,".to_string()),
            excluded_cities: Some("Reykjavik,Helsinki".to_string()),
            recent_limit: Some(5),
            ..full_config()
        };
        assert_eq!(cfg.travel_years_or_default(today()), vec!["2023", "2022"]);
        let settings = cfg.digest_settings();
        assert_eq!(settings.recent_limit, 5);
        assert_eq!(settings.excluded_cities, vec!["Reykjavik", "Helsinki"]);
    }
}
