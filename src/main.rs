//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into the digest service.
//! No business logic here; normalization lives in the domain, orchestration in DigestService.

use dotenv::dotenv;
use now_digest::adapters::flags::RegionalIndicatorFlags;
use now_digest::adapters::persistence::FsReportStore;
use now_digest::adapters::sources::{
    BackloggdScraper, FeedAdapter, NomadTravelLog, SerializdDiary,
};
use now_digest::shared::config::AppConfig;
use now_digest::usecases::{DigestPorts, DigestService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load()?;
    let today = chrono::Local::now().date_naive();
    let urls = cfg.source_urls(today)?;
    let settings = cfg.digest_settings();
    info!(
        years = ?urls.travel_years,
        recent_limit = settings.recent_limit,
        "configuration loaded"
    );

    let ports = DigestPorts {
        feeds: Arc::new(FeedAdapter::new()),
        diary: Arc::new(SerializdDiary::new()),
        scraper: Arc::new(BackloggdScraper::new()),
        travel: Arc::new(NomadTravelLog::new()),
        flags: Arc::new(RegionalIndicatorFlags),
        store: Arc::new(FsReportStore::new(
            cfg.static_path_or_default(),
            cfg.output_path_or_default(),
        )),
    };

    DigestService::new(ports, urls, settings)
        .run(today)
        .await
        .map_err(|e| anyhow::anyhow!("digest run failed: {}", e))?;

    Ok(())
}
