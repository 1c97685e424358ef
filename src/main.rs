use anyhow::{Context, Result};
use reqwest::Client;
use reviewscraper::{config::ReviewsConfig, fetch, ingest};
use std::{env, path::Path};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) load config ──────────────────────────────────────────────
    let config_path = env::args().nth(1).unwrap_or_else(|| "reviews.yaml".to_string());
    let config = if Path::new(&config_path).exists() {
        ReviewsConfig::load(&config_path)?
    } else {
        info!("no config file at {}; using defaults", config_path);
        ReviewsConfig::default()
    };
    let url = config
        .source_url
        .clone()
        .or_else(|| env::var("REVIEWS_URL").ok())
        .context("no sheet URL: set source_url in the config file or REVIEWS_URL")?;

    // ─── 3) fetch the published sheet ────────────────────────────────
    let client = Client::new();
    let text = fetch::fetch_csv_text(&client, &url).await?;
    info!(bytes = text.len(), "fetched sheet");

    // ─── 4) ingest + emit JSON ───────────────────────────────────────
    match ingest::ingest(&text, &config) {
        Ok(records) if records.is_empty() => {
            info!("no reviews marked publishable");
            println!("[]");
        }
        Ok(records) => {
            info!(count = records.len(), "publishable reviews");
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        Err(err) => {
            error!("ingest failed: {}", err);
            return Err(err.into());
        }
    }

    Ok(())
}
