use anyhow::{Context, Result};
use reviewscraper::{config::ReviewsConfig, ingest};
use std::{env, fs, process::exit};

/// Ingest a locally saved sheet export and print the publishable reviews
/// as JSON. Handy for checking what a sheet will publish before wiring it
/// up to the site.
fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <REVIEWS_CSV> [CONFIG_YAML]", args[0]);
        exit(1);
    }

    let config = match args.get(2) {
        Some(path) => ReviewsConfig::load(path)?,
        None => ReviewsConfig::default(),
    };

    let text = fs::read_to_string(&args[1]).with_context(|| format!("reading {}", args[1]))?;
    let records = ingest::ingest(&text, &config)?;
    println!("{}", serde_json::to_string_pretty(&records)?);

    Ok(())
}
