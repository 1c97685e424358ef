// src/fetch/mod.rs
use anyhow::Result;
use reqwest::Client;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;
use url::Url;

const MAX_RETRIES: usize = 3;
const RETRY_DELAY: Duration = Duration::from_secs(1);

/// Download the published CSV export at `url_str` and return its text.
/// Transient request failures are retried up to [`MAX_RETRIES`] times;
/// a non-success status fails immediately. The text is handed to the
/// ingestion core untouched (the tokenizer deals with any BOM).
pub async fn fetch_csv_text(client: &Client, url_str: &str) -> Result<String> {
    let url = Url::parse(url_str)?;
    let mut attempt = 0;

    loop {
        attempt += 1;
        match client.get(url.as_str()).send().await {
            Ok(resp) if resp.status().is_success() => match resp.text().await {
                Ok(text) => return Ok(text),
                Err(_) if attempt < MAX_RETRIES => {
                    warn!(attempt, url = %url, "reading body failed; retrying");
                    sleep(RETRY_DELAY).await;
                }
                Err(e) => return Err(e.into()),
            },
            Ok(resp) => return Err(anyhow::anyhow!("HTTP error: {}", resp.status())),
            Err(_) if attempt < MAX_RETRIES => {
                warn!(attempt, url = %url, "request failed; retrying");
                sleep(RETRY_DELAY).await;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_unparseable_url() {
        let client = Client::new();
        let result = fetch_csv_text(&client, "not a url").await;
        assert!(result.is_err());
    }
}
