use anyhow::{Context, Result};
use reqwest::Client;

use crate::models::FetchedPage;

/// Issues the single GET against the odds page.
///
/// The client is built without a request timeout; a stalled server is waited on.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Fetch `url` and return its status and body. Non-200 statuses are not
    /// an error here; only a failed connection or body read is.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        tracing::info!("GET {}", url);

        let resp = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("requesting {}", url))?;

        let status = resp.status().as_u16();
        let body = resp
            .text()
            .await
            .with_context(|| format!("reading response body from {}", url))?;

        tracing::debug!("HTTP {} with {} bytes", status, body.len());

        Ok(FetchedPage { status, body })
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
