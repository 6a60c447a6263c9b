use anyhow::{Context, Result};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ScrapeError;
use crate::services::{write_moneylines, MoneylineExtractor, PageFetcher};

/// How a run ended. Both variants are reported on stdout; neither is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Saved { path: PathBuf, records: usize },
    Failed { status: u16 },
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Saved { path, .. } => write!(f, "Data saved to {}", path.display()),
            RunOutcome::Failed { status } => write!(
                f,
                "Failed to retrieve the webpage. Status code: {}",
                status
            ),
        }
    }
}

/// Fetch the odds page, extract moneylines and write them out.
/// A non-200 response ends the run without touching the output file.
pub async fn scrape(config: &Config) -> Result<RunOutcome> {
    let extractor = MoneylineExtractor::new()?;
    let page = PageFetcher::new().fetch(&config.url).await?;

    let html = match page.into_body() {
        Ok(html) => html,
        Err(ScrapeError::UnexpectedStatus(status)) => {
            tracing::warn!("{} answered with HTTP {}", config.url, status);
            return Ok(RunOutcome::Failed { status });
        }
        Err(e) => return Err(e.into()),
    };

    export(&extractor, &html, &config.output)
}

/// Run extraction and export over an HTML page saved on disk.
pub fn parse_file(input: &Path, output: &Path) -> Result<RunOutcome> {
    let extractor = MoneylineExtractor::new()?;
    let html = std::fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;

    export(&extractor, &html, output)
}

fn export(extractor: &MoneylineExtractor, html: &str, output: &Path) -> Result<RunOutcome> {
    let records = extractor.extract(html);
    if records.is_empty() {
        tracing::warn!("No moneylines found on the page; writing header only");
    }

    write_moneylines(output, &records)?;

    Ok(RunOutcome::Saved {
        path: output.to_path_buf(),
        records: records.len(),
    })
}
