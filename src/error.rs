use thiserror::Error;

/// Failures the scrape pipeline names explicitly.
///
/// Everything else (network, I/O, CSV) travels as `anyhow::Error`.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("unexpected HTTP status: {0}")]
    UnexpectedStatus(u16),

    #[error("invalid selector: {0}")]
    Selector(String),
}
