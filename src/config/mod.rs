use chrono::{Local, NaiveDate};
use std::env;
use std::path::PathBuf;

use crate::utils::dated_output_path;

pub const DEFAULT_ODDS_URL: &str = "https://sportsbook.draftkings.com/leagues/football/nfl";

pub const URL_ENV: &str = "DK_ODDS_URL";
pub const OUTPUT_ENV: &str = "DK_OUTPUT_PATH";

/// Where to scrape from and where the CSV goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub url: String,
    pub output: PathBuf,
}

impl Config {
    /// Resolve from CLI flags, then the process environment, then defaults.
    pub fn resolve(url: Option<String>, output: Option<PathBuf>) -> Self {
        Self::from_sources(
            url,
            output,
            |key| env::var(key).ok(),
            Local::now().date_naive(),
        )
    }

    pub fn from_sources(
        url: Option<String>,
        output: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
        today: NaiveDate,
    ) -> Self {
        let url = url
            .or_else(|| lookup(URL_ENV))
            .unwrap_or_else(|| DEFAULT_ODDS_URL.to_string());

        Self {
            url,
            output: resolve_output(output, &lookup, today),
        }
    }
}

/// Output path alone, for modes that never touch the network.
pub fn output_from_env(output: Option<PathBuf>) -> PathBuf {
    resolve_output(output, |key| env::var(key).ok(), Local::now().date_naive())
}

fn resolve_output(
    output: Option<PathBuf>,
    lookup: impl Fn(&str) -> Option<String>,
    today: NaiveDate,
) -> PathBuf {
    output
        .or_else(|| lookup(OUTPUT_ENV).map(PathBuf::from))
        .unwrap_or_else(|| dated_output_path(today))
}
