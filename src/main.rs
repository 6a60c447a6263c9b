mod cli;
mod config;
mod error;
mod models;
mod services;
mod utils;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "dk-moneylines")]
#[command(about = "Scrape DraftKings moneyline odds into a CSV file")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the odds page and export its moneylines
    Scrape {
        #[arg(short, long)]
        url: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract moneylines from a saved HTML page
    Parse {
        #[arg(short, long)]
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the run outcome
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::Scrape { url, output }) => {
            let config = Config::resolve(url, output);
            tracing::info!("Scraping {} into {}", config.url, config.output.display());
            cli::scrape(&config).await?
        }
        Some(Commands::Parse { input, output }) => {
            let output = config::output_from_env(output);
            tracing::info!("Parsing {} into {}", input.display(), output.display());
            cli::parse_file(&input, &output)?
        }
        None => {
            // Default to scraping with env/default settings
            let config = Config::resolve(None, None);
            tracing::info!("Scraping {} into {}", config.url, config.output.display());
            cli::scrape(&config).await?
        }
    };

    if let cli::RunOutcome::Saved { records, .. } = &outcome {
        tracing::info!("Exported {} moneylines", records);
    }
    println!("{}", outcome);
    Ok(())
}
