//! kalender CLI
//!
//! Prints the events of one day from kleiner-kalender.de.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, ValueEnum};
use kalender::{Config, EventClient, error::Result};

/// kalender - Daily event fetcher
#[derive(Parser, Debug)]
#[command(name = "kalender", version, about = "Fetch the events of a calendar day")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the calendar site base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Day to fetch (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    Text,
    Json,
}

const TEXT_TEMPLATE: &str = "Title: {title}\nUrl: {url}\nContent: {content}\n";

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    };
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    config.validate()?;
    log::debug!("Using base URL {}", config.base_url);

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let client = EventClient::new(config)?;
    let events = client.events_by_date(&date).await?;

    match cli.format {
        Format::Text => {
            for event in &events {
                println!("{}", event.format(TEXT_TEMPLATE));
            }
        }
        Format::Json => println!("{}", serde_json::to_string_pretty(&events)?),
    }

    Ok(())
}
