use std::fs::File;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use epltab::WebScraper;
use epltab::config::Config;
use epltab::export;
use epltab::store::Store;

#[derive(Parser)]
#[command(name = "epltab")]
#[command(about = "A BBC Premier League standings table scraper", long_about = None)]
struct Cli {
    #[arg(
        short = 'l',
        long = "log-level",
        value_enum,
        default_value = "info",
        help = "Set the logging level"
    )]
    log_level: LogLevel,

    #[arg(
        short = 'o',
        long = "output",
        default_value = "football_table.csv",
        help = "Path of the CSV file to write"
    )]
    output: PathBuf,
}

#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level.clone().into())
        .init();

    let config = Config::from_env().unwrap_or_else(|e| {
        log::error!("Configuration error: {e}");
        process::exit(1);
    });

    let scraper = WebScraper::new(config.scraper_api_key.clone()).unwrap_or_else(|e| {
        log::error!("Error creating scraper: {e}");
        process::exit(1);
    });

    let standings = scraper.fetch_standings().await.unwrap_or_else(|e| {
        log::error!("Error collecting standings: {e}");
        process::exit(1);
    });

    log::info!("Writing CSV to {}...", cli.output.display());
    let file = File::create(&cli.output).unwrap_or_else(|e| {
        log::error!("Cannot create {}: {e}", cli.output.display());
        process::exit(1);
    });
    // write_csv consumes the file, so the handle is flushed and closed
    // before the database phase starts.
    export::write_csv(file, &standings).unwrap_or_else(|e| {
        log::error!("Error writing CSV: {e}");
        process::exit(1);
    });
    log::info!("CSV write complete.");

    log::info!("Loading rows into the database...");
    let mut store = Store::connect(&config.database).await.unwrap_or_else(|e| {
        log::error!("Error connecting to database: {e}");
        process::exit(1);
    });
    store.replace_all(&standings).await.unwrap_or_else(|e| {
        log::error!("Error loading database: {e}");
        process::exit(1);
    });
    store
        .close()
        .await
        .unwrap_or_else(|e| log::warn!("Error closing database connection: {e}"));
    log::info!("Database load complete.");

    log::info!(
        "Scrape finished, check {} for results",
        cli.output.display()
    );
}
