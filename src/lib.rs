pub mod config;
pub mod export;
mod parser;
pub mod scraper;
pub mod store;
pub mod types;

pub use scraper::WebScraper;

pub(crate) const TARGET_URL: &str = "https://www.bbc.com/sport/football/premier-league/table";
