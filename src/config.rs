use std::env;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

/// Everything the run needs from the environment, resolved once at startup.
///
/// A missing variable fails here, before any network or database activity.
#[derive(Debug, Clone)]
pub struct Config {
    pub scraper_api_key: String,
    pub database: DbConfig,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Don't throw an error if a .env file doesn't exist.
        let _ = dotenv::dotenv();
        Ok(Self {
            scraper_api_key: require("SCRAPER_API_KEY")?,
            database: DbConfig {
                name: require("FOOTBALL_DBNAME")?,
                user: require("FOOTBALL_USER")?,
                password: require("FOOTBALL_PASS")?,
                host: require("FOOTBALL_HOST")?,
            },
        })
    }
}

impl DbConfig {
    /// Splits an optional `:port` suffix off the configured host.
    /// Defaults to MySQL's 3306 when absent or unparseable.
    pub fn host_and_port(&self) -> (&str, u16) {
        match self.host.rsplit_once(':') {
            Some((host, port)) => match port.parse::<u16>() {
                Ok(port) => (host, port),
                Err(_) => (self.host.as_str(), 3306),
            },
            None => (self.host.as_str(), 3306),
        }
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
