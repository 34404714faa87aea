use std::{path::PathBuf, time::Duration};

use ign_dataset::source::{DEFAULT_TIMEOUT, IGN_DATASET_URL};
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("FETCH_TIMEOUT_SECS must be a whole number of seconds, got {0:?}")]
    InvalidTimeout(String),
    #[error("DATASET_URL is not a valid url {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Runtime settings, read from the environment at start up
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) port: u16,
    pub(crate) redis_url: Option<String>,
    pub(crate) dataset_url: String,
    pub(crate) data_dir: PathBuf,
    pub(crate) fetch_timeout: Duration,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => 8080,
        };
        let fetch_timeout = match lookup("FETCH_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(
                secs.parse()
                    .map_err(|_| ConfigError::InvalidTimeout(secs))?,
            ),
            None => DEFAULT_TIMEOUT,
        };
        let dataset_url = lookup("DATASET_URL").unwrap_or_else(|| IGN_DATASET_URL.to_string());
        url::Url::parse(&dataset_url)?;
        Ok(Self {
            port,
            redis_url: lookup("REDIS_URL").filter(|url| !url.is_empty()),
            dataset_url,
            data_dir: lookup("DATASET_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            fetch_timeout,
        })
    }
}
