use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;
use tickerboard_core::StaticCredentials;

const DEFAULT_ADDR: &str = "0.0.0.0:8070";
const DEFAULT_CATALOG: &str = "data/tickers.csv";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid listen address '{value}'")]
    BadAddr { value: String },

    #[error("TICKERBOARD_USERS must be set to comma-separated user:pass pairs")]
    MissingUsers,

    #[error("malformed credential pair '{value}', expected user:pass")]
    BadCredential { value: String },
}

/// Server configuration read from the environment at startup.
#[derive(Debug)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub catalog_path: PathBuf,
    pub credentials: StaticCredentials,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = std::env::var("TICKERBOARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_owned());
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| ConfigError::BadAddr { value: addr })?;

        let catalog_path = std::env::var("TICKERBOARD_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CATALOG));

        let users = std::env::var("TICKERBOARD_USERS").map_err(|_| ConfigError::MissingUsers)?;
        let credentials = parse_credentials(&users)?;

        Ok(Self {
            addr,
            catalog_path,
            credentials,
        })
    }
}

/// Parse `user:pass,user:pass` into a static credential list.
fn parse_credentials(input: &str) -> Result<StaticCredentials, ConfigError> {
    let mut pairs = Vec::new();
    for entry in input.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (user, pass) = entry
            .split_once(':')
            .ok_or_else(|| ConfigError::BadCredential {
                value: entry.to_owned(),
            })?;
        if user.is_empty() {
            return Err(ConfigError::BadCredential {
                value: entry.to_owned(),
            });
        }
        pairs.push((user.to_owned(), pass.to_owned()));
    }

    if pairs.is_empty() {
        return Err(ConfigError::MissingUsers);
    }
    Ok(StaticCredentials::new(pairs))
}
