use std::env;

use anyhow::{Context, Result};

use crate::collector::DEFAULT_INSTRUMENT;
use crate::source::coingecko::DEFAULT_PATH;

pub const ADDRESS_VAR: &str = "PORTFOLIO_ADDRESS";
pub const PORT_VAR: &str = "PORTFOLIO_PORT";
pub const UPSTREAM_VAR: &str = "PORTFOLIO_UPSTREAM_URL";
pub const INSTRUMENT_VAR: &str = "PORTFOLIO_INSTRUMENT";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub address: String,
    pub port: u16,
    pub upstream_url: String,
    pub instrument: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Unset variables fall back to defaults. Only the port can fail to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let port = match lookup(PORT_VAR) {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("{PORT_VAR} must be a port number, got {port:?}"))?,
            None => 3000,
        };

        Ok(Self {
            address: lookup(ADDRESS_VAR).unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            upstream_url: lookup(UPSTREAM_VAR).unwrap_or_else(|| DEFAULT_PATH.to_string()),
            instrument: lookup(INSTRUMENT_VAR).unwrap_or_else(|| DEFAULT_INSTRUMENT.to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 3000,
            upstream_url: DEFAULT_PATH.to_string(),
            instrument: DEFAULT_INSTRUMENT.to_string(),
        }
    }
}
