use serde::{Deserialize, Serialize};

use super::{ChangeSource, SourceError};

pub const DEFAULT_PATH: &str = "https://api.coingecko.com/api/v3";

/// One row of the `/coins/markets` response. Only the field we read is modelled, the rest of the
/// row is ignored.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CoinMarket {
    pub id: String,
    pub price_change_percentage_24h: Option<f64>,
}

/// Pulls the change out of the first row. An empty array or a null change is a failure.
pub fn first_change(instrument: &str, markets: &[CoinMarket]) -> Result<f64, SourceError> {
    markets
        .first()
        .and_then(|market| market.price_change_percentage_24h)
        .ok_or_else(|| SourceError::MissingChange(instrument.to_string()))
}

#[derive(Debug)]
pub struct CoinGecko {
    pub path: String,
    pub client: reqwest::Client,
}

impl ChangeSource for CoinGecko {
    async fn change_24h(&self, instrument: &str) -> Result<f64, SourceError> {
        let resp = self
            .client
            .get(self.path.clone() + "/coins/markets")
            .query(&[
                ("vs_currency", "usd"),
                ("ids", instrument),
                ("price_change_percentage", "24h"),
            ])
            .send()
            .await
            .map_err(SourceError::Request)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status));
        }

        let markets = resp
            .json::<Vec<CoinMarket>>()
            .await
            .map_err(SourceError::Payload)?;
        first_change(instrument, &markets)
    }
}

impl CoinGecko {
    pub fn new(path: String) -> Self {
        Self {
            path: path.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

impl Default for CoinGecko {
    fn default() -> Self {
        Self::new(DEFAULT_PATH.to_string())
    }
}
