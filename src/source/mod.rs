//! Sources supply the live 24h change for an instrument. The collector only sees the
//! [ChangeSource] trait so tests can swap the network client for [TestSource].
use std::future::{self, Future};

use derive_more::{Display, Error};

pub mod coingecko;

#[derive(Debug, Display, Error)]
pub enum SourceError {
    #[display("request to market data source failed: {_0}")]
    Request(#[error(source)] reqwest::Error),
    #[display("market data source returned status {_0}")]
    Status(#[error(not(source))] reqwest::StatusCode),
    #[display("market data payload could not be decoded: {_0}")]
    Payload(#[error(source)] reqwest::Error),
    #[display("market data payload has no 24h change for {_0}")]
    MissingChange(#[error(not(source))] String),
}

pub trait ChangeSource {
    /// Percentage price change over the trailing 24 hours for `instrument`.
    fn change_24h(&self, instrument: &str) -> impl Future<Output = Result<f64, SourceError>>;
}

/// Answers every request with the same canned result.
pub struct TestSource {
    change: Option<f64>,
}

impl TestSource {
    pub fn change(change: f64) -> Self {
        Self {
            change: Some(change),
        }
    }

    /// Fails every request as if the payload carried no change value.
    pub fn failing() -> Self {
        Self { change: None }
    }
}

impl ChangeSource for TestSource {
    fn change_24h(&self, instrument: &str) -> impl Future<Output = Result<f64, SourceError>> {
        match self.change {
            Some(change) => future::ready(Ok(change)),
            None => future::ready(Err(SourceError::MissingChange(instrument.to_string()))),
        }
    }
}
