//! Serves a toy allocation across five assets: one live 24h change from CoinGecko, four sampled
//! at random, each weighted by a baseline-shifted score and normalised to percentages.
pub mod asset;
pub mod collector;
pub mod config;
pub mod http;
pub mod ratio;
pub mod source;
