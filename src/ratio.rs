//! Turns 24h changes into allocation percentages.
//!
//! Each change is shifted by [BASELINE] and clamped at zero to give a score, the score is divided
//! by the summed scores of every asset and expressed as a percentage. Changes at or below
//! `-BASELINE` get no allocation. If every asset clamps to zero every ratio is zero.
use serde::{Deserialize, Serialize};

use crate::asset::{AssetChange, Portfolio};

pub const BASELINE: f64 = 10.0;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AllocationResult {
    pub name: String,
    pub change_24h: String,
    pub ratio: String,
}

pub fn score(change_24h: f64) -> f64 {
    f64::max(0.0, BASELINE + change_24h)
}

/// Unrounded percentage per asset.
pub fn ratios(changes: &Portfolio<AssetChange>) -> Portfolio<f64> {
    let scores = changes.map(|_, asset| score(asset.change_24h));
    let total_score: f64 = scores.iter().map(|(_, score)| score).sum();

    scores.map(|_, score| {
        if total_score > 0.0 {
            (score / total_score) * 100.0
        } else {
            0.0
        }
    })
}

/// Renders to two decimal places. Rounds the exact binary value of the float, ties to even.
pub fn two_decimals(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn calculate(changes: &Portfolio<AssetChange>) -> Portfolio<AllocationResult> {
    let ratios = ratios(changes);
    changes.map(|key, asset| AllocationResult {
        name: asset.name().to_string(),
        change_24h: two_decimals(asset.change_24h),
        ratio: two_decimals(*ratios.get(key)),
    })
}
