use std::ops::Range;

use rand::thread_rng;
use rand_distr::{Distribution, Uniform};

use crate::asset::{AssetChange, AssetKey, ChangeOrigin, Portfolio};
use crate::source::{ChangeSource, SourceError};

pub const DEFAULT_INSTRUMENT: &str = "bitcoin";

/// Produces the change for a synthetic asset.
pub trait ChangeSampler {
    fn sample(&self, key: AssetKey, range: Range<f64>) -> f64;
}

/// Unseeded uniform draw over the asset's range.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformSampler;

impl ChangeSampler for UniformSampler {
    fn sample(&self, _key: AssetKey, range: Range<f64>) -> f64 {
        let dist = Uniform::new(range.start, range.end);
        dist.sample(&mut thread_rng())
    }
}

/// Returns preset values, ignoring the range. The live asset's entry is never read.
#[derive(Clone, Debug)]
pub struct FixedSampler {
    pub changes: Portfolio<f64>,
}

impl ChangeSampler for FixedSampler {
    fn sample(&self, key: AssetKey, _range: Range<f64>) -> f64 {
        *self.changes.get(key)
    }
}

pub struct Collector<S, R> {
    source: S,
    sampler: R,
    instrument: String,
}

impl<S: ChangeSource, R: ChangeSampler> Collector<S, R> {
    /// Fetches the live change and then samples the rest. A failed fetch fails the whole
    /// collection, there is no partial portfolio.
    pub async fn collect(&self) -> Result<Portfolio<AssetChange>, SourceError> {
        let live = self.source.change_24h(&self.instrument).await?;

        Ok(Portfolio::from_fn(|key| {
            let change = match key.origin() {
                ChangeOrigin::Live => live,
                ChangeOrigin::Synthetic(range) => self.sampler.sample(key, range),
            };
            AssetChange::new(key, change)
        }))
    }

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    pub fn new(source: S, sampler: R, instrument: impl Into<String>) -> Self {
        Self {
            source,
            sampler,
            instrument: instrument.into(),
        }
    }
}
