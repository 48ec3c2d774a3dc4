use std::ops::Range;

use serde::{Deserialize, Serialize};

/// The five tracked assets. The set is closed: every computation covers all of them, in this
/// order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKey {
    Bitcoin,
    Gold,
    Silver,
    KoreaStock,
    GlobalStock,
}

/// Where the 24h change for an asset comes from.
#[derive(Clone, Debug, PartialEq)]
pub enum ChangeOrigin {
    Live,
    /// Uniform over the half-open range.
    Synthetic(Range<f64>),
}

impl AssetKey {
    pub const ALL: [AssetKey; 5] = [
        AssetKey::Bitcoin,
        AssetKey::Gold,
        AssetKey::Silver,
        AssetKey::KoreaStock,
        AssetKey::GlobalStock,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AssetKey::Bitcoin => "비트코인",
            AssetKey::Gold => "금",
            AssetKey::Silver => "은",
            AssetKey::KoreaStock => "국내주식 (KOSPI)",
            AssetKey::GlobalStock => "해외주식 (S&P 500)",
        }
    }

    pub fn origin(&self) -> ChangeOrigin {
        match self {
            AssetKey::Bitcoin => ChangeOrigin::Live,
            AssetKey::Gold => ChangeOrigin::Synthetic(-2.0..2.0),
            AssetKey::Silver => ChangeOrigin::Synthetic(-3.0..3.0),
            AssetKey::KoreaStock => ChangeOrigin::Synthetic(-1.5..1.5),
            AssetKey::GlobalStock => ChangeOrigin::Synthetic(-1.5..1.5),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssetChange {
    pub key: AssetKey,
    pub change_24h: f64,
}

impl AssetChange {
    pub fn new(key: AssetKey, change_24h: f64) -> Self {
        Self { key, change_24h }
    }

    pub fn name(&self) -> &'static str {
        self.key.name()
    }
}

/// Holds exactly one value per [AssetKey]. Serializes as a JSON object keyed by the snake_case
/// asset names, in [AssetKey::ALL] order.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Portfolio<T> {
    pub bitcoin: T,
    pub gold: T,
    pub silver: T,
    pub korea_stock: T,
    pub global_stock: T,
}

impl<T> Portfolio<T> {
    pub fn from_fn(mut f: impl FnMut(AssetKey) -> T) -> Self {
        Self {
            bitcoin: f(AssetKey::Bitcoin),
            gold: f(AssetKey::Gold),
            silver: f(AssetKey::Silver),
            korea_stock: f(AssetKey::KoreaStock),
            global_stock: f(AssetKey::GlobalStock),
        }
    }

    pub fn get(&self, key: AssetKey) -> &T {
        match key {
            AssetKey::Bitcoin => &self.bitcoin,
            AssetKey::Gold => &self.gold,
            AssetKey::Silver => &self.silver,
            AssetKey::KoreaStock => &self.korea_stock,
            AssetKey::GlobalStock => &self.global_stock,
        }
    }

    pub fn map<U>(&self, mut f: impl FnMut(AssetKey, &T) -> U) -> Portfolio<U> {
        Portfolio::from_fn(|key| f(key, self.get(key)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssetKey, &T)> + '_ {
        AssetKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

impl Portfolio<AssetChange> {
    /// Builds changes from raw values, mostly useful for fixtures.
    pub fn from_changes(changes: Portfolio<f64>) -> Self {
        changes.map(|key, change| AssetChange::new(key, *change))
    }
}

#[cfg(test)]
mod tests {
    use super::{AssetKey, ChangeOrigin, Portfolio};

    #[test]
    fn test_that_portfolio_keeps_fixed_key_order() {
        let portfolio = Portfolio::from_fn(|key| key);
        let keys: Vec<AssetKey> = portfolio.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, AssetKey::ALL.to_vec());

        let json = serde_json::to_string(&Portfolio::from_fn(|key| key.name())).unwrap();
        let bitcoin = json.find("\"bitcoin\"").unwrap();
        let gold = json.find("\"gold\"").unwrap();
        let silver = json.find("\"silver\"").unwrap();
        let korea = json.find("\"korea_stock\"").unwrap();
        let global = json.find("\"global_stock\"").unwrap();
        assert!(bitcoin < gold && gold < silver && silver < korea && korea < global);
    }

    #[test]
    fn test_that_only_bitcoin_is_live() {
        let live: Vec<AssetKey> = AssetKey::ALL
            .into_iter()
            .filter(|key| key.origin() == ChangeOrigin::Live)
            .collect();
        assert_eq!(live, vec![AssetKey::Bitcoin]);
        assert_eq!(
            AssetKey::Silver.origin(),
            ChangeOrigin::Synthetic(-3.0..3.0)
        );
    }

    #[test]
    fn test_that_key_serializes_to_wire_name() {
        assert_eq!(
            serde_json::to_string(&AssetKey::KoreaStock).unwrap(),
            "\"korea_stock\""
        );
    }
}
