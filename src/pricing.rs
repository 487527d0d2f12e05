use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PricingError, Result};
use crate::quantity::MaterialKey;

/// Unit price per material, in one currency.
///
/// Materials without a price cost nothing; new materials may ship before
/// pricing for them is populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceTable {
    prices: BTreeMap<MaterialKey, f64>,
}

impl PriceTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit price of a material.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` if the price is negative or not finite.
    pub fn set(&mut self, key: MaterialKey, price: f64) -> Result<()> {
        check_price(key.as_str(), price)?;
        self.prices.insert(key, price);
        Ok(())
    }

    /// Unit price of a material, if listed.
    #[must_use]
    pub fn get(&self, key: MaterialKey) -> Option<f64> {
        self.prices.get(&key).copied()
    }

    /// Unit price of a material, zero if unlisted.
    #[must_use]
    pub fn price(&self, key: MaterialKey) -> f64 {
        self.get(key).unwrap_or(0.0)
    }

    /// Number of priced materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns `true` if nothing is priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Parses a flat `{ "materialKey": price }` JSON object.
    ///
    /// Unknown material keys are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` on malformed JSON or an invalid price.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_json_lenient(json)?.0)
    }

    /// Like [`PriceTable::from_json`], also returning the skipped keys.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` on malformed JSON or an invalid price.
    pub fn from_json_lenient(json: &str) -> Result<(Self, Vec<String>)> {
        let raw: BTreeMap<String, f64> =
            serde_json::from_str(json).map_err(PricingError::from)?;
        Self::from_raw(raw)
    }

    /// Builds a table from string-keyed prices, skipping unknown keys.
    fn from_raw(raw: BTreeMap<String, f64>) -> Result<(Self, Vec<String>)> {
        let mut table = Self::new();
        let mut unknown = Vec::new();
        for (name, price) in raw {
            match name.parse::<MaterialKey>() {
                Ok(key) => table.set(key, price)?,
                Err(_) => {
                    warn!(material = %name, "skipping price for unknown material");
                    unknown.push(name);
                }
            }
        }
        Ok((table, unknown))
    }
}

impl FromIterator<(MaterialKey, f64)> for PriceTable {
    /// Collects prices as given; use [`PriceTable::set`] when input is untrusted.
    fn from_iter<I: IntoIterator<Item = (MaterialKey, f64)>>(iter: I) -> Self {
        Self {
            prices: iter.into_iter().collect(),
        }
    }
}

fn check_price(key: &str, price: f64) -> std::result::Result<(), PricingError> {
    if !price.is_finite() {
        return Err(PricingError::NonFinitePrice {
            key: key.to_owned(),
        });
    }
    if price < 0.0 {
        return Err(PricingError::NegativePrice {
            key: key.to_owned(),
            value: price,
        });
    }
    Ok(())
}

/// Quality tier of a price list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PriceTier {
    Budget,
    Standard,
    Premium,
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PriceTier::Budget => "budget",
            PriceTier::Standard => "standard",
            PriceTier::Premium => "premium",
        })
    }
}

/// Price lists for several tiers, as loaded from pricing configuration.
///
/// The calculators never see tiers: pick one with [`PriceCatalog::table`]
/// and pass the flattened [`PriceTable`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceCatalog {
    tiers: BTreeMap<PriceTier, PriceTable>,
}

impl PriceCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a tier.
    #[must_use]
    pub fn with_tier(mut self, tier: PriceTier, table: PriceTable) -> Self {
        self.tiers.insert(tier, table);
        self
    }

    /// Parses `{ "budget": {...}, "standard": {...}, "premium": {...} }`.
    ///
    /// # Errors
    ///
    /// Returns `PricingError` on malformed JSON or an invalid price.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: BTreeMap<PriceTier, BTreeMap<String, f64>> =
            serde_json::from_str(json).map_err(PricingError::from)?;
        let mut tiers = BTreeMap::new();
        for (tier, prices) in raw {
            let (table, _) = PriceTable::from_raw(prices)?;
            tiers.insert(tier, table);
        }
        Ok(Self { tiers })
    }

    /// Tiers defined in this catalog.
    pub fn tiers(&self) -> impl Iterator<Item = PriceTier> + '_ {
        self.tiers.keys().copied()
    }

    /// The flattened price table of one tier.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::MissingTier` if the tier is not defined.
    pub fn table(&self, tier: PriceTier) -> Result<&PriceTable> {
        self.tiers
            .get(&tier)
            .ok_or_else(|| PricingError::MissingTier(tier.to_string()).into())
    }
}
