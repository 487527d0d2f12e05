use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::material::{MaterialCategory, MaterialKey};

/// Required quantity per material, in whole purchasable units.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialLedger {
    quantities: BTreeMap<MaterialKey, u32>,
}

impl MaterialLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity of a material, replacing any previous value.
    pub fn insert(&mut self, key: MaterialKey, quantity: u32) {
        self.quantities.insert(key, quantity);
    }

    /// Quantity of a material, if present.
    #[must_use]
    pub fn get(&self, key: MaterialKey) -> Option<u32> {
        self.quantities.get(&key).copied()
    }

    /// Returns `true` if the ledger lists the material.
    #[must_use]
    pub fn contains(&self, key: MaterialKey) -> bool {
        self.quantities.contains_key(&key)
    }

    /// Number of materials listed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Returns `true` if no material is listed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Iterates `(material, quantity)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialKey, u32)> + '_ {
        self.quantities.iter().map(|(k, q)| (*k, *q))
    }

    /// Iterates the entries of one category.
    pub fn in_category(
        &self,
        category: MaterialCategory,
    ) -> impl Iterator<Item = (MaterialKey, u32)> + '_ {
        self.iter().filter(move |(k, _)| k.category() == category)
    }
}

impl FromIterator<(MaterialKey, u32)> for MaterialLedger {
    fn from_iter<I: IntoIterator<Item = (MaterialKey, u32)>>(iter: I) -> Self {
        Self {
            quantities: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MaterialLedger {
    type Item = (&'a MaterialKey, &'a u32);
    type IntoIter = std::collections::btree_map::Iter<'a, MaterialKey, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.quantities.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut ledger = MaterialLedger::new();
        assert!(ledger.is_empty());
        ledger.insert(MaterialKey::Paint, 8);
        ledger.insert(MaterialKey::Paint, 9);
        assert_eq!(ledger.get(MaterialKey::Paint), Some(9));
        assert_eq!(ledger.get(MaterialKey::Osb), None);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn category_filter() {
        let ledger: MaterialLedger = [
            (MaterialKey::Sockets, 4),
            (MaterialKey::Switches, 3),
            (MaterialKey::Paint, 9),
        ]
        .into_iter()
        .collect();
        let electrical: Vec<MaterialKey> = ledger
            .in_category(MaterialCategory::Electrical)
            .map(|(k, _)| k)
            .collect();
        assert_eq!(electrical, [MaterialKey::Sockets, MaterialKey::Switches]);
    }

    #[test]
    fn serializes_as_key_map() {
        let ledger: MaterialLedger = [(MaterialKey::FloorPanels, 14), (MaterialKey::Cable15, 15)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&ledger).unwrap();
        assert_eq!(json, r#"{"floorPanels":14,"cable15":15}"#);
        let back: MaterialLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ledger);
    }
}
