//! Inventory model and JSON loading.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::types::Item;
use crate::error::{LoadoutError, LoadoutResult};
use crate::stats::{StatVector, ATTRIBUTE_COUNT};

/// One item as it appears in the equipment file.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub power: i64,
    /// Already masterworked.
    #[serde(rename = "mw")]
    pub masterworked: bool,
    pub stats: Vec<i64>,
    pub total: i64,
}

impl ItemRecord {
    /// Validates the record and converts it into an [`Item`].
    ///
    /// `category` and `index` only locate the record in error messages.
    pub fn into_item(self, category: &str, index: usize) -> LoadoutResult<Item> {
        let stats = StatVector::from_slice(&self.stats).ok_or_else(|| {
            LoadoutError::InvalidRecord {
                category: category.to_string(),
                index,
                reason: format!(
                    "expected {ATTRIBUTE_COUNT} stats, got {}",
                    self.stats.len()
                ),
            }
        })?;
        Item::new(self.name, self.power, self.masterworked, stats, self.total).map_err(|e| match e {
            LoadoutError::StatOutOfRange { value, limit, .. } => LoadoutError::InvalidRecord {
                category: category.to_string(),
                index,
                reason: format!("stat value {value} is outside ±{limit}"),
            },
            other => other,
        })
    }
}

/// A named equipment slot and the items available for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    pub items: Vec<Item>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Ordered mapping from category name to its items.
///
/// Category order is the insertion order (file order when loaded) and
/// defines the order of items inside every combination.
///
/// # Examples
///
/// ```
/// use u_loadout::gear::Inventory;
///
/// let json = r#"{
///     "helmet": [{"name": "Mask", "power": 1000, "mw": false,
///                 "stats": [10, 10, 10, 10, 10, 10], "total": 60}],
///     "arms":   [{"name": "Grips", "power": 1000, "mw": false,
///                 "stats": [10, 10, 10, 10, 10, 10], "total": 60}]
/// }"#;
/// let inventory = Inventory::from_json_str(json, false).unwrap();
/// assert_eq!(inventory.category_names(), vec!["helmet", "arms"]);
/// assert_eq!(inventory.combination_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    categories: Vec<Category>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a category.
    pub fn with_category(mut self, name: impl Into<String>, items: Vec<Item>) -> Self {
        self.categories.push(Category::new(name, items));
        self
    }

    /// Reads and parses an equipment file.
    pub fn load(path: impl AsRef<Path>, masterwork: bool) -> LoadoutResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadoutError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "loading equipment");
        Self::from_json_str(&text, masterwork)
    }

    /// Parses an equipment document.
    ///
    /// With `masterwork` set, every item that is not yet masterworked gets
    /// the bonus applied before it enters the inventory. The first invalid
    /// record aborts the whole load.
    pub fn from_json_str(text: &str, masterwork: bool) -> LoadoutResult<Self> {
        let document: Map<String, Value> = serde_json::from_str(text)?;
        let mut inventory = Self::new();

        for (category, value) in document {
            let Value::Array(entries) = value else {
                return Err(LoadoutError::InvalidCategory {
                    category,
                    reason: "expected an array of item records".into(),
                });
            };

            let mut items = Vec::with_capacity(entries.len());
            for (index, entry) in entries.into_iter().enumerate() {
                let record: ItemRecord =
                    serde_json::from_value(entry).map_err(|e| LoadoutError::InvalidRecord {
                        category: category.clone(),
                        index,
                        reason: e.to_string(),
                    })?;
                let mut item = record.into_item(&category, index)?;
                if masterwork && !item.masterworked {
                    item = item.with_masterwork();
                    debug!(item = %item, "applied masterwork");
                }
                items.push(item);
            }

            inventory.categories.push(Category::new(category, items));
        }

        info!(
            categories = inventory.len(),
            items = inventory.item_count(),
            combinations = %inventory.combination_count(),
            "inventory loaded"
        );
        Ok(inventory)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the items of the named category.
    pub fn get(&self, category: &str) -> Option<&[Item]> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| c.items.as_slice())
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    /// Size of the Cartesian product over all categories.
    ///
    /// An inventory without categories has exactly one (empty)
    /// combination. Saturates at `u128::MAX`.
    pub fn combination_count(&self) -> u128 {
        self.categories
            .iter()
            .fold(1u128, |acc, c| acc.saturating_mul(c.items.len() as u128))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, stats: [i64; 6], total: i64, mw: bool) -> String {
        format!(
            r#"{{"name": "{name}", "power": 1000, "mw": {mw}, "stats": {stats:?}, "total": {total}}}"#
        )
    }

    #[test]
    fn test_preserves_file_order() {
        let json = format!(
            r#"{{"zeta": [{}], "alpha": [{}, {}]}}"#,
            record("Z", [10; 6], 60, false),
            record("A1", [1, 2, 3, 4, 5, 6], 21, false),
            record("A2", [0; 6], 0, true),
        );
        let inventory = Inventory::from_json_str(&json, false).unwrap();

        assert_eq!(inventory.category_names(), vec!["zeta", "alpha"]);
        let alpha = inventory.get("alpha").unwrap();
        assert_eq!(alpha[0].name, "A1");
        assert_eq!(alpha[1].name, "A2");
        assert!(alpha[1].masterworked);
        assert_eq!(inventory.item_count(), 3);
        assert_eq!(inventory.combination_count(), 2);
    }

    #[test]
    fn test_masterwork_on_load() {
        let json = format!(
            r#"{{"legs": [{}, {}]}}"#,
            record("Fresh", [9, 0, 0, 0, 0, 0], 9, false),
            record("Done", [12; 6], 72, true),
        );
        let inventory = Inventory::from_json_str(&json, true).unwrap();
        let legs = inventory.get("legs").unwrap();

        assert_eq!(legs[0].stats(), StatVector::new([11, 2, 2, 2, 2, 2]));
        assert!(legs[0].masterworked);
        assert_eq!(legs[1].stats(), StatVector::splat(12));
    }

    #[test]
    fn test_total_mismatch_aborts_load() {
        let json = format!(
            r#"{{"helmet": [{}], "arms": [{}]}}"#,
            record("Good", [10; 6], 60, false),
            record("Bad", [1, 2, 3, 4, 5, 6], 20, false),
        );
        let err = Inventory::from_json_str(&json, false).unwrap_err();
        assert!(matches!(err, LoadoutError::TotalMismatch { ref name, .. } if name == "Bad"));
    }

    #[test]
    fn test_wrong_stat_count() {
        let json = r#"{"arms": [{"name": "X", "power": 1, "mw": false, "stats": [1, 2, 3], "total": 6}]}"#;
        let err = Inventory::from_json_str(json, false).unwrap_err();
        assert!(matches!(
            err,
            LoadoutError::InvalidRecord { ref category, index: 0, .. } if category == "arms"
        ));
    }

    #[test]
    fn test_oversized_stat_aborts_load() {
        let json = format!(
            r#"{{"helmet": [{}], "arms": [{{"name": "Huge", "power": 1, "mw": false, "stats": [{}, 1, 0, 0, 0, 0], "total": 0}}]}}"#,
            record("Good", [10; 6], 60, false),
            i64::MAX,
        );
        let err = Inventory::from_json_str(&json, false).unwrap_err();
        assert!(matches!(
            err,
            LoadoutError::InvalidRecord { ref category, index: 0, .. } if category == "arms"
        ));
    }

    #[test]
    fn test_missing_field() {
        let json = r#"{"arms": [{"name": "X", "power": 1, "stats": [0, 0, 0, 0, 0, 0], "total": 0}]}"#;
        let err = Inventory::from_json_str(json, false).unwrap_err();
        assert!(matches!(err, LoadoutError::InvalidRecord { .. }));
    }

    #[test]
    fn test_category_must_be_array() {
        let err = Inventory::from_json_str(r#"{"arms": 3}"#, false).unwrap_err();
        assert!(matches!(err, LoadoutError::InvalidCategory { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Inventory::from_json_str("{not json", false).unwrap_err();
        assert!(matches!(err, LoadoutError::Json(_)));

        let err = Inventory::from_json_str("[1, 2]", false).unwrap_err();
        assert!(matches!(err, LoadoutError::Json(_)));
    }

    #[test]
    fn test_empty_category_is_valid() {
        let json = format!(
            r#"{{"helmet": [{}], "arms": []}}"#,
            record("Good", [10; 6], 60, false)
        );
        let inventory = Inventory::from_json_str(&json, false).unwrap();
        assert_eq!(inventory.len(), 2);
        assert_eq!(inventory.combination_count(), 0);
    }

    #[test]
    fn test_missing_file() {
        let err = Inventory::load("/definitely/not/here.json", false).unwrap_err();
        assert!(matches!(err, LoadoutError::Io { .. }));
    }

    #[test]
    fn test_builder() {
        let item = Item::new("Mask", 1000, false, StatVector::splat(10), 60).unwrap();
        let inventory = Inventory::new()
            .with_category("helmet", vec![item.clone(), item.clone()])
            .with_category("arms", vec![item.clone(), item.clone(), item]);
        assert_eq!(inventory.combination_count(), 6);
        assert!(Inventory::new().is_empty());
        assert_eq!(Inventory::new().combination_count(), 1);
    }
}
