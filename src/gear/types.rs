//! The equipment item.

use std::fmt;

use serde::Serialize;

use crate::error::{LoadoutError, LoadoutResult};
use crate::stats::StatVector;

/// Largest absolute value accepted for a single stat component.
///
/// Keeps item totals and loadout aggregates far inside `i64`: summing
/// one item per category cannot overflow for any inventory that fits in
/// memory.
pub const MAX_STAT_MAGNITUDE: i64 = 1_000_000_000;

/// A single piece of equipment.
///
/// Names are not unique; two items with the same name and power are
/// still distinct entries of the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Display name.
    pub name: String,
    /// Power level.
    pub power: i64,
    /// Whether the masterwork bonus is already included in `stats`.
    pub masterworked: bool,
    stats: StatVector,
}

impl Item {
    /// Creates an item, checking `stats` against the declared total.
    ///
    /// Components beyond [`MAX_STAT_MAGNITUDE`] are rejected with
    /// [`LoadoutError::StatOutOfRange`]. A total mismatch means the input
    /// data is corrupt and is reported as [`LoadoutError::TotalMismatch`].
    pub fn new(
        name: impl Into<String>,
        power: i64,
        masterworked: bool,
        stats: StatVector,
        declared_total: i64,
    ) -> LoadoutResult<Self> {
        let name = name.into();
        if let Some(&value) = stats
            .components()
            .iter()
            .find(|c| c.unsigned_abs() > MAX_STAT_MAGNITUDE as u64)
        {
            return Err(LoadoutError::StatOutOfRange {
                name,
                power,
                value,
                limit: MAX_STAT_MAGNITUDE,
            });
        }
        let actual = stats.total();
        if actual != declared_total {
            return Err(LoadoutError::TotalMismatch {
                name,
                power,
                declared: declared_total,
                actual,
            });
        }
        Ok(Self {
            name,
            power,
            masterworked,
            stats,
        })
    }

    pub fn stats(&self) -> StatVector {
        self.stats
    }

    /// Sum of this item's stats.
    pub fn total(&self) -> i64 {
        self.stats.total()
    }

    /// Returns this item with the masterwork bonus applied.
    ///
    /// Already masterworked items come back unchanged, so the transform
    /// is idempotent.
    pub fn with_masterwork(self) -> Self {
        if self.masterworked {
            return self;
        }
        Self {
            stats: self.stats.masterworked(),
            masterworked: true,
            ..self
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({})", self.name, self.power, self.total())
    }
}
