//! Equipment items and the per-category inventory they are drawn from.
//!
//! Items are validated once on construction (declared total must match
//! the stat sum) and are read-only afterwards. The optional masterwork
//! upgrade is applied as a pure transform while loading.

mod inventory;
mod types;

pub use inventory::{Category, Inventory, ItemRecord};
pub use types::{Item, MAX_STAT_MAGNITUDE};
