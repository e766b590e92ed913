//! Exhaustive loadout enumeration and ranking.
//!
//! A loadout (combination) takes exactly one item from every category of
//! an [`Inventory`](crate::gear::Inventory). The evaluator walks the full
//! Cartesian product, sums each combination's stats, and orders the
//! results by ascending threshold rank.
//!
//! # Ordering
//!
//! Lower rank is reported first. Combinations with equal rank keep their
//! enumeration order, which iterates categories in inventory order with
//! the last category varying fastest.
//!
//! # Cost
//!
//! Ranking materializes every combination, so memory grows with the
//! product of the category sizes. [`EvaluatorConfig::max_combinations`]
//! bounds it.

mod config;
mod engine;
mod types;

pub use config::EvaluatorConfig;
pub use engine::{Combinations, LoadoutEvaluator};
pub use types::{Combination, RankedLoadout};
