//! Cartesian-product enumeration and rank ordering.
//!
//! [`LoadoutEvaluator`] drives the whole run:
//! enumerate → score → stable sort by ascending rank.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::EvaluatorConfig;
use super::types::{Combination, RankedLoadout};
use crate::error::{LoadoutError, LoadoutResult};
use crate::gear::Inventory;

/// Lazy iterator over every combination of an inventory.
///
/// Yields one item per category in inventory order. The last category
/// varies fastest. If any category is empty nothing is yielded; an
/// inventory with no categories yields a single empty combination.
///
/// Consumed once; call [`Combinations::new`] again for another pass.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    inventory: &'a Inventory,
    cursor: Vec<usize>,
    next_index: usize,
    exhausted: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        let exhausted = inventory.categories().iter().any(|c| c.items.is_empty());
        Self {
            inventory,
            cursor: vec![0; inventory.len()],
            next_index: 0,
            exhausted,
        }
    }

    /// Advances the odometer. Returns `false` once every position wrapped.
    fn advance(&mut self) -> bool {
        let categories = self.inventory.categories();
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < categories[pos].items.len() {
                return true;
            }
            self.cursor[pos] = 0;
        }
        false
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Combination<'a>> {
        if self.exhausted {
            return None;
        }

        let inventory: &'a Inventory = self.inventory;
        let items = inventory
            .categories()
            .iter()
            .zip(self.cursor.iter())
            .map(|(category, &i)| &category.items[i])
            .collect();
        let combination = Combination::new(self.next_index, items);

        self.next_index += 1;
        self.exhausted = !self.advance();
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.exhausted {
            return (0, Some(0));
        }
        let remaining = self
            .inventory
            .combination_count()
            .saturating_sub(self.next_index as u128);
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Enumerates, scores and orders loadouts.
///
/// # Usage
///
/// ```
/// use u_loadout::gear::{Inventory, Item};
/// use u_loadout::loadout::{EvaluatorConfig, LoadoutEvaluator};
/// use u_loadout::stats::StatVector;
///
/// let mask = Item::new("Mask", 1000, false, StatVector::splat(10), 60).unwrap();
/// let grips = Item::new("Grips", 1000, false, StatVector::splat(10), 60).unwrap();
/// let inventory = Inventory::new()
///     .with_category("helmet", vec![mask])
///     .with_category("arms", vec![grips]);
///
/// let evaluator = LoadoutEvaluator::new(EvaluatorConfig::default());
/// let ranked = evaluator.rank_all(&inventory).unwrap();
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].rank, 12);
/// assert_eq!(ranked[0].stats, StatVector::splat(20));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadoutEvaluator {
    config: EvaluatorConfig,
}

impl LoadoutEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Lazily enumerates all combinations of `inventory`.
    pub fn enumerate<'a>(&self, inventory: &'a Inventory) -> Combinations<'a> {
        Combinations::new(inventory)
    }

    /// Rank of a combination's aggregate stats. Lower sorts first.
    pub fn score(&self, combination: &Combination<'_>) -> i64 {
        combination.rank()
    }

    /// Scores every combination and orders them by ascending rank.
    ///
    /// Ties keep enumeration order. An empty category yields an empty
    /// result, not an error.
    ///
    /// # Errors
    ///
    /// [`LoadoutError::TooManyCombinations`] if the product exceeds
    /// [`EvaluatorConfig::max_combinations`]; nothing is scored then.
    pub fn rank_all<'a>(&self, inventory: &'a Inventory) -> LoadoutResult<Vec<RankedLoadout<'a>>> {
        let count = inventory.combination_count();
        if !self.config.allows(count) {
            return Err(LoadoutError::TooManyCombinations {
                count,
                limit: self.config.max_combinations,
            });
        }

        debug!(combinations = %count, parallel = self.config.parallel, "scoring loadouts");
        let combinations: Vec<Combination<'a>> = self.enumerate(inventory).collect();
        let mut ranked = score_all(combinations, self.config.parallel);
        sort_ranked(&mut ranked, self.config.parallel);

        if let (Some(first), Some(last)) = (ranked.first(), ranked.last()) {
            info!(
                combinations = ranked.len(),
                lowest_rank = first.rank,
                highest_rank = last.rank,
                "loadouts ranked"
            );
        } else {
            warn!("no combinations: at least one category is empty");
        }
        Ok(ranked)
    }
}

/// Scores all combinations, keeping their input order.
fn score_all(combinations: Vec<Combination<'_>>, parallel: bool) -> Vec<RankedLoadout<'_>> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return combinations.into_par_iter().map(RankedLoadout::new).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    combinations.into_iter().map(RankedLoadout::new).collect()
}

/// Orders by `(rank, enumeration index)`, i.e. a stable ascending sort.
fn sort_ranked(ranked: &mut [RankedLoadout<'_>], parallel: bool) {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            ranked.par_sort_unstable_by_key(|r| (r.rank, r.index()));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    ranked.sort_by_key(|r| r.rank);
}
