//! Combination and ranked result types.

use crate::gear::Item;
use crate::stats::StatVector;

/// One item per category, in category order.
///
/// Borrowed from the inventory it was enumerated from; `index` is the
/// position in the canonical enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination<'a> {
    index: usize,
    items: Vec<&'a Item>,
}

impl<'a> Combination<'a> {
    pub(crate) fn new(index: usize, items: Vec<&'a Item>) -> Self {
        Self { index, items }
    }

    /// Position in enumeration order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[&'a Item] {
        &self.items
    }

    /// Number of items, equal to the number of categories.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element-wise sum of all item stats.
    pub fn aggregate(&self) -> StatVector {
        self.items.iter().map(|item| item.stats()).sum()
    }

    /// Threshold rank of the aggregate.
    pub fn rank(&self) -> i64 {
        self.aggregate().rank()
    }
}

/// A scored combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedLoadout<'a> {
    /// The chosen items.
    pub combination: Combination<'a>,
    /// Aggregate stats of the combination.
    pub stats: StatVector,
    /// `stats.rank()`, cached as the sort key.
    pub rank: i64,
}

impl<'a> RankedLoadout<'a> {
    /// Scores a combination.
    pub fn new(combination: Combination<'a>) -> Self {
        let stats = combination.aggregate();
        Self {
            rank: stats.rank(),
            stats,
            combination,
        }
    }

    pub fn index(&self) -> usize {
        self.combination.index()
    }

    /// Total points lost below threshold steps.
    pub fn waste_total(&self) -> i64 {
        self.stats.waste().total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, stats: [i64; 6]) -> Item {
        let v = StatVector::new(stats);
        Item::new(name, 1000, false, v, v.total()).unwrap()
    }

    #[test]
    fn test_aggregate_sums_items() {
        let a = item("A", [10, 10, 10, 10, 10, 10]);
        let b = item("B", [10, 10, 10, 10, 10, 10]);
        let combo = Combination::new(0, vec![&a, &b]);

        assert_eq!(combo.len(), 2);
        assert_eq!(combo.aggregate(), StatVector::splat(20));
        assert_eq!(combo.rank(), 12);
    }

    #[test]
    fn test_empty_combination() {
        let combo = Combination::new(0, Vec::new());
        assert!(combo.is_empty());
        assert_eq!(combo.aggregate(), StatVector::ZERO);
        assert_eq!(combo.rank(), 0);
    }

    #[test]
    fn test_ranked_loadout() {
        let a = item("A", [15, 3, 0, 0, 0, 0]);
        let b = item("B", [4, 9, 20, 0, 0, 1]);
        let ranked = RankedLoadout::new(Combination::new(7, vec![&a, &b]));

        assert_eq!(ranked.stats, StatVector::new([19, 12, 20, 0, 0, 1]));
        assert_eq!(ranked.rank, 4);
        assert_eq!(ranked.waste_total(), 9 + 2 + 1);
        assert_eq!(ranked.index(), 7);
    }
}
