//! Text and JSON renderings of ranked loadouts.

use std::fmt;

use serde::Serialize;

use crate::gear::Inventory;
use crate::loadout::RankedLoadout;
use crate::stats::{StatVector, ATTRIBUTE_COUNT};

/// One chosen item in a report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemSummary {
    pub category: String,
    pub name: String,
    pub power: i64,
    pub total: i64,
}

/// Everything reported about one ranked loadout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadoutReport {
    pub rank: i64,
    pub thresholds: [i64; ATTRIBUTE_COUNT],
    pub clamped: [i64; ATTRIBUTE_COUNT],
    pub waste_total: i64,
    pub waste: [i64; ATTRIBUTE_COUNT],
    pub items: Vec<ItemSummary>,
}

impl LoadoutReport {
    /// Builds a report row. Category names are taken from `inventory`
    /// positionally, matching how the combination was enumerated.
    pub fn new(inventory: &Inventory, ranked: &RankedLoadout<'_>) -> Self {
        let waste = ranked.stats.waste();
        let items = inventory
            .categories()
            .iter()
            .zip(ranked.combination.items())
            .map(|(category, item)| ItemSummary {
                category: category.name.clone(),
                name: item.name.clone(),
                power: item.power,
                total: item.total(),
            })
            .collect();

        Self {
            rank: ranked.rank,
            thresholds: ranked.stats.thresholds(),
            clamped: *ranked.stats.clamped().components(),
            waste_total: waste.total(),
            waste: *waste.components(),
            items,
        }
    }
}

impl fmt::Display for LoadoutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Rank {} ({}), waste: {} ({})",
            self.rank,
            StatVector::new(self.thresholds),
            self.waste_total,
            StatVector::new(self.waste),
        )?;
        f.write_str("\t[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}:{} ({})", item.name, item.power, item.total)?;
        }
        f.write_str("]")
    }
}

/// Renders loadouts as text blocks, one per line pair, in the given order.
pub fn render_text(inventory: &Inventory, ranked: &[RankedLoadout<'_>]) -> String {
    ranked
        .iter()
        .map(|loadout| format!("{}\n", LoadoutReport::new(inventory, loadout)))
        .collect()
}

/// Renders loadouts as a pretty-printed JSON array.
pub fn render_json(
    inventory: &Inventory,
    ranked: &[RankedLoadout<'_>],
) -> serde_json::Result<String> {
    let reports: Vec<LoadoutReport> = ranked
        .iter()
        .map(|loadout| LoadoutReport::new(inventory, loadout))
        .collect();
    serde_json::to_string_pretty(&reports)
}
