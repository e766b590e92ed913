//! Exhaustive equipment loadout ranking by stat threshold packing.
//!
//! Each item carries six integer attributes. A loadout takes one item per
//! equipment category; its attributes are summed and judged by how many
//! full steps of 10 each attribute reaches. This crate enumerates every
//! loadout of an inventory and orders them by that threshold rank:
//!
//! - **Stats**: [`stats::StatVector`], the immutable six-attribute vector
//!   with threshold, clamp and waste arithmetic.
//! - **Gear**: [`gear::Item`] and [`gear::Inventory`], validated on load,
//!   with the optional masterwork upgrade.
//! - **Loadout**: [`loadout::LoadoutEvaluator`], lazy Cartesian-product
//!   enumeration plus stable ascending ranking, optionally scored in
//!   parallel (feature `parallel`).
//! - **Report**: text and JSON renderings of ranked loadouts.
//!
//! # Example
//!
//! ```
//! use u_loadout::gear::Inventory;
//! use u_loadout::loadout::LoadoutEvaluator;
//! use u_loadout::report::render_text;
//!
//! let json = r#"{
//!     "helmet": [{"name": "Mask", "power": 1000, "mw": false,
//!                 "stats": [10, 10, 10, 10, 10, 10], "total": 60}],
//!     "arms":   [{"name": "Grips", "power": 1000, "mw": false,
//!                 "stats": [10, 10, 10, 10, 10, 10], "total": 60}]
//! }"#;
//! let inventory = Inventory::from_json_str(json, false)?;
//! let ranked = LoadoutEvaluator::default().rank_all(&inventory)?;
//! assert_eq!(ranked[0].rank, 12);
//! print!("{}", render_text(&inventory, &ranked));
//! # Ok::<(), u_loadout::error::LoadoutError>(())
//! ```

pub mod error;
pub mod gear;
pub mod loadout;
pub mod report;
pub mod stats;

pub use error::{LoadoutError, LoadoutResult};
