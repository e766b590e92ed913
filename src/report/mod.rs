//! Rendering ranked loadouts for people and for machines.

mod format;

pub use format::{render_json, render_text, ItemSummary, LoadoutReport};
