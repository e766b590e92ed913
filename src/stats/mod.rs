//! Fixed-length attribute vectors and threshold arithmetic.
//!
//! Every piece of equipment carries six integer attributes. Bonuses in the
//! source game apply in steps of 10, so a vector is judged by how many full
//! steps (thresholds) it reaches, and whatever sits below the next step is
//! waste.
//!
//! Vectors are immutable values: arithmetic always returns a new vector.

mod vector;

pub use vector::{Attribute, StatVector, ATTRIBUTE_COUNT, MASTERWORK_BONUS, THRESHOLD_STEP};
