//! The six-attribute stat vector.

use std::fmt;
use std::iter::Sum;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Number of attributes in a [`StatVector`].
pub const ATTRIBUTE_COUNT: usize = 6;

/// Size of one threshold step.
pub const THRESHOLD_STEP: i64 = 10;

/// Flat bonus granted to every attribute by a masterwork.
pub const MASTERWORK_BONUS: StatVector = StatVector::splat(2);

/// A named attribute, in canonical vector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Mobility,
    Resilience,
    Recovery,
    Discipline,
    Intellect,
    Strength,
}

impl Attribute {
    /// All attributes in vector order.
    pub const ALL: [Attribute; ATTRIBUTE_COUNT] = [
        Attribute::Mobility,
        Attribute::Resilience,
        Attribute::Recovery,
        Attribute::Discipline,
        Attribute::Intellect,
        Attribute::Strength,
    ];

    /// Position of this attribute inside a [`StatVector`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter label used in text output.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Attribute::Mobility => "Mob",
            Attribute::Resilience => "Res",
            Attribute::Recovery => "Rec",
            Attribute::Discipline => "Dis",
            Attribute::Intellect => "Int",
            Attribute::Strength => "Str",
        }
    }
}

/// An immutable vector of the six attributes.
///
/// Thresholds use floor division, so [`waste`](StatVector::waste) is always
/// in `0..10` per component and `total == clamped.total + waste.total`.
///
/// # Examples
///
/// ```
/// use u_loadout::stats::StatVector;
///
/// let v = StatVector::new([23, 10, 9, 0, 41, 15]);
/// assert_eq!(v.thresholds(), [2, 1, 0, 0, 4, 1]);
/// assert_eq!(v.rank(), 8);
/// assert_eq!(v.waste(), StatVector::new([3, 0, 9, 0, 1, 5]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatVector([i64; ATTRIBUTE_COUNT]);

impl StatVector {
    /// The all-zero vector.
    pub const ZERO: StatVector = StatVector::splat(0);

    pub const fn new(components: [i64; ATTRIBUTE_COUNT]) -> Self {
        Self(components)
    }

    /// A vector with every component set to `value`.
    pub const fn splat(value: i64) -> Self {
        Self([value; ATTRIBUTE_COUNT])
    }

    /// Builds a vector from a slice, returning `None` unless it holds
    /// exactly [`ATTRIBUTE_COUNT`] values.
    pub fn from_slice(values: &[i64]) -> Option<Self> {
        <[i64; ATTRIBUTE_COUNT]>::try_from(values).ok().map(Self)
    }

    pub fn components(&self) -> &[i64; ATTRIBUTE_COUNT] {
        &self.0
    }

    pub fn get(&self, attribute: Attribute) -> i64 {
        self.0[attribute.index()]
    }

    /// Element-wise sum.
    pub fn add(self, other: StatVector) -> StatVector {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(other.0.iter()) {
            *o += r;
        }
        StatVector(out)
    }

    /// Element-wise difference (`self - other`).
    pub fn subtract(self, other: StatVector) -> StatVector {
        let mut out = self.0;
        for (o, r) in out.iter_mut().zip(other.0.iter()) {
            *o -= r;
        }
        StatVector(out)
    }

    /// Sum of all components.
    pub fn total(&self) -> i64 {
        self.0.iter().sum()
    }

    /// Number of full threshold steps reached by each component.
    pub fn thresholds(&self) -> [i64; ATTRIBUTE_COUNT] {
        self.0.map(|c| c.div_euclid(THRESHOLD_STEP))
    }

    /// Sum of [`thresholds`](StatVector::thresholds). Lower ranks sort first.
    pub fn rank(&self) -> i64 {
        self.thresholds().iter().sum()
    }

    /// The useful part of each component: thresholds scaled back up.
    pub fn clamped(&self) -> StatVector {
        StatVector(self.thresholds().map(|t| t * THRESHOLD_STEP))
    }

    /// Points lost to rounding below the next threshold step.
    pub fn waste(&self) -> StatVector {
        self.subtract(self.clamped())
    }

    /// This vector with the masterwork bonus applied.
    pub fn masterworked(&self) -> StatVector {
        self.add(MASTERWORK_BONUS)
    }
}

impl From<[i64; ATTRIBUTE_COUNT]> for StatVector {
    fn from(components: [i64; ATTRIBUTE_COUNT]) -> Self {
        Self(components)
    }
}

impl Index<Attribute> for StatVector {
    type Output = i64;

    fn index(&self, attribute: Attribute) -> &i64 {
        &self.0[attribute.index()]
    }
}

impl<'a> Sum<&'a StatVector> for StatVector {
    fn sum<I: Iterator<Item = &'a StatVector>>(iter: I) -> StatVector {
        iter.fold(StatVector::ZERO, |acc, v| acc.add(*v))
    }
}

impl Sum for StatVector {
    fn sum<I: Iterator<Item = StatVector>>(iter: I) -> StatVector {
        iter.fold(StatVector::ZERO, StatVector::add)
    }
}

impl fmt::Display for StatVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attribute) in Attribute::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            write!(f, "{}: {}", attribute.abbreviation(), self.0[i])?;
        }
        Ok(())
    }
}
