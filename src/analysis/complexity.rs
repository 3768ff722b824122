//! Bounded complexity score from point count and radial spread

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::point::PointSet;
use crate::io::configuration::{
    MAX_COMPLEXITY_SCORE, MIN_COMPLEXITY_POINTS, POINTS_PER_COMPLEXITY_UNIT,
    SPREAD_PER_COMPLEXITY_UNIT,
};
use crate::io::error::{KolamError, invalid_input};

/// Complexity on a `0..=10` scale
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct ComplexityScore(u8);

impl ComplexityScore {
    /// Lowest possible score
    pub const ZERO: Self = Self(0);
    /// Saturated score
    pub const MAX: Self = Self(MAX_COMPLEXITY_SCORE);

    /// Numeric score
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for ComplexityScore {
    type Error = KolamError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value <= MAX_COMPLEXITY_SCORE {
            Ok(Self(value))
        } else {
            Err(invalid_input(
                "complexity",
                &value,
                &format!("must not exceed {MAX_COMPLEXITY_SCORE}"),
            ))
        }
    }
}

impl From<ComplexityScore> for u8 {
    fn from(score: ComplexityScore) -> Self {
        score.0
    }
}

impl fmt::Display for ComplexityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{MAX_COMPLEXITY_SCORE}", self.0)
    }
}

/// Difference between the largest and smallest distance to the centroid
///
/// Returns `None` for an empty set, or when a distance exceeds the `f64` range.
pub fn radial_spread(points: &PointSet) -> Option<f64> {
    let center = points.centroid()?;
    let distances = points.radial_distances(&center);

    let max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = distances.iter().copied().fold(f64::INFINITY, f64::min);
    Some(max - min).filter(|spread| spread.is_finite())
}

/// Score `points` as `min(10, ⌊len / 5⌋ + ⌊spread / 2⌋)`
///
/// Sets with fewer than two points score zero, and an unrepresentable spread
/// contributes nothing. Non-decreasing in point count and in spread until it
/// saturates.
pub fn score(points: &PointSet) -> ComplexityScore {
    if points.len() < MIN_COMPLEXITY_POINTS {
        return ComplexityScore::ZERO;
    }

    let count_term = points.len() / POINTS_PER_COMPLEXITY_UNIT;
    // Spread is non-negative and the cast saturates on overflow
    let spread_term = radial_spread(points).map_or(0, |spread| {
        (spread / SPREAD_PER_COMPLEXITY_UNIT).floor() as usize
    });

    let total = count_term
        .saturating_add(spread_term)
        .min(usize::from(MAX_COMPLEXITY_SCORE));
    ComplexityScore(total as u8)
}
