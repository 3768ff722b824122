//! Rotational and reflection symmetry detection about the centroid
//!
//! A symmetry is accepted only when every transformed point has an original
//! point strictly within the matching tolerance; one unmatched point rejects
//! the whole candidate. Rotational orders are tested in ascending order and
//! reflection (vertical axis through the centroid) last, so reports are
//! deterministic for a given input.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geometry::index::{ProximityGrid, validate_tolerance};
use crate::geometry::point::{Point, PointSet};
use crate::io::configuration::{
    DEFAULT_MAX_ANALYSIS_POINTS, DEFAULT_TOLERANCE, MAX_ROTATION_ORDER, MIN_ROTATION_ORDER,
    MIN_SYMMETRY_POINTS,
};
use crate::io::error::{KolamError, Result, computation_error, invalid_input};

const REFLECTION_LABEL: &str = "Reflection";
const ROTATION_SUFFIX: &str = "-fold rotation";
// Written by older saved designs
const LEGACY_ROTATION_SUFFIX: &str = "-fold rotational";

/// A single discovered symmetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Invariance under rotation by `2π / order` about the centroid
    Rotational(u8),
    /// Invariance under mirroring across the vertical line through the centroid
    Reflection,
}

impl Symmetry {
    /// Rotational order, if this is a rotational symmetry
    pub const fn order(self) -> Option<u8> {
        match self {
            Self::Rotational(order) => Some(order),
            Self::Reflection => None,
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rotational(order) => write!(f, "{order}{ROTATION_SUFFIX}"),
            Self::Reflection => f.write_str(REFLECTION_LABEL),
        }
    }
}

impl FromStr for Symmetry {
    type Err = KolamError;

    fn from_str(s: &str) -> Result<Self> {
        let label = s.trim();
        if label.eq_ignore_ascii_case(REFLECTION_LABEL) {
            return Ok(Self::Reflection);
        }

        let order = label
            .strip_suffix(LEGACY_ROTATION_SUFFIX)
            .or_else(|| label.strip_suffix(ROTATION_SUFFIX))
            .and_then(|digits| digits.parse::<u8>().ok())
            .ok_or_else(|| {
                invalid_input(
                    "symmetry",
                    &label,
                    &"expected '<n>-fold rotation' or 'Reflection'",
                )
            })?;

        if (MIN_ROTATION_ORDER..=MAX_ROTATION_ORDER).contains(&order) {
            Ok(Self::Rotational(order))
        } else {
            Err(invalid_input(
                "symmetry",
                &label,
                &format!("order must be between {MIN_ROTATION_ORDER} and {MAX_ROTATION_ORDER}"),
            ))
        }
    }
}

impl Serialize for Symmetry {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Symmetry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// Symmetries found in a point set, rotational orders ascending then reflection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymmetryReport {
    symmetries: Vec<Symmetry>,
}

impl SymmetryReport {
    /// Report with no symmetries
    pub const fn empty() -> Self {
        Self {
            symmetries: Vec::new(),
        }
    }

    /// Wrap symmetries in the given order
    pub const fn from_symmetries(symmetries: Vec<Symmetry>) -> Self {
        Self { symmetries }
    }

    /// Number of symmetries found
    pub const fn len(&self) -> usize {
        self.symmetries.len()
    }

    /// Whether no symmetry was found
    pub const fn is_empty(&self) -> bool {
        self.symmetries.is_empty()
    }

    /// Symmetries in report order
    pub fn symmetries(&self) -> &[Symmetry] {
        &self.symmetries
    }

    /// Iterate over symmetries in report order
    pub fn iter(&self) -> std::slice::Iter<'_, Symmetry> {
        self.symmetries.iter()
    }

    /// Whether the report contains `symmetry`
    pub fn contains(&self, symmetry: Symmetry) -> bool {
        self.symmetries.contains(&symmetry)
    }

    /// Rotational orders found, ascending
    pub fn rotational_orders(&self) -> Vec<u8> {
        self.symmetries.iter().filter_map(|s| s.order()).collect()
    }

    /// Whether vertical-axis reflection was found
    pub fn has_reflection(&self) -> bool {
        self.contains(Symmetry::Reflection)
    }

    /// Textual labels as stored in design files
    pub fn labels(&self) -> Vec<String> {
        self.symmetries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a SymmetryReport {
    type Item = &'a Symmetry;
    type IntoIter = std::slice::Iter<'a, Symmetry>;

    fn into_iter(self) -> Self::IntoIter {
        self.symmetries.iter()
    }
}

/// Tolerance-based symmetry detector
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetryAnalyzer {
    tolerance: f64,
    max_points: usize,
}

impl Default for SymmetryAnalyzer {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_points: DEFAULT_MAX_ANALYSIS_POINTS,
        }
    }
}

impl SymmetryAnalyzer {
    /// Create an analyzer with an explicit tolerance and point ceiling
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the tolerance is not finite and positive or
    /// `max_points` is zero
    pub fn new(tolerance: f64, max_points: usize) -> Result<Self> {
        let tolerance = validate_tolerance(tolerance)?;
        if max_points == 0 {
            return Err(invalid_input(
                "max_points",
                &max_points,
                &"must be at least 1",
            ));
        }
        Ok(Self {
            tolerance,
            max_points,
        })
    }

    /// Matching tolerance in coordinate units
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Largest point count accepted by `analyze`
    pub const fn max_points(&self) -> usize {
        self.max_points
    }

    /// Detect every symmetry of `points`
    ///
    /// Sets with fewer than three points yield an empty report.
    ///
    /// # Errors
    ///
    /// Returns `InputTooLarge` above the point ceiling, or `Computation` if the
    /// centroid is not representable
    pub fn analyze(&self, points: &PointSet) -> Result<SymmetryReport> {
        if points.len() < MIN_SYMMETRY_POINTS {
            return Ok(SymmetryReport::empty());
        }
        if points.len() > self.max_points {
            return Err(KolamError::InputTooLarge {
                points: points.len(),
                limit: self.max_points,
            });
        }

        let center = points
            .centroid()
            .ok_or_else(|| computation_error("centroid", &"mean coordinate overflowed"))?;
        let grid = ProximityGrid::new(points.points(), self.tolerance)?;

        let mut symmetries: Vec<Symmetry> = (MIN_ROTATION_ORDER..=MAX_ROTATION_ORDER)
            .filter(|&order| has_rotational_symmetry(&grid, points, &center, order))
            .map(Symmetry::Rotational)
            .collect();

        if has_reflection_symmetry(&grid, points, &center) {
            symmetries.push(Symmetry::Reflection);
        }

        tracing::debug!(
            points = points.len(),
            cells = grid.cell_count(),
            found = symmetries.len(),
            "Symmetry analysis complete"
        );
        Ok(SymmetryReport::from_symmetries(symmetries))
    }
}

/// Detect symmetries with the default tolerance and point ceiling
///
/// # Errors
///
/// Same conditions as `SymmetryAnalyzer::analyze`
pub fn analyze(points: &PointSet) -> Result<SymmetryReport> {
    SymmetryAnalyzer::default().analyze(points)
}

fn has_rotational_symmetry(
    grid: &ProximityGrid<'_>,
    points: &PointSet,
    center: &Point,
    order: u8,
) -> bool {
    let angle = TAU / f64::from(order);
    points
        .iter()
        .all(|point| grid.has_point_near(point.rotated_about(center, angle)))
}

fn has_reflection_symmetry(grid: &ProximityGrid<'_>, points: &PointSet, center: &Point) -> bool {
    points
        .iter()
        .all(|point| grid.has_point_near(point.reflected_across_vertical(center.x())))
}
