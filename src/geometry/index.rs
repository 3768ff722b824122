//! Uniform grid hash for tolerance-bounded neighbor queries
//!
//! Points are bucketed into square cells whose side equals the matching
//! tolerance. Any point strictly closer than the tolerance to a query lies in
//! the query's cell or one of its eight neighbors, so scanning that 3x3 block
//! answers exactly what a full linear scan would.

use std::collections::HashMap;

use crate::geometry::point::Point;
use crate::io::error::{Result, invalid_input};

type CellKey = (i64, i64);

/// Validate a matching tolerance
///
/// # Errors
///
/// Returns `InvalidInput` unless the tolerance is finite and positive
pub fn validate_tolerance(tolerance: f64) -> Result<f64> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(tolerance)
    } else {
        Err(invalid_input(
            "tolerance",
            &tolerance,
            &"must be finite and greater than zero",
        ))
    }
}

/// Spatial hash over a borrowed point slice
#[derive(Debug, Clone)]
pub struct ProximityGrid<'a> {
    points: &'a [Point],
    tolerance: f64,
    cells: HashMap<CellKey, Vec<usize>>,
}

impl<'a> ProximityGrid<'a> {
    /// Bucket `points` into cells of side `tolerance`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the tolerance is not finite and positive
    pub fn new(points: &'a [Point], tolerance: f64) -> Result<Self> {
        let tolerance = validate_tolerance(tolerance)?;

        let mut cells: HashMap<CellKey, Vec<usize>> = HashMap::new();
        for (index, point) in points.iter().enumerate() {
            cells
                .entry(cell_key(point.coordinates(), tolerance))
                .or_default()
                .push(index);
        }

        Ok(Self {
            points,
            tolerance,
            cells,
        })
    }

    /// Matching tolerance the grid was built with
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Number of occupied cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether some indexed point lies strictly within the tolerance of `target`
    pub fn has_point_near(&self, target: [f64; 2]) -> bool {
        let (row, col) = cell_key(target, self.tolerance);

        for d_row in -1..=1 {
            for d_col in -1..=1 {
                // Saturated keys only merge far-away cells, distances are still checked
                let key = (row.saturating_add(d_row), col.saturating_add(d_col));
                let Some(indices) = self.cells.get(&key) else {
                    continue;
                };

                let found = indices.iter().any(|&index| {
                    self.points
                        .get(index)
                        .is_some_and(|point| within(point, target, self.tolerance))
                });
                if found {
                    return true;
                }
            }
        }

        false
    }
}

/// Linear-scan reference for `ProximityGrid::has_point_near`
pub fn has_point_near_linear(points: &[Point], target: [f64; 2], tolerance: f64) -> bool {
    points.iter().any(|point| within(point, target, tolerance))
}

fn within(point: &Point, target: [f64; 2], tolerance: f64) -> bool {
    (point.x() - target[0]).hypot(point.y() - target[1]) < tolerance
}

// Float to int casts saturate, so extreme coordinates collapse onto edge cells
fn cell_key(coordinates: [f64; 2], cell_size: f64) -> CellKey {
    (
        (coordinates[0] / cell_size).floor() as i64,
        (coordinates[1] / cell_size).floor() as i64,
    )
}
