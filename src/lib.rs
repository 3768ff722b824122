//! Kolam point pattern generation with symmetry and complexity analysis
//!
//! Generators produce ordered point sequences (dot grids, circles, petals,
//! spirals, stars, mandalas and style presets). The analyzer detects
//! rotational and reflection symmetry about the centroid within a distance
//! tolerance, the scorer rates complexity from 0 to 10, and the classifier
//! maps the number of symmetries to a design category.

#![forbid(unsafe_code)]

/// Symmetry detection, complexity scoring and classification
pub mod analysis;
/// Canonical shape generators and style presets
pub mod generation;
/// Points, point sequences and proximity queries
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;

pub use io::error::{KolamError, Result};
