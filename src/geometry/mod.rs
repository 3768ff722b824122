//! Planar point primitives and proximity queries

/// Tolerance-bounded neighbor lookup via uniform grid hashing
pub mod index;
/// Finite points and ordered point sequences
pub mod point;

pub use index::ProximityGrid;
pub use point::{Point, PointSet};
