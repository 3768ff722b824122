//! Finite planar points and ordered point sequences
//!
//! Points validate their coordinates at construction, so every `PointSet`
//! holds finite values only. Sequence order is drawing order; analysis treats
//! the set as an unordered collection of coordinates.

use crate::io::error::{KolamError, Result, invalid_input};
use serde::{Deserialize, Serialize};

/// A point on the design canvas with finite coordinates
///
/// Serialized as a two-element `[x, y]` array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Create a point from its coordinates
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if either coordinate is NaN or infinite
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() {
            return Err(invalid_input("x", &x, &"coordinate must be finite"));
        }
        if !y.is_finite() {
            return Err(invalid_input("y", &y, &"coordinate must be finite"));
        }
        Ok(Self { x, y })
    }

    /// Create a point at `radius` from `center` in direction `angle` (radians)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the resulting coordinates overflow
    pub fn polar(center: &Self, radius: f64, angle: f64) -> Result<Self> {
        let (sin, cos) = angle.sin_cos();
        Self::new(radius.mul_add(cos, center.x), radius.mul_add(sin, center.y))
    }

    /// Horizontal coordinate
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Coordinates as an `[x, y]` pair
    pub const fn coordinates(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Image of this point rotated by `angle` radians about `center`
    ///
    /// Returned as raw coordinates; the image is only used for matching.
    pub fn rotated_about(&self, center: &Self, angle: f64) -> [f64; 2] {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        [
            dx.mul_add(cos, -dy * sin) + center.x,
            dx.mul_add(sin, dy * cos) + center.y,
        ]
    }

    /// Mirror image across the vertical line `x = axis_x`
    pub fn reflected_across_vertical(&self, axis_x: f64) -> [f64; 2] {
        [2.0f64.mul_add(axis_x, -self.x), self.y]
    }
}

impl TryFrom<[f64; 2]> for Point {
    type Error = KolamError;

    fn try_from(value: [f64; 2]) -> Result<Self> {
        Self::new(value[0], value[1])
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        point.coordinates()
    }
}

/// Ordered sequence of points in drawing order
///
/// Serialized transparently as the JSON `pattern` array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Create an empty point set
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create an empty point set with room for `capacity` points
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Wrap an existing point sequence
    pub const fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Build a point set from raw coordinate pairs
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on the first non-finite coordinate
    pub fn from_coordinates(coordinates: &[[f64; 2]]) -> Result<Self> {
        coordinates
            .iter()
            .map(|&pair| Point::try_from(pair))
            .collect()
    }

    /// Number of points, counting duplicates
    pub const fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points
    pub const fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points in drawing order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Iterate over points in drawing order
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Append a single point
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Append every point of `other`, preserving its order
    pub fn append_set(&mut self, other: &Self) {
        self.points.extend_from_slice(&other.points);
    }

    /// Arithmetic mean of all points, `None` for an empty set
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }

        // Pre-scaled terms keep every partial sum within the coordinate range
        let count = self.points.len() as f64;
        let (x, y) = self
            .points
            .iter()
            .fold((0.0f64, 0.0f64), |(x, y), point| {
                (x + point.x / count, y + point.y / count)
            });

        Point::new(x, y).ok()
    }

    /// Distance of every point to `center`, in drawing order
    pub fn radial_distances(&self, center: &Point) -> Vec<f64> {
        self.points.iter().map(|p| p.distance(center)).collect()
    }

    /// Consume the set, returning the underlying points
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl IntoIterator for PointSet {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}
