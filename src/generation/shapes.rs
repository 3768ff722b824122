//! Canonical kolam point generators
//!
//! Every generator is a pure function of its parameters. Degenerate
//! parameters are rejected with `InvalidInput` rather than producing an empty
//! set, and generated coordinates are validated like any other point.

use std::f64::consts::{PI, TAU};

use crate::geometry::point::{Point, PointSet};
use crate::io::configuration::{
    DEFAULT_SPIRAL_STEPS, MANDALA_BASE_ORDER, MANDALA_ORDER_STEP, MANDALA_RING_SPACING,
    MAX_GENERATED_POINTS, MAX_GRID_DIMENSION, PETAL_SAMPLES,
};
use crate::io::error::{Result, invalid_input};

/// Design constants of a mandala
#[derive(Debug, Clone, PartialEq)]
pub struct MandalaConfig {
    /// Radius added per layer
    pub ring_spacing: f64,
    /// Symmetry order before the first layer
    pub base_order: usize,
    /// Symmetry order added per layer
    pub order_step: usize,
}

impl Default for MandalaConfig {
    fn default() -> Self {
        Self {
            ring_spacing: MANDALA_RING_SPACING,
            base_order: MANDALA_BASE_ORDER,
            order_step: MANDALA_ORDER_STEP,
        }
    }
}

impl MandalaConfig {
    /// Radius and symmetry order of a layer (1-based)
    pub fn layer(&self, layer: usize) -> (f64, usize) {
        (
            layer as f64 * self.ring_spacing,
            self.base_order
                .saturating_add(layer.saturating_mul(self.order_step)),
        )
    }
}

/// Rectangular dot grid, row-major, at `(j * spacing, i * spacing)`
///
/// # Errors
///
/// Returns `InvalidInput` if `rows` or `cols` is zero or exceeds
/// `MAX_GRID_DIMENSION`, or if `spacing` is not finite and positive
pub fn dot_grid(rows: usize, cols: usize, spacing: f64) -> Result<PointSet> {
    require_dimension("rows", rows)?;
    require_dimension("cols", cols)?;
    require_positive("spacing", spacing)?;
    require_point_budget("rows * cols", rows.saturating_mul(cols))?;

    let mut dots = PointSet::with_capacity(rows * cols);
    for i in 0..rows {
        for j in 0..cols {
            dots.push(Point::new(j as f64 * spacing, i as f64 * spacing)?);
        }
    }
    Ok(dots)
}

/// Points evenly spaced on a circle, the first at angle zero
///
/// # Errors
///
/// Returns `InvalidInput` if `radius` is not positive or `n_points` is zero
pub fn circle(center: &Point, radius: f64, n_points: usize) -> Result<PointSet> {
    require_positive("radius", radius)?;
    require_count("n_points", n_points, 1)?;
    require_point_budget("n_points", n_points)?;

    (0..n_points)
        .map(|k| Point::polar(center, radius, TAU * k as f64 / n_points as f64))
        .collect()
}

/// Regular polygon vertices, equivalent to `circle` with `order` points
///
/// # Errors
///
/// Returns `InvalidInput` if `radius` is not positive or `order` is below 3
pub fn symmetric_polygon(center: &Point, radius: f64, order: usize) -> Result<PointSet> {
    require_count("order", order, 3)?;
    circle(center, radius, order)
}

/// Flower petals traced outward and back along `n_petals` directions
///
/// Each petal samples `r = radius * sin(t)` at `PETAL_SAMPLES` values of `t`
/// evenly spaced over `[0, π]`, endpoints included.
///
/// # Errors
///
/// Returns `InvalidInput` if `radius` is not positive or `n_petals` is zero
pub fn petal(center: &Point, radius: f64, n_petals: usize) -> Result<PointSet> {
    require_positive("radius", radius)?;
    require_count("n_petals", n_petals, 1)?;
    require_point_budget("n_petals", n_petals.saturating_mul(PETAL_SAMPLES))?;

    let last_sample = (PETAL_SAMPLES - 1) as f64;
    let mut pattern = PointSet::with_capacity(n_petals * PETAL_SAMPLES);
    for i in 0..n_petals {
        let direction = TAU * i as f64 / n_petals as f64;
        for s in 0..PETAL_SAMPLES {
            let t = PI * s as f64 / last_sample;
            pattern.push(Point::polar(center, radius * t.sin(), direction)?);
        }
    }
    Ok(pattern)
}

/// Archimedean spiral starting at the center
///
/// Sample `i` lies at angle `turns * 2π * i / steps` and radius
/// `max_radius * i / steps`, so the outer radius is approached but not reached.
///
/// # Errors
///
/// Returns `InvalidInput` if `max_radius` or `turns` is not positive or
/// `steps` is zero
pub fn spiral(center: &Point, max_radius: f64, turns: f64, steps: usize) -> Result<PointSet> {
    require_positive("max_radius", max_radius)?;
    require_positive("turns", turns)?;
    require_count("steps", steps, 1)?;
    require_point_budget("steps", steps)?;

    (0..steps)
        .map(|i| {
            let fraction = i as f64 / steps as f64;
            Point::polar(center, max_radius * fraction, turns * TAU * fraction)
        })
        .collect()
}

/// Spiral with `DEFAULT_SPIRAL_STEPS` samples
///
/// # Errors
///
/// Same conditions as `spiral`
pub fn default_spiral(center: &Point, max_radius: f64, turns: f64) -> Result<PointSet> {
    spiral(center, max_radius, turns, DEFAULT_SPIRAL_STEPS)
}

/// Star outline alternating outer and inner vertices
///
/// # Errors
///
/// Returns `InvalidInput` if either radius is not positive or `n_points`
/// is below 2
pub fn star(
    center: &Point,
    outer_radius: f64,
    inner_radius: f64,
    n_points: usize,
) -> Result<PointSet> {
    require_positive("outer_radius", outer_radius)?;
    require_positive("inner_radius", inner_radius)?;
    require_count("n_points", n_points, 2)?;
    require_point_budget("n_points", n_points.saturating_mul(2))?;

    (0..n_points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 {
                outer_radius
            } else {
                inner_radius
            };
            Point::polar(center, radius, PI * i as f64 / n_points as f64)
        })
        .collect()
}

/// Concentric symmetric layers with the default design constants
///
/// # Errors
///
/// Same conditions as `mandala_with`
pub fn mandala(center: &Point, layers: usize) -> Result<PointSet> {
    mandala_with(center, layers, &MandalaConfig::default())
}

/// Concentric symmetric polygons, innermost first, followed by the center
///
/// # Errors
///
/// Returns `InvalidInput` if `layers` is zero, `ring_spacing` is not positive,
/// a layer's order falls below 3, or the layers exceed the point budget
pub fn mandala_with(center: &Point, layers: usize, config: &MandalaConfig) -> Result<PointSet> {
    require_count("layers", layers, 1)?;
    require_positive("ring_spacing", config.ring_spacing)?;
    // Orders never decrease, so every layer adds at least the first layer's points
    require_count("order", config.layer(1).1, 3)?;
    require_point_budget("layers", layers.saturating_mul(3))?;

    let total = (1..=layers)
        .try_fold(1usize, |acc, layer| {
            let total = acc.saturating_add(config.layer(layer).1);
            (total <= MAX_GENERATED_POINTS).then_some(total)
        })
        .ok_or_else(|| {
            invalid_input(
                "layers",
                &layers,
                &format!("would generate more than {MAX_GENERATED_POINTS} points"),
            )
        })?;

    let mut pattern = PointSet::with_capacity(total);
    for layer in 1..=layers {
        let (radius, order) = config.layer(layer);
        pattern.append_set(&symmetric_polygon(center, radius, order)?);
    }
    pattern.push(*center);

    tracing::debug!(layers, points = pattern.len(), "Generated mandala");
    Ok(pattern)
}

fn require_positive(parameter: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid_input(
            parameter,
            &value,
            &"must be finite and greater than zero",
        ))
    }
}

fn require_count(parameter: &'static str, value: usize, minimum: usize) -> Result<()> {
    if value >= minimum {
        Ok(())
    } else {
        Err(invalid_input(
            parameter,
            &value,
            &format!("must be at least {minimum}"),
        ))
    }
}

fn require_dimension(parameter: &'static str, value: usize) -> Result<()> {
    require_count(parameter, value, 1)?;
    if value > MAX_GRID_DIMENSION {
        return Err(invalid_input(
            parameter,
            &value,
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

fn require_point_budget(parameter: &'static str, points: usize) -> Result<()> {
    if points > MAX_GENERATED_POINTS {
        return Err(invalid_input(
            parameter,
            &points,
            &format!("would generate more than {MAX_GENERATED_POINTS} points"),
        ));
    }
    Ok(())
}
