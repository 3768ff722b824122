//! Named style presets composed from the canonical generators
//!
//! Presets are fixed parameter recipes, not learned behavior. Random style
//! selection always goes through an explicit seed which is recorded in the
//! result, so any generated design can be replayed.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::generation::shapes::{mandala, spiral, symmetric_polygon};
use crate::geometry::point::{Point, PointSet};
use crate::io::configuration::{
    DEFAULT_SPIRAL_STEPS, MAX_STYLE_COMPLEXITY, MODERN_BASE_RADIUS, MODERN_BASE_SIDES,
    MODERN_RADIUS_STEP, SATELLITE_SPIRAL_COUNT, SATELLITE_SPIRAL_DISTANCE,
    SATELLITE_SPIRAL_RADIUS, SATELLITE_SPIRAL_TURNS,
};
use crate::io::error::{KolamError, Result, invalid_input};

/// Design style of a generated kolam
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Central mandala ringed by four spirals
    Traditional,
    /// Nested polygons with increasing vertex counts
    Modern,
    /// Traditional and modern layers superimposed
    Fusion,
}

impl Style {
    /// All styles in selection order
    pub const ALL: [Self; 3] = [Self::Traditional, Self::Modern, Self::Fusion];

    /// Lowercase style name as stored in design metadata
    pub const fn name(self) -> &'static str {
        match self {
            Self::Traditional => "traditional",
            Self::Modern => "modern",
            Self::Fusion => "fusion",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = KolamError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                invalid_input("style", &s, &"expected traditional, modern or fusion")
            })
    }
}

/// Pattern produced by a style preset together with its replay parameters
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPattern {
    /// Style that produced the points
    pub style: Style,
    /// Complexity the style was generated at
    pub complexity: u32,
    /// Seed used for random selection, if any
    pub seed: Option<u64>,
    /// Generated points in drawing order
    pub points: PointSet,
}

/// Generate a pattern in the given style
///
/// # Errors
///
/// Returns `InvalidInput` if `complexity` lies outside `1..=MAX_STYLE_COMPLEXITY`
/// or a generated coordinate overflows
pub fn generate(style: Style, center: &Point, complexity: u32) -> Result<PointSet> {
    require_complexity(complexity)?;

    let points = match style {
        Style::Traditional => traditional(center, complexity)?,
        Style::Modern => modern(center, complexity)?,
        Style::Fusion => fusion(center, complexity)?,
    };

    tracing::debug!(
        style = style.name(),
        complexity,
        points = points.len(),
        "Generated style preset"
    );
    Ok(points)
}

/// Pick a style and complexity from `seed`, then generate the pattern
///
/// The same seed always yields the same style, complexity and points.
///
/// # Errors
///
/// Returns `InvalidInput` if a generated coordinate overflows
pub fn generate_seeded(seed: u64, center: &Point) -> Result<GeneratedPattern> {
    let mut rng = StdRng::seed_from_u64(seed);
    let style = Style::ALL
        .get(rng.random_range(0..Style::ALL.len()))
        .copied()
        .unwrap_or(Style::Traditional);
    let complexity = rng.random_range(1..=MAX_STYLE_COMPLEXITY);

    Ok(GeneratedPattern {
        style,
        complexity,
        seed: Some(seed),
        points: generate(style, center, complexity)?,
    })
}

fn traditional(center: &Point, complexity: u32) -> Result<PointSet> {
    let mut pattern = mandala(center, complexity as usize)?;

    for i in 0..SATELLITE_SPIRAL_COUNT {
        let direction = i as f64 * FRAC_PI_2;
        let spiral_center = Point::polar(center, SATELLITE_SPIRAL_DISTANCE, direction)?;
        pattern.append_set(&spiral(
            &spiral_center,
            SATELLITE_SPIRAL_RADIUS,
            SATELLITE_SPIRAL_TURNS,
            DEFAULT_SPIRAL_STEPS,
        )?);
    }

    Ok(pattern)
}

fn modern(center: &Point, complexity: u32) -> Result<PointSet> {
    let mut pattern = PointSet::new();
    for level in 0..complexity as usize {
        let radius = (level as f64).mul_add(MODERN_RADIUS_STEP, MODERN_BASE_RADIUS);
        pattern.append_set(&symmetric_polygon(
            center,
            radius,
            MODERN_BASE_SIDES + level,
        )?);
    }
    Ok(pattern)
}

// Rounds the split up so odd complexities keep their last unit
fn fusion(center: &Point, complexity: u32) -> Result<PointSet> {
    let half = complexity.div_ceil(2);
    let mut pattern = traditional(center, half)?;
    pattern.append_set(&modern(center, half)?);
    Ok(pattern)
}

fn require_complexity(complexity: u32) -> Result<()> {
    if (1..=MAX_STYLE_COMPLEXITY).contains(&complexity) {
        Ok(())
    } else {
        Err(invalid_input(
            "complexity",
            &complexity,
            &format!("must be between 1 and {MAX_STYLE_COMPLEXITY}"),
        ))
    }
}
