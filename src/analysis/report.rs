//! Combined pattern analysis and its text rendering

use std::fmt;

use crate::analysis::classification::{Classification, classify};
use crate::analysis::complexity::{ComplexityScore, score};
use crate::analysis::symmetry::{SymmetryAnalyzer, SymmetryReport};
use crate::geometry::point::{Point, PointSet};
use crate::io::design::DesignAnalysis;
use crate::io::error::Result;

const PERCENT_PER_SYMMETRY: usize = 20;
const PERCENT_PER_POINT: usize = 2;
const PERCENT_PER_COMPLEXITY_UNIT: usize = 10;
const MAX_PERCENT: usize = 100;

/// Everything derived from one analysis of a point set
#[derive(Debug, Clone, PartialEq)]
pub struct PatternAnalysis {
    /// Number of points analyzed
    pub point_count: usize,
    /// Centroid, absent for an empty set
    pub center: Option<Point>,
    /// Mean distance of the points to the centroid
    pub average_radius: f64,
    /// Complexity score
    pub complexity: ComplexityScore,
    /// Symmetries found
    pub symmetries: SymmetryReport,
    /// Category derived from the symmetries
    pub classification: Classification,
}

impl PatternAnalysis {
    /// Analyze `points` with the given symmetry settings
    ///
    /// Empty input yields the degenerate analysis rather than an error.
    ///
    /// # Errors
    ///
    /// Propagates symmetry analysis failures (`InputTooLarge`, `Computation`)
    pub fn of(points: &PointSet, analyzer: &SymmetryAnalyzer) -> Result<Self> {
        let symmetries = analyzer.analyze(points)?;
        let center = points.centroid();
        let average_radius = center.map_or(0.0, |c| {
            let distances = points.radial_distances(&c);
            distances.iter().sum::<f64>() / distances.len() as f64
        });

        Ok(Self {
            point_count: points.len(),
            center,
            average_radius,
            complexity: score(points),
            classification: classify(&symmetries),
            symmetries,
        })
    }

    /// Geometric harmony, 20% per symmetry, capped at 100
    pub fn geometric_harmony(&self) -> usize {
        capped_percent(self.symmetries.len(), PERCENT_PER_SYMMETRY)
    }

    /// Point density, 2% per point, capped at 100
    pub fn pattern_density(&self) -> usize {
        capped_percent(self.point_count, PERCENT_PER_POINT)
    }

    /// Spatial balance, 10% per complexity unit, capped at 100
    pub fn spatial_balance(&self) -> usize {
        capped_percent(
            usize::from(self.complexity.value()),
            PERCENT_PER_COMPLEXITY_UNIT,
        )
    }

    /// Analysis block stored in design files
    pub fn design_analysis(&self) -> DesignAnalysis {
        DesignAnalysis {
            points: self.point_count,
            complexity: self.complexity,
            symmetries: self.symmetries.clone(),
        }
    }
}

fn capped_percent(units: usize, percent_per_unit: usize) -> usize {
    units.saturating_mul(percent_per_unit).min(MAX_PERCENT)
}

impl fmt::Display for PatternAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "KOLAM PATTERN ANALYSIS")?;
        writeln!(f, "{}", "=".repeat(30))?;
        writeln!(f)?;

        writeln!(f, "Basic Properties:")?;
        writeln!(f, "  Points: {}", self.point_count)?;
        if let Some(center) = &self.center {
            writeln!(f, "  Center: ({:.1}, {:.1})", center.x(), center.y())?;
        }
        writeln!(f, "  Avg Radius: {:.1}", self.average_radius)?;
        writeln!(f, "  Complexity: {}", self.complexity)?;
        writeln!(f)?;

        writeln!(f, "Symmetries Found:")?;
        if self.symmetries.is_empty() {
            writeln!(f, "  No clear symmetries")?;
        } else {
            for symmetry in &self.symmetries {
                writeln!(f, "  {symmetry}")?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Design Classification:")?;
        writeln!(f, "  Type: {}", self.classification)?;
        writeln!(f, "  Score: {}", self.classification.rating())?;
        writeln!(f)?;

        writeln!(f, "Mathematical Principles:")?;
        writeln!(f, "  Geometric harmony: {}%", self.geometric_harmony())?;
        writeln!(f, "  Pattern density: {}%", self.pattern_density())?;
        write!(f, "  Spatial balance: {}%", self.spatial_balance())
    }
}
