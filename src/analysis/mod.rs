//! Symmetry detection, complexity scoring and classification of point patterns

/// Design category from the number of symmetries
pub mod classification;
/// Complexity score from point count and radial spread
pub mod complexity;
/// Combined analysis summary and text report
pub mod report;
/// Rotational and reflection symmetry detection
pub mod symmetry;

pub use classification::{Classification, classify};
pub use complexity::{ComplexityScore, score};
pub use report::PatternAnalysis;
pub use symmetry::{Symmetry, SymmetryAnalyzer, SymmetryReport, analyze};
