//! Qualitative design category from the number of symmetries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::symmetry::SymmetryReport;

/// Design category of a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Two or more symmetries
    Traditional,
    /// Exactly one symmetry
    SemiTraditional,
    /// No symmetry
    ModernAbstract,
}

impl Classification {
    /// Category for a given number of symmetries
    pub const fn from_symmetry_count(count: usize) -> Self {
        match count {
            0 => Self::ModernAbstract,
            1 => Self::SemiTraditional,
            _ => Self::Traditional,
        }
    }

    /// Human-readable category name
    pub const fn label(self) -> &'static str {
        match self {
            Self::Traditional => "Traditional Kolam",
            Self::SemiTraditional => "Semi-Traditional",
            Self::ModernAbstract => "Modern/Abstract",
        }
    }

    /// Qualitative rating shown next to the category
    pub const fn rating(self) -> &'static str {
        match self {
            Self::Traditional => "Excellent",
            Self::SemiTraditional => "Good",
            Self::ModernAbstract => "Creative",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a symmetry report
pub const fn classify(report: &SymmetryReport) -> Classification {
    Classification::from_symmetry_count(report.len())
}
