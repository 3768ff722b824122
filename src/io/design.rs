//! Persisted design files
//!
//! A design stores the ordered pattern, its stroke color and a timestamp,
//! plus an optional analysis block and optional generation metadata.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::analysis::complexity::ComplexityScore;
use crate::analysis::report::PatternAnalysis;
use crate::analysis::symmetry::{SymmetryAnalyzer, SymmetryReport};
use crate::generation::presets::{GeneratedPattern, Style};
use crate::geometry::point::PointSet;
use crate::io::configuration::DEFAULT_COLOR;
use crate::io::error::{KolamError, Result, WithPath, invalid_design, invalid_input};

/// Stroke color in `#RRGGBB` form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color(String);

impl Color {
    /// Parse and validate a `#RRGGBB` color
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` unless the value is `#` followed by six hex digits
    pub fn parse(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or_default();
        if digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(Self(value.to_string()))
        } else {
            Err(invalid_input("color", &value, &"expected #RRGGBB"))
        }
    }

    /// Color string as stored
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl TryFrom<String> for Color {
    type Error = KolamError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Analysis block of a design file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignAnalysis {
    /// Number of points analyzed
    pub points: usize,
    /// Complexity score
    pub complexity: ComplexityScore,
    /// Symmetry labels such as `"4-fold rotation"` or `"Reflection"`
    pub symmetries: SymmetryReport,
}

/// Generation metadata of a design file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignMetadata {
    /// Number of points generated
    pub points: usize,
    /// Style preset, if one was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Style>,
    /// Preset complexity, if one was used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<u32>,
    /// Seed of a random style selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl From<&GeneratedPattern> for DesignMetadata {
    fn from(generated: &GeneratedPattern) -> Self {
        Self {
            points: generated.points.len(),
            style: Some(generated.style),
            complexity: Some(generated.complexity),
            seed: generated.seed,
        }
    }
}

/// A saved kolam design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignFile {
    /// Points in drawing order
    pub pattern: PointSet,
    /// Stroke color
    #[serde(default)]
    pub color: Color,
    /// ISO-8601 creation time
    #[serde(default)]
    pub timestamp: String,
    /// Analysis recorded when the design was saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<DesignAnalysis>,
    /// Parameters of the generator that produced the pattern
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DesignMetadata>,
}

impl DesignFile {
    /// New design stamped with the current local time
    pub fn new(pattern: PointSet, color: Color) -> Self {
        Self {
            pattern,
            color,
            timestamp: current_timestamp(),
            analysis: None,
            metadata: None,
        }
    }

    /// Attach generation metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: DesignMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Analyze the pattern and record the analysis block
    ///
    /// # Errors
    ///
    /// Propagates symmetry analysis failures
    pub fn analyzed(mut self, analyzer: &SymmetryAnalyzer) -> Result<Self> {
        let analysis = PatternAnalysis::of(&self.pattern, analyzer)?;
        self.analysis = Some(analysis.design_analysis());
        Ok(self)
    }

    /// Append points to the pattern, dropping any stale analysis
    pub fn append(&mut self, points: &PointSet) {
        self.pattern.append_set(points);
        self.analysis = None;
    }

    /// Parse a design from JSON text
    ///
    /// # Errors
    ///
    /// Returns `Json` for malformed JSON or `InvalidDesign` when the recorded
    /// analysis disagrees with the pattern length
    pub fn from_json(text: &str) -> Result<Self> {
        let design: Self = serde_json::from_str(text)?;
        design.validate()?;
        Ok(design)
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `Json` if serialization fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a design file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, otherwise the errors
    /// of `from_json` with the path attached
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| KolamError::FileSystem {
            path: path.to_path_buf(),
            operation: "read design",
            source,
        })?;
        Self::from_json(&text).with_path(path)
    }

    /// Write the design as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be written
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_json().with_path(path)?;
        std::fs::write(path, text).map_err(|source| KolamError::FileSystem {
            path: path.to_path_buf(),
            operation: "write design",
            source,
        })
    }

    fn validate(&self) -> Result<()> {
        let stale = self
            .analysis
            .as_ref()
            .filter(|analysis| analysis.points != self.pattern.len());
        if let Some(analysis) = stale {
            return Err(invalid_design(&format!(
                "analysis covers {} points but the pattern has {}",
                analysis.points,
                self.pattern.len()
            )));
        }
        Ok(())
    }
}

/// Local time in ISO-8601 with microseconds and no offset
pub fn current_timestamp() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}
