//! Error types and path context for pattern operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all pattern operations
#[derive(Debug)]
pub enum KolamError {
    /// A coordinate, generator parameter or analysis setting was rejected
    InvalidInput {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Point set exceeds the configured analysis ceiling
    InputTooLarge {
        /// Number of points supplied
        points: usize,
        /// Largest point count the analyzer accepts
        limit: usize,
    },

    /// Design file parsed as JSON but violates the design shape
    InvalidDesign {
        /// Description of what's wrong with the design
        reason: String,
    },

    /// Design file could not be parsed or serialized
    Json {
        /// Path of the design file
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for KolamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid input '{parameter}' = '{value}': {reason}")
            }
            Self::InputTooLarge { points, limit } => {
                write!(
                    f,
                    "Pattern too large to analyze: {points} points (limit {limit})"
                )
            }
            Self::InvalidDesign { reason } => {
                write!(f, "Invalid design: {reason}")
            }
            Self::Json { path, source } => {
                write!(f, "Malformed design '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for KolamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pattern results
pub type Result<T> = std::result::Result<T, KolamError>;

const UNKNOWN_PATH: &str = "<unknown>";

/// Attaches the file path to errors that were raised without one
pub trait WithPath<T> {
    /// Record `path` on path-carrying errors whose path is still unknown
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<KolamError>,
{
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only file-backed errors carry a path
            match &mut error {
                KolamError::Json { path: slot, .. } | KolamError::FileSystem { path: slot, .. }
                    if slot.as_os_str() == UNKNOWN_PATH =>
                {
                    *slot = path.into();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<serde_json::Error> for KolamError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for KolamError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid input error
pub fn invalid_input(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> KolamError {
    KolamError::InvalidInput {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> KolamError {
    KolamError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an invalid design error
pub fn invalid_design(reason: &impl ToString) -> KolamError {
    KolamError::InvalidDesign {
        reason: reason.to_string(),
    }
}
