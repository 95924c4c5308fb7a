//! Error types for coordinate validation, parameter checks and catalog I/O

use std::fmt;
use std::path::PathBuf;

/// Which coordinate array a validation failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The latitude array
    Latitude,
    /// The longitude array
    Longitude,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => f.write_str("latitude"),
            Self::Longitude => f.write_str("longitude"),
        }
    }
}

/// Malformed or physically impossible coordinate input
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// One or both coordinate arrays are empty
    EmptyInput {
        /// Length of the latitude array
        latitudes: usize,
        /// Length of the longitude array
        longitudes: usize,
    },

    /// Latitude and longitude arrays differ in length
    LengthMismatch {
        /// Length of the latitude array
        latitudes: usize,
        /// Length of the longitude array
        longitudes: usize,
    },

    /// A coordinate is NaN or infinite
    NonFinite {
        /// Array containing the value
        axis: Axis,
        /// Position of the value
        index: usize,
    },

    /// A latitude lies outside [-90, 90] or a longitude outside [-180, 180]
    OutOfRange {
        /// Array containing the value
        axis: Axis,
        /// Position of the value
        index: usize,
        /// The offending value in degrees
        value: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput {
                latitudes,
                longitudes,
            } => write!(
                f,
                "Coordinate arrays cannot be empty ({latitudes} latitudes, {longitudes} longitudes)"
            ),
            Self::LengthMismatch {
                latitudes,
                longitudes,
            } => write!(
                f,
                "Latitude and longitude arrays must have same length ({latitudes} vs {longitudes})"
            ),
            Self::NonFinite { axis, index } => {
                write!(f, "Non-finite {axis} value at index {index}")
            }
            Self::OutOfRange { axis, index, value } => {
                let limit = match axis {
                    Axis::Latitude => 90,
                    Axis::Longitude => 180,
                };
                write!(
                    f,
                    "{axis} {value} at index {index} is outside [-{limit}, {limit}]"
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Main error type for all estimation and catalog operations
#[derive(Debug)]
pub enum AnalysisError {
    /// Input coordinates failed validation
    Validation(ValidationError),

    /// Estimation parameters are inconsistent
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation could not produce a result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Earthquake catalog file is not usable
    CatalogFormat {
        /// Path to the catalog file
        path: PathBuf,
        /// One-based line number, when the problem is tied to a line
        line: Option<usize>,
        /// Description of the problem
        reason: String,
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

    /// Result could not be serialized to JSON
    Serialization {
        /// Path where the output was being written
        path: PathBuf,
        /// Underlying serializer error
        source: serde_json::Error,
    },
}

impl AnalysisError {
    /// Whether this error came from coordinate validation
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Whether this error came from inconsistent parameters
    pub const fn is_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(inner) => write!(f, "Invalid coordinates: {inner}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::CatalogFormat { path, line, reason } => match line {
                Some(line) => write!(
                    f,
                    "Malformed catalog '{}' at line {line}: {reason}",
                    path.display()
                ),
                None => write!(f, "Malformed catalog '{}': {reason}", path.display()),
            },
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
            Self::Serialization { path, source } => {
                write!(f, "Failed to serialize '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(inner) => Some(inner),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ValidationError> for AnalysisError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<std::io::Error> for AnalysisError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for estimation results
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AnalysisError {
    AnalysisError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AnalysisError {
    AnalysisError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to a raw I/O error
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> AnalysisError {
    AnalysisError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
