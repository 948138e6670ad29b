//! Error types for the relief rendering pipeline.

use thiserror::Error;

use crate::geo::{GridExtent, GridOffset};

/// Result type alias using ReliefError.
pub type ReliefResult<T> = Result<T, ReliefError>;

/// Primary error type for a render attempt.
///
/// Every variant aborts the current render; callers never receive a
/// partially written image.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// Degenerate height range, misordered ramp limits, mismatched buffers.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failure reported by the external elevation dataset.
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// Requested window does not fit inside the backing grid.
    #[error("Window {requested} exceeds grid bounds {bounds}")]
    Range { requested: String, bounds: String },
}

impl ReliefError {
    /// Create a Configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create a Range error for a window anchored at `offset`.
    pub fn range(offset: GridOffset, extent: GridExtent, bounds: GridExtent) -> Self {
        Self::Range {
            requested: format!("{} at {}", extent, offset),
            bounds: bounds.to_string(),
        }
    }

    /// Short machine-readable name of the error category.
    pub fn kind(&self) -> &'static str {
        match self {
            ReliefError::Configuration(_) => "ConfigurationError",
            ReliefError::Dataset(_) => "DatasetError",
            ReliefError::Range { .. } => "RangeError",
        }
    }
}

/// Errors from the dataset collaborator (open, variable lookup, window read).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to open dataset {path}: {reason}")]
    Open { path: String, reason: String },

    #[error("Variable not found: {0}")]
    VariableNotFound(String),

    #[error("Failed to read dataset window: {0}")]
    Read(String),
}

impl DatasetError {
    pub fn open(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Open {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(err: std::io::Error) -> Self {
        DatasetError::Read(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(ReliefError::configuration("x").kind(), "ConfigurationError");
        assert_eq!(
            ReliefError::from(DatasetError::VariableNotFound("z".into())).kind(),
            "DatasetError"
        );
        let err = ReliefError::range(
            GridOffset::new(10, 20),
            GridExtent::new(5, 5),
            GridExtent::new(12, 12),
        );
        assert_eq!(err.kind(), "RangeError");
        assert!(err.to_string().contains("5x5 at (10, 20)"));
    }
}
