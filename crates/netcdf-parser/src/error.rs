//! Error types for NetCDF parsing operations.

use elevation_common::DatasetError;
use thiserror::Error;

/// Result type for NetCDF parser operations.
pub type NetCdfResult<T> = Result<T, NetCdfError>;

/// Error types for NetCDF parsing.
#[derive(Error, Debug)]
pub enum NetCdfError {
    /// File could not be opened or read by libnetcdf
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    /// Missing required variable
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl From<NetCdfError> for DatasetError {
    fn from(err: NetCdfError) -> Self {
        match err {
            NetCdfError::Io { path, reason } => DatasetError::open(path, reason),
            NetCdfError::MissingData(name) => DatasetError::VariableNotFound(name),
            NetCdfError::InvalidFormat(msg) => DatasetError::read(msg),
        }
    }
}
