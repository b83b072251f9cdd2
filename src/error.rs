//! Error types for latticekit

use std::fmt;
use std::io;

/// Result type for latticekit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in latticekit operations
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// Invalid configuration input
    Parse(String),

    /// Invalid unit cell basis
    InvalidBasis(String),

    /// Invalid lattice repetitions
    InvalidRepetitions(String),

    /// Site export error
    Export(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::InvalidBasis(msg) => write!(f, "Invalid basis: {}", msg),
            Error::InvalidRepetitions(msg) => write!(f, "Invalid repetitions: {}", msg),
            Error::Export(msg) => write!(f, "Export error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Parse(error.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Export(error.to_string())
    }
}
