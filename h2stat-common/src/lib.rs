use thiserror::Error;

pub mod config;

/// Error types for h2stat operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum H2StatError {
    /// A log line did not have the `<uint> <int> <uint>` shape. `line_number` is 1-based.
    #[error("Invalid row on line {line_number}")]
    MalformedRecord { line_number: usize },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for H2StatError {
    fn from(err: std::io::Error) -> Self {
        H2StatError::Io(err.to_string())
    }
}

/// Result type for h2stat operations
pub type Result<T> = std::result::Result<T, H2StatError>;
