//! Error types for `minitrees`.

use thiserror::Error;

/// Result type alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by estimators, classifiers and data readers.
#[derive(Error, Debug)]
pub enum Error {
    /// The given data does not satisfy the preconditions
    /// of the requested operation
    /// (schema mismatch, numeric attribute given to a nominal-only
    /// learner, missing value on a split attribute, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A model cannot be fitted on the given training set,
    /// e.g., the set is empty.
    #[error("Unbuildable: {0}")]
    Unbuildable(String),

    /// A model was queried before it saw any training record.
    #[error("Model not fitted")]
    Unfit,

    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A model could not be written to or read from JSON.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A `polars` operation on a DataFrame failed.
    #[error("DataFrame error: {0}")]
    DataFrame(String),
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<polars::error::PolarsError> for Error {
    fn from(err: polars::error::PolarsError) -> Self {
        Error::DataFrame(err.to_string())
    }
}
