//! Error types for the Sagitta library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`SagittaError`] enum. Note that the analytic functions themselves are
//! total: empty documents, zero sentences, and empty filtered token sets
//! produce defined fallback values, not errors. Errors are reserved for
//! collaborator failures (annotation, sentiment scoring), invalid arguments,
//! and I/O at the CLI boundary.
//!
//! # Examples
//!
//! ```
//! use sagitta::error::{Result, SagittaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SagittaError::invalid_argument("limit must be greater than zero"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {e}"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Sagitta operations.
#[derive(Error, Debug)]
pub enum SagittaError {
    /// I/O errors (reading input files, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Annotation provider failures (malformed token stream, invalid spans)
    #[error("Annotation error: {0}")]
    Annotation(String),

    /// Sentiment scorer failures
    #[error("Sentiment error: {0}")]
    Sentiment(String),

    /// Analysis-related errors
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Serialization errors (JSON output)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SagittaError {
    /// Create an annotation error.
    pub fn annotation<S: Into<String>>(message: S) -> Self {
        SagittaError::Annotation(message.into())
    }

    /// Create a sentiment error.
    pub fn sentiment<S: Into<String>>(message: S) -> Self {
        SagittaError::Sentiment(message.into())
    }

    /// Create an analysis error.
    pub fn analysis<S: Into<String>>(message: S) -> Self {
        SagittaError::Analysis(message.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        SagittaError::InvalidArgument(message.into())
    }
}

/// A specialized `Result` type for Sagitta operations.
pub type Result<T> = std::result::Result<T, SagittaError>;
