//! Error types for the Twosense library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`TwosenseError`] enum. The first four variants are the domain failures a
//! caller is expected to handle (bad corpus, missing model, bad input,
//! degenerate training data); the rest wrap lower-level failures.
//!
//! # Examples
//!
//! ```
//! use twosense::error::{Result, TwosenseError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TwosenseError::input("sentence list is missing"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Twosense operations.
#[derive(Error, Debug)]
pub enum TwosenseError {
    /// A training corpus or word configuration is malformed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A model artifact does not exist where it is expected.
    #[error(
        "Model file not found for '{word}' at {}. Please run the training command to generate models.",
        path.display()
    )]
    NotFound { word: String, path: PathBuf },

    /// Caller-supplied input was rejected before any work was done.
    #[error("Input error: {0}")]
    Input(String),

    /// Training data cannot produce a usable model.
    #[error("Data error: {0}")]
    Data(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Binary encoding/decoding of model artifacts
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid cue or tokenizer pattern
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

/// Result type alias for operations that may fail with TwosenseError.
pub type Result<T> = std::result::Result<T, TwosenseError>;

impl TwosenseError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        TwosenseError::Configuration(msg.into())
    }

    /// Create a new model-not-found error.
    pub fn not_found<S: Into<String>, P: Into<PathBuf>>(word: S, path: P) -> Self {
        TwosenseError::NotFound {
            word: word.into(),
            path: path.into(),
        }
    }

    /// Create a new input error.
    pub fn input<S: Into<String>>(msg: S) -> Self {
        TwosenseError::Input(msg.into())
    }

    /// Create a new data error.
    pub fn data<S: Into<String>>(msg: S) -> Self {
        TwosenseError::Data(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        TwosenseError::Serialization(msg.into())
    }
}

impl From<bincode::Error> for TwosenseError {
    fn from(err: bincode::Error) -> Self {
        TwosenseError::Serialization(err.to_string())
    }
}
