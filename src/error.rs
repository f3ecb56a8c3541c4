//! Error types for the Spelltrie library.
//!
//! The trie itself never fails: every query over it is total. Errors only come
//! from the layers around it, such as reading a dictionary file, parsing a
//! configuration or validating command-line input. All of them are represented
//! by the [`SpelltrieError`] enum.
//!
//! # Examples
//!
//! ```
//! use spelltrie::error::{Result, SpelltrieError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpelltrieError::invalid_argument("limit must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Spelltrie operations.
#[derive(Error, Debug)]
pub enum SpelltrieError {
    /// I/O errors (reading dictionaries, configuration files, stdin)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary source errors (missing or unusable word list)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SpelltrieError.
pub type Result<T> = std::result::Result<T, SpelltrieError>;

impl SpelltrieError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        SpelltrieError::Dictionary(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpelltrieError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpelltrieError::InvalidArgument(msg.into())
    }
}
