//! Spelling correction utilities for Spelltrie.
//!
//! This module provides the edit-distance metric, the ranking rules that turn
//! distances into "did you mean" suggestions, and the loader that reads a
//! dictionary word list from disk.

pub mod corrector;
pub mod dictionary;
pub mod levenshtein;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use levenshtein::*;
