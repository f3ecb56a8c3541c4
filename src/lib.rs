//! # Spelltrie
//!
//! Prefix autocomplete and approximate spelling correction over a static
//! dictionary.
//!
//! ## Features
//!
//! - Case-insensitive trie with deterministic, character-ordered enumeration
//! - Bounded prefix completion
//! - Levenshtein-based "did you mean" suggestions with a length-scaled threshold
//! - Line-oriented dictionary loading and a small command-line front end
//!
//! ```
//! use spelltrie::prelude::*;
//!
//! let trie: Trie = ["cat", "car", "cart", "dog"].into_iter().collect();
//! assert_eq!(trie.autocomplete("ca", 30), vec!["car", "cart", "cat"]);
//! assert_eq!(
//!     lookup(&trie, "dag", &Config::default()),
//!     Lookup::Corrections(vec!["dog".to_string()])
//! );
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;
pub mod spelling;
pub mod trie;

pub mod prelude {
    pub use crate::config::Config;
    pub use crate::error::{Result, SpelltrieError};
    pub use crate::lookup::{Lookup, lookup};
    pub use crate::spelling::{SpellCheckConfig, Suggestion, levenshtein_distance, load_trie};
    pub use crate::trie::Trie;
}
