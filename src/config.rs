//! Configuration for completion and spelling queries.

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpelltrieError};
use crate::spelling::corrector::SpellCheckConfig;
use crate::trie::DEFAULT_AUTOCOMPLETE_LIMIT;

/// Top-level configuration.
///
/// Every field has a default, so a configuration file only needs to name the
/// values it changes:
///
/// ```json
/// { "autocomplete_limit": 10, "spelling": { "max_suggestions": 3 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of completions returned for a prefix.
    pub autocomplete_limit: usize,

    /// Spelling suggestion rules.
    pub spelling: SpellCheckConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            autocomplete_limit: DEFAULT_AUTOCOMPLETE_LIMIT,
            spelling: SpellCheckConfig::default(),
        }
    }
}

impl Config {
    /// Load and validate a JSON configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration can drive queries.
    pub fn validate(&self) -> Result<()> {
        if self.autocomplete_limit == 0 {
            return Err(SpelltrieError::config(
                "autocomplete_limit must be greater than zero",
            ));
        }
        self.spelling.validate()
    }
}
