//! Nearest-word ranking for spelling correction.

use std::cmp::Ordering;

use log::trace;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpelltrieError};
use crate::spelling::levenshtein::levenshtein_distance_threshold;

/// Configuration for spelling suggestions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellCheckConfig {
    /// Maximum number of suggestions to return.
    pub max_suggestions: usize,
    /// Fraction of the input length tolerated as edit distance.
    pub threshold_ratio: f64,
    /// Lower bound of the edit-distance threshold.
    pub min_threshold: usize,
}

impl Default for SpellCheckConfig {
    fn default() -> Self {
        SpellCheckConfig {
            max_suggestions: 5,
            threshold_ratio: 0.4,
            min_threshold: 1,
        }
    }
}

impl SpellCheckConfig {
    /// Use a different suggestion cap, keeping the threshold rules.
    pub fn with_max_suggestions(mut self, max_suggestions: usize) -> Self {
        self.max_suggestions = max_suggestions;
        self
    }

    /// Check that the threshold rules are usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_suggestions == 0 {
            return Err(SpelltrieError::config(
                "max_suggestions must be greater than zero",
            ));
        }
        if !self.threshold_ratio.is_finite() || self.threshold_ratio < 0.0 {
            return Err(SpelltrieError::config(format!(
                "threshold_ratio must be a finite, non-negative number, got {}",
                self.threshold_ratio
            )));
        }
        Ok(())
    }

    /// Largest edit distance accepted for an input of `word_len` characters.
    ///
    /// `max(min_threshold, round(word_len * threshold_ratio))`, rounding half to
    /// even.
    pub fn threshold(&self, word_len: usize) -> usize {
        let scaled = (word_len as f64 * self.threshold_ratio).round_ties_even();
        // Saturating float-to-int cast.
        (scaled as usize).max(self.min_threshold)
    }
}

/// A spelling suggestion with its distance from the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested dictionary word.
    pub word: String,
    /// Edit distance from the original input.
    pub distance: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, distance: usize) -> Self {
        Suggestion { word, distance }
    }
}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closest first, ties broken alphabetically
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Rank `dictionary` words by closeness to `word`.
///
/// Returns every word whose distance is within the configured threshold, sorted
/// by `(distance, word)` and truncated to `max_suggestions`. When even the
/// closest word is farther than the threshold, or the dictionary is empty, the
/// result is empty.
pub fn rank_suggestions<S>(
    dictionary: &[S],
    word: &str,
    config: &SpellCheckConfig,
) -> Vec<Suggestion>
where
    S: AsRef<str> + Sync,
{
    if dictionary.is_empty() {
        return Vec::new();
    }

    let threshold = config.threshold(word.chars().count());

    let mut suggestions: Vec<Suggestion> = dictionary
        .par_iter()
        .filter_map(|candidate| {
            let candidate = candidate.as_ref();
            levenshtein_distance_threshold(word, candidate, threshold)
                .map(|distance| Suggestion::new(candidate.to_string(), distance))
        })
        .collect();

    suggestions.sort_unstable();
    suggestions.truncate(config.max_suggestions);

    trace!(
        "spell check {:?}: threshold {}, {} suggestion(s)",
        word,
        threshold,
        suggestions.len()
    );

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_threshold_defaults() {
        let config = SpellCheckConfig::default();
        assert_eq!(config.threshold(0), 1);
        assert_eq!(config.threshold(1), 1);
        assert_eq!(config.threshold(3), 1); // 1.2
        assert_eq!(config.threshold(4), 2); // 1.6
        assert_eq!(config.threshold(5), 2); // 2.0
        assert_eq!(config.threshold(6), 2); // 2.4
        assert_eq!(config.threshold(7), 3); // 2.8
        assert_eq!(config.threshold(10), 4);
    }

    #[test]
    fn test_threshold_rounds_half_to_even() {
        let config = SpellCheckConfig {
            threshold_ratio: 0.5,
            min_threshold: 0,
            ..Default::default()
        };
        assert_eq!(config.threshold(1), 0); // 0.5
        assert_eq!(config.threshold(3), 2); // 1.5
        assert_eq!(config.threshold(5), 2); // 2.5
    }

    #[test]
    fn test_validate() {
        assert!(SpellCheckConfig::default().validate().is_ok());

        let config = SpellCheckConfig {
            threshold_ratio: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SpellCheckConfig {
            threshold_ratio: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SpellCheckConfig::default().with_max_suggestions(0);
        assert!(matches!(
            config.validate(),
            Err(SpelltrieError::Config(_))
        ));
    }

    #[test]
    fn test_rank_suggestions_orders_by_distance_then_word() {
        let dictionary = words(&["cat", "car", "cart", "dog", "bat"]);
        let config = SpellCheckConfig::default();

        let suggestions = rank_suggestions(&dictionary, "cax", &config);
        let ranked: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(ranked, vec!["car", "cat"]);
        assert!(suggestions.iter().all(|s| s.distance == 1));
    }

    #[test]
    fn test_rank_suggestions_respects_threshold() {
        let dictionary = words(&["cat", "car", "cart", "dog"]);
        let config = SpellCheckConfig::default();

        let suggestions = rank_suggestions(&dictionary, "dag", &config);
        assert_eq!(suggestions, vec![Suggestion::new("dog".to_string(), 1)]);

        assert!(rank_suggestions(&dictionary, "xyz", &config).is_empty());
    }

    #[test]
    fn test_rank_suggestions_truncates() {
        let dictionary = words(&["aa", "ab", "ac", "ad", "ae", "af"]);
        let config = SpellCheckConfig::default().with_max_suggestions(3);

        let suggestions = rank_suggestions(&dictionary, "a", &config);
        let ranked: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(ranked, vec!["aa", "ab", "ac"]);
    }

    #[test]
    fn test_rank_suggestions_empty_inputs() {
        let empty: Vec<String> = Vec::new();
        let config = SpellCheckConfig::default();
        assert!(rank_suggestions(&empty, "anything", &config).is_empty());

        // Empty input: distance equals the word length, threshold is 1.
        let dictionary = words(&["a", "be", "c"]);
        let suggestions = rank_suggestions(&dictionary, "", &config);
        let ranked: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(ranked, vec!["a", "c"]);
    }

    #[test]
    fn test_suggestion_ordering() {
        let mut suggestions = vec![
            Suggestion::new("zeta".to_string(), 1),
            Suggestion::new("beta".to_string(), 2),
            Suggestion::new("alpha".to_string(), 1),
        ];
        suggestions.sort();
        let ranked: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(ranked, vec!["alpha", "zeta", "beta"]);
    }
}
