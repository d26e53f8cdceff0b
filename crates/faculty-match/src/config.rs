//! Matcher configuration supplied as data.
//!
//! Every knob the resolver depends on (honorifics, the diacritic fallback
//! table, thresholds, placeholder names and manual overrides) lives here so the
//! scripts around the resolver can ship it as a JSON file instead of
//! hard-coding it.

use std::collections::BTreeMap;

use faculty_model::ManualOverride;
use serde::{Deserialize, Serialize};

use crate::error::MatchError;
use crate::score::{DEFAULT_FUZZY_MIN_SIMILARITY, FUZZY_CONFIDENCE_CEILING};

/// Default acceptance threshold for a winning candidate.
pub const DEFAULT_THRESHOLD: f64 = 0.8;

/// Default number of runner-up candidates kept for audit.
pub const DEFAULT_MAX_ALTERNATIVES: usize = 5;

const DEFAULT_HONORIFICS: [&str; 5] = ["Dr.", "Prof.", "Mr.", "Ms.", "Mrs."];

/// Letters that carry no combining mark under NFD and need explicit folding.
const DEFAULT_FALLBACK: [(&str, &str); 10] = [
    ("ß", "ss"),
    ("ł", "l"),
    ("ø", "o"),
    ("æ", "ae"),
    ("œ", "oe"),
    ("đ", "d"),
    ("ð", "d"),
    ("þ", "th"),
    ("ı", "i"),
    ("ħ", "h"),
];

const DEFAULT_PLACEHOLDERS: [&str; 9] = [
    "workshop team",
    "faculty",
    "all faculty",
    "tba",
    "tbd",
    "to be announced",
    "staff",
    "organizers",
    "instructors",
];

/// Complete configuration for name normalization and resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatcherConfig {
    /// Minimum confidence for a winner (default: 0.8).
    pub threshold: f64,
    /// Runner-up candidates reported next to the winner (default: 5).
    pub max_alternatives: usize,
    /// Levenshtein similarity a fuzzy match must exceed (default: 0.8).
    pub fuzzy_min_similarity: f64,
    /// Title prefixes stripped from the start of a name.
    pub honorifics: Vec<String>,
    /// Single-character replacements applied after diacritic stripping.
    pub fallback_characters: BTreeMap<String, String>,
    /// Read "Last, First" as "First Last".
    pub reorder_comma_names: bool,
    /// Non-person mentions callers should skip.
    pub placeholders: Vec<String>,
    /// Manual corrections consulted before scoring.
    pub overrides: Vec<ManualOverride>,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_alternatives: DEFAULT_MAX_ALTERNATIVES,
            fuzzy_min_similarity: DEFAULT_FUZZY_MIN_SIMILARITY,
            honorifics: DEFAULT_HONORIFICS.iter().map(|h| (*h).to_string()).collect(),
            fallback_characters: DEFAULT_FALLBACK
                .iter()
                .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
                .collect(),
            reorder_comma_names: true,
            placeholders: DEFAULT_PLACEHOLDERS
                .iter()
                .map(|p| (*p).to_string())
                .collect(),
            overrides: Vec::new(),
        }
    }
}

impl MatcherConfig {
    /// Accepts only exact and last-name matches; fuzzy hits are reported as
    /// near-misses.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            threshold: 0.85,
            fuzzy_min_similarity: 0.82,
            ..Self::default()
        }
    }

    /// Lets weaker edit-distance matches through for exploratory runs.
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            threshold: 0.75,
            fuzzy_min_similarity: 0.75,
            max_alternatives: 10,
            ..Self::default()
        }
    }

    /// Replaces the acceptance threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Appends manual overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = ManualOverride>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    /// Checks numeric ranges and the fallback table shape.
    ///
    /// Override conflicts are checked when the override table is built.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MatchError::InvalidThreshold(self.threshold));
        }
        if !(0.0..FUZZY_CONFIDENCE_CEILING).contains(&self.fuzzy_min_similarity) {
            return Err(MatchError::InvalidFuzzySimilarity {
                value: self.fuzzy_min_similarity,
                ceiling: FUZZY_CONFIDENCE_CEILING,
            });
        }
        for key in self.fallback_characters.keys() {
            if key.chars().count() != 1 {
                return Err(MatchError::InvalidFallbackKey(key.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        MatcherConfig::default().validate().unwrap();
        MatcherConfig::strict().validate().unwrap();
        MatcherConfig::relaxed().validate().unwrap();
    }

    #[test]
    fn threshold_out_of_range_rejected() {
        let err = MatcherConfig::default()
            .with_threshold(1.5)
            .validate()
            .unwrap_err();
        assert_eq!(err, MatchError::InvalidThreshold(1.5));
        assert!(
            MatcherConfig::default()
                .with_threshold(f64::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn fuzzy_floor_must_stay_below_ceiling() {
        let config = MatcherConfig {
            fuzzy_min_similarity: FUZZY_CONFIDENCE_CEILING,
            ..MatcherConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(MatchError::InvalidFuzzySimilarity { .. })
        ));
    }

    #[test]
    fn multi_character_fallback_key_rejected() {
        let mut config = MatcherConfig::default();
        config
            .fallback_characters
            .insert("ss".to_string(), "s".to_string());
        assert_eq!(
            config.validate(),
            Err(MatchError::InvalidFallbackKey("ss".to_string()))
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: MatcherConfig = serde_json::from_str(
            r#"{
                "threshold": 0.9,
                "overrides": [{"normalizedKey": "merce montoliu", "facultyId": "montoliu-nerin-merce"}]
            }"#,
        )
        .unwrap();
        assert_eq!(config.threshold, 0.9);
        assert_eq!(config.max_alternatives, DEFAULT_MAX_ALTERNATIVES);
        assert_eq!(config.honorifics.len(), DEFAULT_HONORIFICS.len());
        assert_eq!(config.overrides[0].faculty_id, "montoliu-nerin-merce");
    }
}
