//! Helpers for raw presenter mentions.
//!
//! Schedules list several presenters in one cell ("Dag Ahrén & Petr Daněček")
//! and use placeholders like "Workshop Team" where no person is named.

use std::collections::BTreeSet;

use crate::config::MatcherConfig;
use crate::normalize::NameNormalizer;

const SEPARATORS: [char; 3] = ['&', ';', '/'];

/// Splits a mention naming several presenters into one string per person.
///
/// Separators are `&`, `;`, `/` and the standalone word "and". Parts are
/// whitespace-collapsed; empty parts are dropped.
pub fn split_presenters(raw: &str) -> Vec<String> {
    let mut presenters = Vec::new();
    for part in raw.split(SEPARATORS) {
        let mut current: Vec<&str> = Vec::new();
        for word in part.split_whitespace() {
            if word.eq_ignore_ascii_case("and") {
                flush(&mut current, &mut presenters);
            } else {
                current.push(word);
            }
        }
        flush(&mut current, &mut presenters);
    }
    presenters
}

fn flush(current: &mut Vec<&str>, presenters: &mut Vec<String>) {
    if !current.is_empty() {
        presenters.push(current.join(" "));
        current.clear();
    }
}

/// Recognizes non-person mentions so callers can skip them before resolving.
#[derive(Debug, Clone)]
pub struct PlaceholderFilter {
    normalizer: NameNormalizer,
    placeholders: BTreeSet<String>,
}

impl Default for PlaceholderFilter {
    fn default() -> Self {
        Self::from_config(&MatcherConfig::default())
    }
}

impl PlaceholderFilter {
    pub fn from_config(config: &MatcherConfig) -> Self {
        let normalizer = NameNormalizer::from_config(config);
        let placeholders = config
            .placeholders
            .iter()
            .map(|p| normalizer.normalize(p).into_string())
            .filter(|p| !p.is_empty())
            .collect();
        Self {
            normalizer,
            placeholders,
        }
    }

    pub fn is_placeholder(&self, raw: &str) -> bool {
        self.placeholders
            .contains(self.normalizer.normalize(raw).as_str())
    }
}
