//! Alternate renderings of a name.
//!
//! The set feeds override lookups and legacy exact-string comparisons. Order
//! carries no meaning; a `BTreeSet` keeps iteration deterministic.

use std::collections::BTreeSet;

use crate::config::MatcherConfig;
use crate::normalize::NameNormalizer;

#[derive(Debug, Clone, Default)]
pub struct VariantGenerator {
    normalizer: NameNormalizer,
}

impl VariantGenerator {
    pub fn new(normalizer: NameNormalizer) -> Self {
        Self { normalizer }
    }

    pub fn from_config(config: &MatcherConfig) -> Self {
        Self::new(NameNormalizer::from_config(config))
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }

    /// Every rendering of `name`, including the trimmed input and its
    /// normalized form. Empty renderings are dropped.
    pub fn variants(&self, name: &str) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        insert(&mut out, name.trim().to_string());

        let canonical = self.normalizer.normalize(name);
        let tokens: Vec<&str> = canonical.tokens().collect();
        insert(&mut out, tokens.join(" "));
        insert(&mut out, tokens.join("-"));

        let stripped = self.normalizer.strip_diacritics(name);
        let words: Vec<&str> = stripped.split_whitespace().collect();
        insert(&mut out, words.join(" "));

        if let [first, rest @ ..] = tokens.as_slice()
            && !rest.is_empty()
        {
            // Compound surname: "merce montoliu-nerin".
            insert(&mut out, format!("{first} {}", rest.join("-")));
            if let Some(initial) = first.chars().next() {
                insert(&mut out, format!("{initial}. {}", rest.join(" ")));
            }
        }

        let words: Vec<&str> = words
            .into_iter()
            .skip_while(|word| self.normalizer.is_honorific(word))
            .collect();
        if let [first, rest @ ..] = words.as_slice()
            && !rest.is_empty()
            && let Some(initial) = first.chars().next()
        {
            let initial: String = initial.to_uppercase().collect();
            insert(&mut out, format!("{initial}. {}", rest.join(" ")));
        }

        out
    }
}

fn insert(out: &mut BTreeSet<String>, variant: String) {
    let trimmed = variant.trim();
    if trimmed.is_empty() {
        return;
    }
    if trimmed.len() == variant.len() {
        out.insert(variant);
    } else {
        out.insert(trimmed.to_string());
    }
}

/// Variants under the default configuration.
pub fn variants(name: &str) -> BTreeSet<String> {
    VariantGenerator::default().variants(name)
}
