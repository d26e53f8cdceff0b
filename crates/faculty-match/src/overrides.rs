//! Manual override table.
//!
//! Overrides correct known mis-normalizations without touching the general
//! algorithm. Each key is indexed twice: lower-cased as written, and in its
//! normalized form, so both a scraped spelling and its canonical rendering
//! hit the same entry.

use std::collections::BTreeMap;

use faculty_model::{ManualOverride, Registry};
use tracing::debug;

use crate::error::MatchError;
use crate::normalize::NameNormalizer;

#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: Vec<ManualOverride>,
    /// Lookup key -> index into `entries`.
    lookup: BTreeMap<String, usize>,
}

impl OverrideTable {
    /// Builds a table using the default normalizer.
    pub fn new(overrides: Vec<ManualOverride>) -> Result<Self, MatchError> {
        Self::with_normalizer(overrides, &NameNormalizer::default())
    }

    /// Builds a table, rejecting blank keys and keys that collide on
    /// different faculty ids.
    pub fn with_normalizer(
        overrides: Vec<ManualOverride>,
        normalizer: &NameNormalizer,
    ) -> Result<Self, MatchError> {
        let mut lookup: BTreeMap<String, usize> = BTreeMap::new();
        for (position, entry) in overrides.iter().enumerate() {
            let literal = lookup_key(&entry.normalized_key);
            if literal.is_empty() {
                return Err(MatchError::EmptyOverrideKey {
                    faculty_id: entry.faculty_id.clone(),
                });
            }
            let normalized = normalizer.normalize(&entry.normalized_key).into_string();
            for key in [literal, normalized] {
                if key.is_empty() {
                    continue;
                }
                match lookup.get(&key) {
                    Some(&existing) if overrides[existing].faculty_id != entry.faculty_id => {
                        return Err(MatchError::ConflictingOverride {
                            key,
                            existing: overrides[existing].faculty_id.clone(),
                            conflicting: entry.faculty_id.clone(),
                        });
                    }
                    Some(_) => {
                        debug!(key = %key, faculty_id = %entry.faculty_id, "duplicate override key");
                    }
                    None => {
                        lookup.insert(key, position);
                    }
                }
            }
        }
        Ok(Self {
            entries: overrides,
            lookup,
        })
    }

    /// Target faculty id for `key`, compared lower-cased and trimmed.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.lookup
            .get(&lookup_key(key))
            .map(|&position| self.entries[position].faculty_id.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ManualOverride> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overrides pointing at ids missing from `registry`.
    pub fn dangling_targets<'a>(&'a self, registry: &Registry) -> Vec<&'a ManualOverride> {
        self.iter()
            .filter(|entry| !registry.contains(&entry.faculty_id))
            .collect()
    }
}

fn lookup_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}
