//! Canonical faculty identities and the roster that holds them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A canonical faculty record as maintained in the roster data file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyIdentity {
    /// Stable slug, e.g. `montoliu-nerin-merce`.
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl FacultyIdentity {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Read-only roster of faculty identities.
///
/// Entries keep the order they were supplied in; ids are unique and non-blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FacultyIdentity>", into = "Vec<FacultyIdentity>")]
pub struct Registry {
    entries: Vec<FacultyIdentity>,
    index: BTreeMap<String, usize>,
}

impl Registry {
    /// Builds a registry, rejecting blank or duplicate ids.
    pub fn new(entries: Vec<FacultyIdentity>) -> Result<Self> {
        let mut index = BTreeMap::new();
        for (position, entry) in entries.iter().enumerate() {
            if entry.id.trim().is_empty() {
                return Err(ModelError::EmptyFacultyId {
                    first_name: entry.first_name.clone(),
                    last_name: entry.last_name.clone(),
                });
            }
            if index.insert(entry.id.clone(), position).is_some() {
                return Err(ModelError::DuplicateFacultyId(entry.id.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    pub fn get(&self, id: &str) -> Option<&FacultyIdentity> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FacultyIdentity> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[FacultyIdentity] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TryFrom<Vec<FacultyIdentity>> for Registry {
    type Error = ModelError;

    fn try_from(entries: Vec<FacultyIdentity>) -> Result<Self> {
        Self::new(entries)
    }
}

impl From<Registry> for Vec<FacultyIdentity> {
    fn from(registry: Registry) -> Self {
        registry.entries
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a FacultyIdentity;
    type IntoIter = std::slice::Iter<'a, FacultyIdentity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
