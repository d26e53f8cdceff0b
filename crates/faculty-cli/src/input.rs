//! Loading resolver inputs from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use faculty_match::MatcherConfig;
use faculty_model::{FacultyIdentity, ManualOverride, Registry};

/// Roster files come either as a bare array or wrapped in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterFile {
    List(Vec<FacultyIdentity>),
    Wrapped { faculty: Vec<FacultyIdentity> },
}

impl RosterFile {
    fn into_entries(self) -> Vec<FacultyIdentity> {
        match self {
            Self::List(entries) | Self::Wrapped { faculty: entries } => entries,
        }
    }
}

pub fn load_registry(path: &Path) -> Result<Registry> {
    let file: RosterFile = read_json(path)?;
    Registry::new(file.into_entries())
        .with_context(|| format!("invalid roster {}", path.display()))
}

/// Reads presenter mentions.
///
/// A `.json` file holds an array of strings; anything else is read as one
/// mention per line. Blank lines are dropped.
pub fn load_mentions(path: &Path) -> Result<Vec<String>> {
    if has_json_extension(path) {
        return read_json(path);
    }
    let text = read_text(path)?;
    Ok(parse_mention_lines(&text))
}

pub fn parse_mention_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

pub fn load_config(path: &Path) -> Result<MatcherConfig> {
    read_json(path)
}

pub fn load_overrides(path: &Path) -> Result<Vec<ManualOverride>> {
    read_json(path)
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = read_text(path)?;
    serde_json::from_str(&text).with_context(|| format!("parse {}", path.display()))
}
