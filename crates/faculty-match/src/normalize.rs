//! Name normalization.
//!
//! Turns a raw presenter or roster name into a [`CanonicalName`]: lower-cased,
//! diacritic-free, honorific-free, with hyphens and whitespace runs collapsed
//! to single spaces.
//!
//! Transformations applied, in order:
//! 1. Unicode NFD decomposition, dropping combining marks
//! 2. Lower-casing
//! 3. Fallback table for letters with no decomposition (ß, ł, ø, ...)
//! 4. Hyphen and dash variants to spaces, soft hyphens removed
//! 5. Whitespace collapse and leading honorific removal
//! 6. "Last, First" reordering (single comma, both sides non-empty), followed
//!    by another pass of honorific removal

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::config::MatcherConfig;

/// Normalized token sequence used for all comparisons.
///
/// Tokens are separated by exactly one ASCII space; the empty name has no
/// tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalName(String);

impl CanonicalName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn tokens(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.0.split(' ').filter(|token| !token.is_empty())
    }

    pub fn token_count(&self) -> usize {
        self.tokens().count()
    }

    pub fn first_token(&self) -> Option<&str> {
        self.tokens().next()
    }

    pub fn last_token(&self) -> Option<&str> {
        self.tokens().next_back()
    }
}

impl fmt::Display for CanonicalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for CanonicalName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CanonicalName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Configured name normalizer.
#[derive(Debug, Clone)]
pub struct NameNormalizer {
    /// Lower-cased honorifics without their trailing period.
    honorifics: Vec<String>,
    fallback: BTreeMap<char, String>,
    reorder_comma_names: bool,
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::from_config(&MatcherConfig::default())
    }
}

impl NameNormalizer {
    /// Builds a normalizer from configuration.
    ///
    /// Fallback keys that are not a single character are skipped;
    /// [`MatcherConfig::validate`] reports them.
    pub fn from_config(config: &MatcherConfig) -> Self {
        let honorifics = config
            .honorifics
            .iter()
            .map(|h| h.trim().trim_end_matches('.').to_lowercase())
            .filter(|h| !h.is_empty())
            .collect();
        let mut fallback = BTreeMap::new();
        for (from, to) in &config.fallback_characters {
            let mut chars = from.chars();
            if let (Some(ch), None) = (chars.next(), chars.next()) {
                let replacement = to.to_lowercase();
                let keys = [
                    Some(ch),
                    single_char(ch.to_lowercase()),
                    single_char(ch.to_uppercase()),
                ];
                for key in keys.into_iter().flatten() {
                    fallback.insert(key, replacement.clone());
                }
            }
        }
        Self {
            honorifics,
            fallback,
            reorder_comma_names: config.reorder_comma_names,
        }
    }

    /// Canonicalizes a raw name. Never fails; blank input yields an empty name.
    pub fn normalize(&self, raw: &str) -> CanonicalName {
        let folded = self.fold(raw);
        let stripped = self.strip_leading_honorifics(&folded);
        if self.reorder_comma_names
            && let Cow::Owned(reordered) = reorder_comma_name(&stripped)
        {
            // "Smith, Dr. Jane" puts the title first only after reordering.
            return CanonicalName(self.strip_leading_honorifics(&reordered));
        }
        CanonicalName(stripped)
    }

    /// Collapses whitespace and drops honorifics from the front of `folded`.
    fn strip_leading_honorifics(&self, folded: &str) -> String {
        let mut tokens: Vec<&str> = folded.split_whitespace().collect();
        let mut start = 0;
        while let Some(&token) = tokens.get(start) {
            match self.honorific_remainder(token) {
                Some("") => start += 1,
                Some(rest) => tokens[start] = rest,
                None => break,
            }
        }
        tokens[start..].join(" ")
    }

    /// Removes diacritics while keeping case, hyphens and spacing.
    ///
    /// Used for accent-stripped variants compared by legacy exact-string
    /// callers.
    pub fn strip_diacritics(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for ch in raw.nfd() {
            if is_combining_mark(ch) {
                continue;
            }
            match self.fallback.get(&ch) {
                Some(replacement) if ch.is_uppercase() => {
                    let mut chars = replacement.chars();
                    if let Some(first) = chars.next() {
                        out.extend(first.to_uppercase());
                        out.push_str(chars.as_str());
                    }
                }
                Some(replacement) => out.push_str(replacement),
                None => out.push(ch),
            }
        }
        out
    }

    /// True when the word, in any case and with or without a period, is a
    /// configured honorific.
    pub fn is_honorific(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.honorific_remainder(&lower) == Some("")
    }

    fn fold(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        for ch in raw.nfd() {
            if is_combining_mark(ch) {
                continue;
            }
            for lower in ch.to_lowercase() {
                if is_combining_mark(lower) || lower == SOFT_HYPHEN {
                    continue;
                }
                if is_hyphen(lower) {
                    out.push(' ');
                } else if let Some(replacement) = self.fallback.get(&lower) {
                    out.push_str(replacement);
                } else {
                    out.push(lower);
                }
            }
        }
        out
    }

    /// Returns what is left of `token` after a leading honorific, or `None`
    /// when the token does not start with one.
    fn honorific_remainder<'a>(&self, token: &'a str) -> Option<&'a str> {
        self.honorifics.iter().find_map(|honorific| {
            let rest = token.strip_prefix(honorific.as_str())?;
            if rest.is_empty() || rest == "." {
                Some("")
            } else {
                rest.strip_prefix('.')
            }
        })
    }
}

const SOFT_HYPHEN: char = '\u{00AD}';

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn is_hyphen(ch: char) -> bool {
    matches!(
        ch,
        '-' | '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}'
    )
}

fn reorder_comma_name(raw: &str) -> Cow<'_, str> {
    let mut parts = raw.split(',');
    let (Some(last), Some(first), None) = (parts.next(), parts.next(), parts.next()) else {
        return Cow::Borrowed(raw);
    };
    let (last, first) = (last.trim(), first.trim());
    if last.is_empty() || first.is_empty() {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(format!("{first} {last}"))
}

/// Normalizes with the default configuration.
pub fn normalize(raw: &str) -> CanonicalName {
    NameNormalizer::default().normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents() {
        assert_eq!(normalize("Mercè Montoliu Nerín"), "merce montoliu nerin");
        assert_eq!(normalize("Dag Ahrén"), "dag ahren");
        assert_eq!(normalize("Petr Daněček"), "petr danecek");
        assert_eq!(normalize("François Muñoz Řezáč"), "francois munoz rezac");
    }

    #[test]
    fn fallback_covers_undecomposable_letters() {
        assert_eq!(normalize("Paweł Łukasz"), "pawel lukasz");
        assert_eq!(normalize("Jens Søndergaard"), "jens sondergaard");
        assert_eq!(normalize("Heinz Weiß"), "heinz weiss");
    }

    #[test]
    fn hyphens_and_spaces_unify() {
        assert_eq!(normalize("Montoliu-Nerin"), "montoliu nerin");
        assert_eq!(normalize("  Jean\u{2010}Pierre   Dupont \t"), "jean pierre dupont");
        assert_eq!(normalize("Mül\u{00AD}ler Hans"), "muller hans");
    }

    #[test]
    fn honorifics_stripped_only_at_start() {
        assert_eq!(normalize("Dr. Jane Smith"), "jane smith");
        assert_eq!(normalize("PROF. DR. Jane Smith"), "jane smith");
        assert_eq!(normalize("Dr Jane Smith"), "jane smith");
        assert_eq!(normalize("Dr.Jane Smith"), "jane smith");
        assert_eq!(normalize("Jane Smith Dr."), "jane smith dr.");
        assert_eq!(normalize("Drew Smith"), "drew smith");
        assert_eq!(normalize("Mrs. Ms. Mr."), "");
    }

    #[test]
    fn comma_names_reordered() {
        assert_eq!(normalize("Ahrén, Dag"), "dag ahren");
        assert_eq!(normalize("Smith,"), "smith,");
        assert_eq!(normalize("a, b, c"), "a, b, c");
    }

    #[test]
    fn honorific_stripped_around_comma_reordering() {
        assert_eq!(normalize("Dr. Smith, Jane"), "jane smith");
        assert_eq!(normalize("Smith, Prof. Jane"), "jane smith");
        assert_eq!(normalize("Dr. Ahrén, Dr. Dag"), "dag ahren");
    }

    #[test]
    fn comma_reordering_can_be_disabled() {
        let config = MatcherConfig {
            reorder_comma_names: false,
            ..MatcherConfig::default()
        };
        let normalizer = NameNormalizer::from_config(&config);
        assert_eq!(normalizer.normalize("Ahrén, Dag"), "ahren, dag");
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(normalize("").is_empty());
        assert!(normalize(" \t\n ").is_empty());
        assert_eq!(normalize("").token_count(), 0);
        assert_eq!(normalize("").first_token(), None);
    }

    #[test]
    fn token_accessors() {
        let name = normalize("Mercè Montoliu-Nerín");
        assert_eq!(name.token_count(), 3);
        assert_eq!(name.first_token(), Some("merce"));
        assert_eq!(name.last_token(), Some("nerin"));
    }

    #[test]
    fn strip_diacritics_keeps_case_and_hyphens() {
        let normalizer = NameNormalizer::default();
        assert_eq!(
            normalizer.strip_diacritics("Mercè Montoliu-Nerín"),
            "Merce Montoliu-Nerin"
        );
        assert_eq!(normalizer.strip_diacritics("Łukasz Weiß"), "Lukasz Weiss");
    }

    #[test]
    fn honorific_detection() {
        let normalizer = NameNormalizer::default();
        assert!(normalizer.is_honorific("Prof."));
        assert!(normalizer.is_honorific("MRS"));
        assert!(!normalizer.is_honorific("Drew"));
    }
}
