//! Per-candidate scoring.
//!
//! A query is compared to one roster entry with a fixed ladder of strategies,
//! highest confidence first. The first rule that fires is the candidate's
//! score; ranking across candidates belongs to the resolver.
//!
//! | Strategy | Rule | Confidence |
//! |----------|------|------------|
//! | `exact_normalized` | normalized strings equal | 1.0 |
//! | `lastname_prefix` | last tokens equal, candidate first token starts with a query first token of two or more letters | 0.90 |
//! | `lastname_initial` | last tokens equal, first initials equal | 0.85 |
//! | `fuzzy` | Levenshtein similarity above the floor | similarity, capped at 0.84 |

use faculty_model::{FacultyIdentity, MatchStrategy, ScoredCandidate};
use rapidfuzz::distance::levenshtein;

use crate::config::MatcherConfig;
use crate::normalize::{CanonicalName, NameNormalizer};

pub const EXACT_CONFIDENCE: f64 = 1.0;
pub const LASTNAME_PREFIX_CONFIDENCE: f64 = 0.90;
pub const LASTNAME_INITIAL_CONFIDENCE: f64 = 0.85;
/// Fuzzy matches never report more than this, keeping them below
/// `lastname_initial`.
pub const FUZZY_CONFIDENCE_CEILING: f64 = 0.84;
pub const DEFAULT_FUZZY_MIN_SIMILARITY: f64 = 0.80;

/// Scores a query against individual roster entries.
#[derive(Debug, Clone)]
pub struct MatchScorer {
    normalizer: NameNormalizer,
    fuzzy_min_similarity: f64,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(NameNormalizer::default(), DEFAULT_FUZZY_MIN_SIMILARITY)
    }
}

impl MatchScorer {
    pub fn new(normalizer: NameNormalizer, fuzzy_min_similarity: f64) -> Self {
        Self {
            normalizer,
            fuzzy_min_similarity,
        }
    }

    pub fn from_config(config: &MatcherConfig) -> Self {
        Self::new(
            NameNormalizer::from_config(config),
            config.fuzzy_min_similarity,
        )
    }

    pub fn normalizer(&self) -> &NameNormalizer {
        &self.normalizer
    }

    /// Best strategy result for `query` against `candidate`, if any fires.
    pub fn score(&self, query: &str, candidate: &FacultyIdentity) -> Option<ScoredCandidate> {
        let query = self.normalizer.normalize(query);
        self.score_canonical(&query, candidate)
    }

    /// Same as [`Self::score`] for an already normalized query.
    pub fn score_canonical(
        &self,
        query: &CanonicalName,
        candidate: &FacultyIdentity,
    ) -> Option<ScoredCandidate> {
        let target = self.normalizer.normalize(&candidate.full_name());
        let (strategy, confidence) = self.best_rule(query, &target)?;
        Some(ScoredCandidate {
            faculty_id: candidate.id.clone(),
            confidence,
            strategy,
        })
    }

    fn best_rule(
        &self,
        query: &CanonicalName,
        target: &CanonicalName,
    ) -> Option<(MatchStrategy, f64)> {
        if query.is_empty() || target.is_empty() {
            return None;
        }
        if query == target {
            return Some((MatchStrategy::ExactNormalized, EXACT_CONFIDENCE));
        }
        if let Some(rule) = lastname_rule(query, target) {
            return Some(rule);
        }
        let similarity = levenshtein_similarity(query.as_str(), target.as_str());
        if similarity > self.fuzzy_min_similarity {
            return Some((
                MatchStrategy::Fuzzy,
                similarity.min(FUZZY_CONFIDENCE_CEILING),
            ));
        }
        None
    }
}

fn lastname_rule(query: &CanonicalName, target: &CanonicalName) -> Option<(MatchStrategy, f64)> {
    if query.token_count() < 2 || target.token_count() < 2 {
        return None;
    }
    if query.last_token()? != target.last_token()? {
        return None;
    }
    let query_first = query.first_token()?;
    let target_first = target.first_token()?;
    if is_spelled_out(query_first) && target_first.starts_with(query_first) {
        return Some((MatchStrategy::LastnamePrefix, LASTNAME_PREFIX_CONFIDENCE));
    }
    if query_first.chars().next() == target_first.chars().next() {
        return Some((MatchStrategy::LastnameInitial, LASTNAME_INITIAL_CONFIDENCE));
    }
    None
}

/// A first-name token with at least two letters; "j" and "j." are initials.
fn is_spelled_out(token: &str) -> bool {
    token.trim_end_matches('.').chars().count() >= 2
}

/// `1 - distance / max(len_a, len_b)` over characters; 1.0 for two empty
/// strings.
pub fn levenshtein_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein::distance(a.chars(), b.chars());
    1.0 - distance as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faculty(id: &str, first: &str, last: &str) -> FacultyIdentity {
        FacultyIdentity::new(id, first, last)
    }

    #[test]
    fn exact_after_accent_stripping() {
        let scored = MatchScorer::default()
            .score("Dag Ahrén", &faculty("ahren-dag", "Dag", "Ahren"))
            .unwrap();
        assert_eq!(scored.strategy, MatchStrategy::ExactNormalized);
        assert_eq!(scored.confidence, EXACT_CONFIDENCE);
        assert_eq!(scored.faculty_id, "ahren-dag");
    }

    #[test]
    fn hyphenated_surname_is_exact() {
        let scored = MatchScorer::default()
            .score(
                "Mercè Montoliu Nerín",
                &faculty("montoliu-nerin-merce", "Mercè", "Montoliu-Nerin"),
            )
            .unwrap();
        assert_eq!(scored.strategy, MatchStrategy::ExactNormalized);
    }

    #[test]
    fn shortened_first_name_is_prefix() {
        let scored = MatchScorer::default()
            .score("Chris Wheat", &faculty("wheat-christopher", "Christopher", "Wheat"))
            .unwrap();
        assert_eq!(scored.strategy, MatchStrategy::LastnamePrefix);
        assert_eq!(scored.confidence, LASTNAME_PREFIX_CONFIDENCE);
    }

    #[test]
    fn initial_only_is_lastname_initial() {
        let scored = MatchScorer::default()
            .score("J. Smith", &faculty("smith-john", "John", "Smith"))
            .unwrap();
        assert_eq!(scored.strategy, MatchStrategy::LastnameInitial);
        assert_eq!(scored.confidence, LASTNAME_INITIAL_CONFIDENCE);
    }

    #[test]
    fn bare_initial_is_never_a_prefix() {
        let john = faculty("smith-john", "John", "Smith");
        for query in ["J Smith", "J. Smith", "j smith"] {
            let scored = MatchScorer::default().score(query, &john).unwrap();
            assert_eq!(scored.strategy, MatchStrategy::LastnameInitial, "query {query:?}");
            assert_eq!(scored.confidence, LASTNAME_INITIAL_CONFIDENCE);
        }

        let scored = MatchScorer::default().score("Jo Smith", &john).unwrap();
        assert_eq!(scored.strategy, MatchStrategy::LastnamePrefix);
    }

    #[test]
    fn typo_is_fuzzy_and_capped() {
        let scored = MatchScorer::default()
            .score("Petr Danecek", &faculty("danecek-petr", "Petr", "Daneček"))
            .unwrap();
        assert_eq!(scored.strategy, MatchStrategy::ExactNormalized);

        let scored = MatchScorer::default()
            .score("Petr Danicek", &faculty("danecek-petr", "Petr", "Daněček"))
            .unwrap();
        assert_eq!(scored.strategy, MatchStrategy::Fuzzy);
        assert!(scored.confidence > DEFAULT_FUZZY_MIN_SIMILARITY);
        assert!(scored.confidence <= FUZZY_CONFIDENCE_CEILING);
    }

    #[test]
    fn different_people_do_not_score() {
        let scorer = MatchScorer::default();
        assert!(
            scorer
                .score("Workshop Team", &faculty("ahren-dag", "Dag", "Ahren"))
                .is_none()
        );
        assert!(
            scorer
                .score("Anna Smith", &faculty("smith-john", "John", "Smith"))
                .is_none()
        );
    }

    #[test]
    fn empty_query_never_scores() {
        assert!(
            MatchScorer::default()
                .score("", &faculty("ahren-dag", "Dag", "Ahren"))
                .is_none()
        );
    }

    #[test]
    fn similarity_bounds() {
        assert_eq!(levenshtein_similarity("", ""), 1.0);
        assert_eq!(levenshtein_similarity("abc", "abc"), 1.0);
        assert_eq!(levenshtein_similarity("abc", ""), 0.0);
        assert!((levenshtein_similarity("kitten", "sitten") - (1.0 - 1.0 / 6.0)).abs() < 1e-9);
    }
}
