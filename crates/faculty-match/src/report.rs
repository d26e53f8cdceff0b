//! Folding resolution results into a curation report.
//!
//! The resolver stays pure; callers that used to collect unmatched names as a
//! side effect build a [`ResolutionReport`] from the result stream instead.

use std::collections::{BTreeMap, BTreeSet};

use faculty_model::{MatchResult, MatchStrategy};
use serde::{Deserialize, Serialize};

/// A query whose winner tied with at least one other candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbiguousMatch {
    pub query: String,
    /// Tied candidates, chosen winner first.
    pub faculty_ids: Vec<String>,
    pub confidence: f64,
}

/// Summary of a batch of match results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionReport {
    pub total: usize,
    pub matched: usize,
    pub by_strategy: BTreeMap<MatchStrategy, usize>,
    /// Matched mentions per faculty id.
    pub by_faculty: BTreeMap<String, usize>,
    /// Unique queries nothing cleared the threshold for.
    pub unmatched: BTreeSet<String>,
    /// Unique queries rejected as invalid input.
    pub invalid: BTreeSet<String>,
    pub ambiguous: Vec<AmbiguousMatch>,
}

impl ResolutionReport {
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a MatchResult>) -> Self {
        let mut report = Self::default();
        for result in results {
            report.add(result);
        }
        report
    }

    /// Folds one result into the report.
    pub fn add(&mut self, result: &MatchResult) {
        self.total += 1;
        *self.by_strategy.entry(result.strategy).or_insert(0) += 1;

        match (&result.faculty_id, result.strategy) {
            (Some(faculty_id), _) => {
                self.matched += 1;
                *self.by_faculty.entry(faculty_id.clone()).or_insert(0) += 1;
                if result.is_ambiguous() {
                    self.ambiguous.push(AmbiguousMatch {
                        query: result.query.clone(),
                        faculty_ids: result.tied_ids().into_iter().map(String::from).collect(),
                        confidence: result.confidence,
                    });
                }
            }
            (None, MatchStrategy::InvalidInput) => {
                self.invalid.insert(result.query.clone());
            }
            (None, _) => {
                self.unmatched.insert(result.query.clone());
            }
        }
    }

    pub fn count(&self, strategy: MatchStrategy) -> usize {
        self.by_strategy.get(&strategy).copied().unwrap_or(0)
    }

    /// Share of results with a faculty id, `None` for an empty batch.
    pub fn match_rate(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.matched as f64 / self.total as f64)
    }
}

#[cfg(test)]
mod tests {
    use faculty_model::{Alternative, ScoredCandidate};

    use super::*;

    #[test]
    fn folds_each_outcome() {
        let results = vec![
            MatchResult::overridden("Dag Ahrén", "ahren-dag"),
            MatchResult::matched(
                "J. Smith",
                ScoredCandidate {
                    faculty_id: "smith-jane".to_string(),
                    confidence: 0.85,
                    strategy: MatchStrategy::LastnameInitial,
                },
                vec![Alternative {
                    faculty_id: "smith-john".to_string(),
                    confidence: 0.85,
                    strategy: MatchStrategy::LastnameInitial,
                }],
            ),
            MatchResult::unmatched("Workshop Team", 0.0, Vec::new()),
            MatchResult::unmatched("Workshop Team", 0.0, Vec::new()),
            MatchResult::invalid(""),
        ];
        let report = ResolutionReport::from_results(&results);

        assert_eq!(report.total, 5);
        assert_eq!(report.matched, 2);
        assert_eq!(report.count(MatchStrategy::Unmatched), 2);
        assert_eq!(report.count(MatchStrategy::Fuzzy), 0);
        assert_eq!(report.unmatched.len(), 1);
        assert!(report.invalid.contains(""));
        assert_eq!(report.by_faculty.get("ahren-dag"), Some(&1));
        assert_eq!(report.ambiguous.len(), 1);
        assert_eq!(report.ambiguous[0].faculty_ids, vec!["smith-jane", "smith-john"]);
        assert_eq!(report.match_rate(), Some(0.4));
    }

    #[test]
    fn empty_report_has_no_rate() {
        assert_eq!(ResolutionReport::default().match_rate(), None);
    }

    #[test]
    fn strategy_keys_serialize_as_labels() {
        let report = ResolutionReport::from_results(&[MatchResult::invalid("x")]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["byStrategy"]["invalid_input"], 1);
    }
}
