//! Match outcome types shared by the resolver and its callers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An explicit correction mapping a name to a faculty id.
///
/// Supplied as configuration data; consulted before any algorithmic scoring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualOverride {
    pub normalized_key: String,
    pub faculty_id: String,
}

impl ManualOverride {
    pub fn new(normalized_key: impl Into<String>, faculty_id: impl Into<String>) -> Self {
        Self {
            normalized_key: normalized_key.into(),
            faculty_id: faculty_id.into(),
        }
    }
}

/// How a [`MatchResult`] was reached.
///
/// The algorithmic strategies are ordered by tier: a higher tier always reports
/// a confidence at least as high as any lower tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Taken from the manual override table.
    Override,
    /// Normalized query equals the normalized full name.
    ExactNormalized,
    /// Same last name, candidate first name starts with the query first name.
    LastnamePrefix,
    /// Same last name and same first initial.
    LastnameInitial,
    /// Edit-distance similarity above the fuzzy floor.
    Fuzzy,
    /// No candidate cleared the acceptance threshold.
    Unmatched,
    /// The query was empty or had fewer than two name tokens.
    InvalidInput,
}

impl MatchStrategy {
    /// Every strategy, highest tier first.
    pub const ALL: [MatchStrategy; 7] = [
        Self::Override,
        Self::ExactNormalized,
        Self::LastnamePrefix,
        Self::LastnameInitial,
        Self::Fuzzy,
        Self::Unmatched,
        Self::InvalidInput,
    ];

    /// Rank used to break ties between equal confidences; higher wins.
    pub fn tier(self) -> u8 {
        match self {
            Self::Override => 5,
            Self::ExactNormalized => 4,
            Self::LastnamePrefix => 3,
            Self::LastnameInitial => 2,
            Self::Fuzzy => 1,
            Self::Unmatched | Self::InvalidInput => 0,
        }
    }

    /// True for strategies that identify a faculty member.
    pub fn is_match(self) -> bool {
        self.tier() > 0
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::ExactNormalized => "exact_normalized",
            Self::LastnamePrefix => "lastname_prefix",
            Self::LastnameInitial => "lastname_initial",
            Self::Fuzzy => "fuzzy",
            Self::Unmatched => "unmatched",
            Self::InvalidInput => "invalid_input",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Best strategy result for one query against one roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub faculty_id: String,
    pub confidence: f64,
    pub strategy: MatchStrategy,
}

/// A ranked candidate kept for audit next to the winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alternative {
    pub faculty_id: String,
    pub confidence: f64,
    pub strategy: MatchStrategy,
}

impl From<ScoredCandidate> for Alternative {
    fn from(candidate: ScoredCandidate) -> Self {
        Self {
            faculty_id: candidate.faculty_id,
            confidence: candidate.confidence,
            strategy: candidate.strategy,
        }
    }
}

/// Outcome of resolving one presenter mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// The raw query as supplied by the caller.
    pub query: String,
    /// Winning faculty id, `None` when unmatched or invalid.
    pub faculty_id: Option<String>,
    pub confidence: f64,
    pub strategy: MatchStrategy,
    /// Ranked candidates below the winner (or the near-misses when unmatched).
    #[serde(default)]
    pub alternatives: Vec<Alternative>,
}

impl MatchResult {
    pub fn matched(
        query: impl Into<String>,
        winner: ScoredCandidate,
        alternatives: Vec<Alternative>,
    ) -> Self {
        Self {
            query: query.into(),
            faculty_id: Some(winner.faculty_id),
            confidence: winner.confidence,
            strategy: winner.strategy,
            alternatives,
        }
    }

    pub fn overridden(query: impl Into<String>, faculty_id: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            faculty_id: Some(faculty_id.into()),
            confidence: 1.0,
            strategy: MatchStrategy::Override,
            alternatives: Vec::new(),
        }
    }

    pub fn unmatched(
        query: impl Into<String>,
        confidence: f64,
        alternatives: Vec<Alternative>,
    ) -> Self {
        Self {
            query: query.into(),
            faculty_id: None,
            confidence,
            strategy: MatchStrategy::Unmatched,
            alternatives,
        }
    }

    pub fn invalid(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            faculty_id: None,
            confidence: 0.0,
            strategy: MatchStrategy::InvalidInput,
            alternatives: Vec::new(),
        }
    }

    pub fn is_matched(&self) -> bool {
        self.faculty_id.is_some()
    }

    /// True when the winner tied with the first runner-up before the id
    /// tie-break decided between them.
    pub fn is_ambiguous(&self) -> bool {
        if !self.is_matched() {
            return false;
        }
        self.alternatives.first().is_some_and(|runner_up| {
            runner_up.confidence == self.confidence && runner_up.strategy == self.strategy
        })
    }

    /// Ids of every candidate tied with the winner, winner included.
    pub fn tied_ids(&self) -> Vec<&str> {
        let Some(winner) = self.faculty_id.as_deref() else {
            return Vec::new();
        };
        let mut ids = vec![winner];
        ids.extend(
            self.alternatives
                .iter()
                .take_while(|alt| alt.confidence == self.confidence && alt.strategy == self.strategy)
                .map(|alt| alt.faculty_id.as_str()),
        );
        ids
    }
}
