//! Resolution of presenter mentions against the faculty roster.
//!
//! For each query the resolver:
//! 1. normalizes it and reports `invalid_input` below two tokens,
//! 2. consults the override table with the normalized form and every variant,
//! 3. scores every roster entry and ranks the hits by
//!    `(confidence desc, tier desc, faculty id asc)`,
//! 4. accepts the top hit when it clears the threshold, otherwise reports
//!    `unmatched` with the near-misses attached.
//!
//! Nothing here logs or performs I/O, and the roster is only read.

use std::cmp::Ordering;

use faculty_model::{
    Alternative, FacultyIdentity, ManualOverride, MatchResult, Registry, ScoredCandidate,
};

use crate::config::{DEFAULT_THRESHOLD, MatcherConfig};
use crate::error::MatchError;
use crate::mention::split_presenters;
use crate::normalize::NameNormalizer;
use crate::overrides::OverrideTable;
use crate::score::MatchScorer;
use crate::variants::VariantGenerator;

/// Minimum number of name tokens a query needs to be scored.
pub const MIN_QUERY_TOKENS: usize = 2;

/// Scoring and acceptance rules, independent of any particular roster.
#[derive(Debug, Clone)]
struct ResolutionRules {
    scorer: MatchScorer,
    variants: VariantGenerator,
    threshold: f64,
    max_alternatives: usize,
}

impl ResolutionRules {
    fn from_config(config: &MatcherConfig) -> Self {
        Self {
            scorer: MatchScorer::from_config(config),
            variants: VariantGenerator::from_config(config),
            threshold: config.threshold,
            max_alternatives: config.max_alternatives,
        }
    }

    fn resolve(
        &self,
        query: &str,
        roster: &[FacultyIdentity],
        overrides: &OverrideTable,
    ) -> MatchResult {
        let canonical = self.scorer.normalizer().normalize(query);
        if canonical.token_count() < MIN_QUERY_TOKENS {
            return MatchResult::invalid(query);
        }

        if !overrides.is_empty()
            && let Some(faculty_id) = self.override_target(query, canonical.as_str(), overrides)
        {
            return MatchResult::overridden(query, faculty_id);
        }

        let mut ranked: Vec<ScoredCandidate> = roster
            .iter()
            .filter_map(|candidate| self.scorer.score_canonical(&canonical, candidate))
            .collect();
        ranked.sort_by(rank_order);

        let mut ranked = ranked.into_iter();
        match ranked.next() {
            Some(top) if top.confidence >= self.threshold => {
                let alternatives = ranked
                    .take(self.max_alternatives)
                    .map(Alternative::from)
                    .collect();
                MatchResult::matched(query, top, alternatives)
            }
            Some(top) => {
                let confidence = top.confidence;
                let alternatives = std::iter::once(top)
                    .chain(ranked)
                    .take(self.max_alternatives)
                    .map(Alternative::from)
                    .collect();
                MatchResult::unmatched(query, confidence, alternatives)
            }
            None => MatchResult::unmatched(query, 0.0, Vec::new()),
        }
    }

    fn override_target<'o>(
        &self,
        query: &str,
        canonical: &str,
        overrides: &'o OverrideTable,
    ) -> Option<&'o str> {
        overrides.get(canonical).or_else(|| {
            self.variants
                .variants(query)
                .iter()
                .filter(|variant| !abbreviates_first_name(variant))
                .find_map(|variant| overrides.get(variant))
        })
    }
}

/// True for renderings such as "J. Smith" that replace the first name with an
/// initial. Such a key would also capture every other "J" with that surname.
fn abbreviates_first_name(variant: &str) -> bool {
    variant
        .split_whitespace()
        .next()
        .and_then(|word| word.strip_suffix('.'))
        .is_some_and(|stem| stem.chars().count() == 1)
}

/// Total order over scored candidates: confidence, then tier, then id.
fn rank_order(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| b.strategy.tier().cmp(&a.strategy.tier()))
        .then_with(|| a.faculty_id.cmp(&b.faculty_id))
}

/// Resolves presenter mentions against one roster snapshot.
///
/// Holds only immutable data, so one resolver can be shared across threads.
///
/// # Example
///
/// ```ignore
/// use faculty_match::{MatcherConfig, Resolver};
///
/// let resolver = Resolver::from_config(registry, &MatcherConfig::default())?;
/// let result = resolver.resolve("Dag Ahrén");
/// assert_eq!(result.faculty_id.as_deref(), Some("ahren-dag"));
/// ```
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: Registry,
    overrides: OverrideTable,
    rules: ResolutionRules,
}

impl Resolver {
    /// Creates a resolver with an explicit override table.
    ///
    /// The override entries inside `config` are ignored here; use
    /// [`Self::from_config`] to build the table from them.
    pub fn new(
        registry: Registry,
        overrides: OverrideTable,
        config: &MatcherConfig,
    ) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self {
            registry,
            overrides,
            rules: ResolutionRules::from_config(config),
        })
    }

    /// Validates raw roster entries, then behaves like [`Self::from_config`].
    pub fn from_roster(
        entries: Vec<FacultyIdentity>,
        config: &MatcherConfig,
    ) -> Result<Self, MatchError> {
        Self::from_config(Registry::new(entries)?, config)
    }

    /// Creates a resolver whose override table comes from `config.overrides`.
    pub fn from_config(registry: Registry, config: &MatcherConfig) -> Result<Self, MatchError> {
        config.validate()?;
        let overrides = OverrideTable::with_normalizer(
            config.overrides.clone(),
            &NameNormalizer::from_config(config),
        )?;
        Self::new(registry, overrides, config)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    pub fn threshold(&self) -> f64 {
        self.rules.threshold
    }

    /// Resolves a single presenter name.
    pub fn resolve(&self, query: &str) -> MatchResult {
        self.rules
            .resolve(query, self.registry.as_slice(), &self.overrides)
    }

    /// Resolves a batch; results keep the input order.
    pub fn resolve_all<S: AsRef<str>>(&self, queries: &[S]) -> Vec<MatchResult> {
        queries
            .iter()
            .map(|query| self.resolve(query.as_ref()))
            .collect()
    }

    /// Splits a multi-presenter mention and resolves each person.
    pub fn resolve_mention(&self, mention: &str) -> Vec<MatchResult> {
        let presenters = split_presenters(mention);
        if presenters.is_empty() {
            return vec![self.resolve(mention)];
        }
        self.resolve_all(&presenters)
    }
}

/// Resolves one query with the default rules and the given threshold.
///
/// A threshold outside `[0, 1]` is clamped; NaN falls back to the default.
pub fn resolve(
    query: &str,
    registry: &[FacultyIdentity],
    overrides: &OverrideTable,
    threshold: f64,
) -> MatchResult {
    let threshold = if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    };
    let config = MatcherConfig::default().with_threshold(threshold);
    ResolutionRules::from_config(&config).resolve(query, registry, overrides)
}

/// Like [`resolve`], taking the overrides as plain data.
///
/// Fails only when the overrides are blank or conflict with each other.
pub fn resolve_with_overrides(
    query: &str,
    registry: &[FacultyIdentity],
    overrides: &[ManualOverride],
    threshold: f64,
) -> Result<MatchResult, MatchError> {
    let table = OverrideTable::new(overrides.to_vec())?;
    Ok(resolve(query, registry, &table, threshold))
}
