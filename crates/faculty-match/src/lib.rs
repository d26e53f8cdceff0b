//! Presenter-to-faculty identity resolution.
//!
//! Decides which canonical faculty record a scraped presenter name refers to,
//! despite inconsistent accents, hyphenation, titles, name order and
//! abbreviation.
//!
//! # Design
//!
//! - **Pure**: resolution depends only on the query, the roster, the override
//!   table and the configuration
//! - **Tiered**: every strategy reports confidence inside its own band, so a
//!   weaker strategy can never outrank a stronger one
//! - **Deterministic**: equal scores are broken by faculty id
//! - **Data-driven**: honorifics, diacritic fallbacks, thresholds and overrides
//!   come from [`MatcherConfig`]
//!
//! # Example
//!
//! ```ignore
//! use faculty_match::{MatcherConfig, Resolver, ResolutionReport};
//!
//! let resolver = Resolver::from_config(registry, &MatcherConfig::default())?;
//! let results: Vec<_> = mentions
//!     .iter()
//!     .flat_map(|mention| resolver.resolve_mention(mention))
//!     .collect();
//!
//! let report = ResolutionReport::from_results(&results);
//! for name in &report.unmatched {
//!     println!("needs curation: {name}");
//! }
//! ```

#![deny(unsafe_code)]

mod config;
mod error;
mod mention;
mod normalize;
mod overrides;
mod report;
mod resolve;
mod score;
mod variants;

pub use config::{DEFAULT_MAX_ALTERNATIVES, DEFAULT_THRESHOLD, MatcherConfig};
pub use error::MatchError;
pub use mention::{PlaceholderFilter, split_presenters};
pub use normalize::{CanonicalName, NameNormalizer, normalize};
pub use overrides::OverrideTable;
pub use report::{AmbiguousMatch, ResolutionReport};
pub use resolve::{MIN_QUERY_TOKENS, Resolver, resolve, resolve_with_overrides};
pub use score::{
    DEFAULT_FUZZY_MIN_SIMILARITY, EXACT_CONFIDENCE, FUZZY_CONFIDENCE_CEILING,
    LASTNAME_INITIAL_CONFIDENCE, LASTNAME_PREFIX_CONFIDENCE, MatchScorer, levenshtein_similarity,
};
pub use variants::{VariantGenerator, variants};

pub use faculty_model::{
    Alternative, FacultyIdentity, ManualOverride, MatchResult, MatchStrategy, Registry,
    ScoredCandidate,
};
