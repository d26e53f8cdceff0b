//! Turning raw mention cells into resolver queries.

use tracing::debug;

use faculty_match::{PlaceholderFilter, split_presenters};

/// How raw mentions are expanded before resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Split "A & B" cells into one query per presenter.
    pub split_multiple: bool,
    /// Resolve placeholder mentions instead of skipping them.
    pub keep_placeholders: bool,
}

/// Queries ready for the resolver plus the placeholders that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MentionBatch {
    pub queries: Vec<String>,
    pub skipped: Vec<String>,
}

impl MentionBatch {
    pub fn prepare(mentions: &[String], options: BatchOptions, filter: &PlaceholderFilter) -> Self {
        let mut batch = Self::default();
        for mention in mentions {
            let presenters = if options.split_multiple {
                split_presenters(mention)
            } else {
                vec![mention.trim().to_string()]
            };
            for presenter in presenters {
                if !options.keep_placeholders && filter.is_placeholder(&presenter) {
                    debug!(mention = %presenter, "skipping placeholder");
                    batch.skipped.push(presenter);
                } else {
                    batch.queries.push(presenter);
                }
            }
        }
        batch
    }
}
