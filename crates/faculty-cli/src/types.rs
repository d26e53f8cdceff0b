use std::path::PathBuf;

use faculty_match::ResolutionReport;
use faculty_model::{ManualOverride, MatchResult};

#[derive(Debug)]
pub struct ResolveRun {
    pub roster_size: usize,
    pub mention_count: usize,
    pub results: Vec<MatchResult>,
    pub report: ResolutionReport,
    pub skipped_placeholders: Vec<String>,
    pub dangling_overrides: Vec<ManualOverride>,
    /// `None` when results went to stdout.
    pub output: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
}

impl ResolveRun {
    pub fn has_unresolved(&self) -> bool {
        !self.report.unmatched.is_empty() || !self.report.invalid.is_empty()
    }
}
