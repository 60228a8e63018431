use crate::models::{CandidateFile, MatchOutcome, RunTally};
use std::path::PathBuf;

/// What happened to one file during routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub outcome: MatchOutcome,
    /// Folder name of the matched client.
    pub folder: Option<String>,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Copied or moved to this path.
    Placed(PathBuf),
    /// Dry run: would have been placed here.
    Planned(PathBuf),
    /// Matched, but directory creation or the copy/move failed.
    Failed(String),
    /// No match; the file was not touched.
    Skipped,
}

/// Trait for reporting routing progress.
///
/// The CLI implements it with an indicatif bar and console lines.
/// All methods have default no-op implementations.
pub trait RouteReporter: Send + Sync {
    fn on_route_start(&self, _total_files: usize) {}
    fn on_file_routed(&self, _file: &CandidateFile, _report: &FileReport) {}
    fn on_route_complete(&self, _tally: &RunTally, _duration_secs: f64) {}
}

/// No-op reporter for silent operation.
pub struct SilentReporter;

impl RouteReporter for SilentReporter {}
