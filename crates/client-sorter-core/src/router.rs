use crate::extractor::TextExtractor;
use crate::folders::generate_folder_names;
use crate::matcher::find_match;
use crate::models::{CandidateFile, ClientIdentity, MatchOutcome, RunTally};
use crate::placement::{self, PlacementMode};
use crate::progress::{FileReport, Placement, RouteReporter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, error, info};

pub struct Router {
    roster: Vec<ClientIdentity>,
    folder_names: Vec<String>,
    destination: PathBuf,
    mode: PlacementMode,
    dry_run: bool,
}

impl Router {
    pub fn new(roster: Vec<ClientIdentity>, destination: &Path, mode: PlacementMode) -> Self {
        let folder_names = generate_folder_names(&roster);
        Self {
            roster,
            folder_names,
            destination: destination.to_path_buf(),
            mode,
            dry_run: false,
        }
    }

    /// Report matches without creating folders or touching files.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn folder_names(&self) -> &[String] {
        &self.folder_names
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Client and folder pairs in roster order.
    pub fn mapping(&self) -> impl Iterator<Item = (&ClientIdentity, &str)> {
        self.roster
            .iter()
            .zip(self.folder_names.iter().map(String::as_str))
    }

    /// Route every file, one at a time, and return the tally.
    ///
    /// A placement failure is logged and counted; it never stops the run.
    pub fn route(
        &self,
        files: &[CandidateFile],
        extractor: &dyn TextExtractor,
        reporter: &dyn RouteReporter,
    ) -> RunTally {
        let start = Instant::now();
        let mut tally = RunTally::default();
        reporter.on_route_start(files.len());

        for file in files {
            let report = self.route_file(file, extractor);
            tally.total += 1;

            match (&report.placement, report.outcome) {
                (Placement::Placed(_) | Placement::Planned(_), MatchOutcome::FilenameMatch(_)) => {
                    tally.matched += 1;
                    tally.by_filename += 1;
                }
                (Placement::Placed(_) | Placement::Planned(_), MatchOutcome::ContentMatch(_)) => {
                    tally.matched += 1;
                    tally.by_content += 1;
                }
                (Placement::Failed(_), _) => tally.failed += 1,
                _ => tally.unmatched += 1,
            }

            reporter.on_file_routed(file, &report);
        }

        let duration = start.elapsed();
        info!(
            "Routed {} files: {} matched, {} unmatched, {} failed",
            tally.total, tally.matched, tally.unmatched, tally.failed
        );
        reporter.on_route_complete(&tally, duration.as_secs_f64());
        tally
    }

    fn route_file(&self, file: &CandidateFile, extractor: &dyn TextExtractor) -> FileReport {
        let outcome = find_match(file, &self.roster, extractor);
        let index = match outcome.client_index() {
            Some(index) => index,
            None => {
                debug!("[{}] {}", outcome.tag(), file.path.display());
                return FileReport {
                    outcome,
                    folder: None,
                    placement: Placement::Skipped,
                };
            }
        };

        let folder = self.folder_names[index].clone();
        let target_dir = self.destination.join(&folder);

        let placement = if self.dry_run {
            match placement::target_path(&file.path, &target_dir) {
                Ok(target) => Placement::Planned(target),
                Err(err) => Placement::Failed(err.to_string()),
            }
        } else {
            match placement::place_file(&file.path, &target_dir, self.mode) {
                Ok(target) => {
                    debug!(
                        "[{}] {} -> {}",
                        outcome.tag(),
                        file.path.display(),
                        target.display()
                    );
                    Placement::Placed(target)
                }
                Err(err) => {
                    error!(
                        "Error placing {} into {}: {}",
                        file.path.display(),
                        target_dir.display(),
                        err
                    );
                    Placement::Failed(err.to_string())
                }
            }
        };

        FileReport {
            outcome,
            folder: Some(folder),
            placement,
        }
    }
}
