use client_sorter_core::{CandidateFile, FileReport, MatchOutcome, Placement, RouteReporter, RunTally};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// CLI reporter: a progress bar over the candidate files, with one result
/// line per file printed to stdout above it.
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn print_line(&self, line: String) {
        let guard = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        match guard.as_ref() {
            Some(pb) => pb.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}

pub fn format_report(file: &CandidateFile, report: &FileReport) -> String {
    let name = file.file_name();
    let folder = report.folder.as_deref().unwrap_or_default();
    let tag = format!("[{}]", report.outcome.tag());

    match (&report.placement, report.outcome) {
        (Placement::Failed(message), _) => {
            format!("{} {}: {}", "[ERROR]".red(), name, message)
        }
        (Placement::Planned(_), _) => {
            format!("{} {} -> {} {}", tag.cyan(), name, folder, "(dry run)".dimmed())
        }
        (_, MatchOutcome::FilenameMatch(_)) => format!("{} {} -> {}", tag.green(), name, folder),
        (_, MatchOutcome::ContentMatch(_)) => format!("{} {} -> {}", tag.cyan(), name, folder),
        (_, MatchOutcome::NoMatch) => format!("{} {}", tag.yellow(), name),
    }
}

impl RouteReporter for CliReporter {
    fn on_route_start(&self, total_files: usize) {
        let pb = ProgressBar::new(total_files as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "  {spinner:.cyan} Routing [{bar:30.cyan/dim}] {pos}/{len} files ({eta} remaining)",
        ) {
            pb.set_style(
                style
                    .progress_chars("━╸─")
                    .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
            );
        }
        pb.enable_steady_tick(std::time::Duration::from_millis(80));

        let mut guard = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(old) = guard.replace(pb) {
            old.finish_and_clear();
        }
    }

    fn on_file_routed(&self, file: &CandidateFile, report: &FileReport) {
        self.print_line(format_report(file, report));
        let guard = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(pb) = guard.as_ref() {
            pb.inc(1);
        }
    }

    fn on_route_complete(&self, tally: &RunTally, duration_secs: f64) {
        let mut guard = self.bar.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(pb) = guard.take() {
            pb.finish_and_clear();
        }
        eprintln!(
            "  \x1b[32m✓\x1b[0m Routing complete: {} files in {:.2}s",
            tally.total, duration_secs
        );
    }
}
