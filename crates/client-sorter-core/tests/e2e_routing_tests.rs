use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::tempdir;

use client_sorter_core::extractor::PlainTextExtractor;
use client_sorter_core::scanner::collect_candidate_files;
use client_sorter_core::{
    CandidateFile, ClientIdentity, FileReport, MatchOutcome, Placement, PlacementMode,
    RouteReporter, Router, RunTally, SilentReporter, TextExtractor,
};

/// Plain text is read from disk; PDF/DOCX text comes from a fixed table,
/// standing in for the external extraction command. Every call is counted.
struct FixtureExtractor {
    documents: HashMap<String, String>,
    calls: AtomicUsize,
    calls_by_file: Mutex<HashMap<String, usize>>,
}

impl FixtureExtractor {
    fn new(documents: &[(&str, &str)]) -> Self {
        Self {
            documents: documents
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
            calls_by_file: Mutex::new(HashMap::new()),
        }
    }

    fn calls_for(&self, name: &str) -> usize {
        *self.calls_by_file.lock().unwrap().get(name).unwrap_or(&0)
    }
}

impl TextExtractor for FixtureExtractor {
    fn extract(&self, path: &Path) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        *self
            .calls_by_file
            .lock()
            .unwrap()
            .entry(name.clone())
            .or_insert(0) += 1;

        match self.documents.get(&name) {
            Some(text) => text.clone(),
            None => PlainTextExtractor.extract(path),
        }
    }
}

#[derive(Default)]
struct LineRecorder {
    lines: Mutex<Vec<String>>,
}

impl RouteReporter for LineRecorder {
    fn on_file_routed(&self, file: &CandidateFile, report: &FileReport) {
        let line = match &report.folder {
            Some(folder) => format!("[{}] {} -> {}", report.outcome.tag(), file.file_name(), folder),
            None => format!("[{}] {}", report.outcome.tag(), file.file_name()),
        };
        self.lines.lock().unwrap().push(line);
    }
}

fn smith_roster() -> Vec<ClientIdentity> {
    vec![
        ClientIdentity::parse("John Smith").unwrap(),
        ClientIdentity::parse("Jane Smith").unwrap(),
    ]
}

/// Layout:
///   source/
///     smith_john_contract.pdf   (body irrelevant, name matches John)
///     inbox/
///       unlabeled.txt           ("...Jane Smith signed...")
///       random.txt              (unrelated)
///       photo.jpg               (unsupported, never a candidate)
fn create_source_tree(root: &Path) -> PathBuf {
    let source = root.join("source");
    let inbox = source.join("inbox");
    fs::create_dir_all(&inbox).unwrap();

    fs::write(source.join("smith_john_contract.pdf"), "%PDF-1.4 binary").unwrap();
    fs::write(inbox.join("unlabeled.txt"), "The agreement ...Jane Smith signed... today").unwrap();
    fs::write(inbox.join("random.txt"), "Minutes of the zoning board").unwrap();
    fs::write(inbox.join("photo.jpg"), "jpeg bytes").unwrap();
    source
}

#[test]
fn test_end_to_end_copy() {
    let tmp = tempdir().unwrap();
    let source = create_source_tree(tmp.path());
    let dest = tmp.path().join("sorted");

    let files = collect_candidate_files(&source, &[], None).unwrap();
    assert_eq!(files.len(), 3, "photo.jpg must not be a candidate");

    let extractor = FixtureExtractor::new(&[("smith_john_contract.pdf", "Jane Smith")]);
    let recorder = LineRecorder::default();
    let router = Router::new(smith_roster(), &dest, PlacementMode::Copy);
    assert_eq!(router.folder_names(), &["Smith_John", "Smith_Jane"]);

    let tally = router.route(&files, &extractor, &recorder);

    assert_eq!(
        tally,
        RunTally {
            total: 3,
            matched: 2,
            by_filename: 1,
            by_content: 1,
            unmatched: 1,
            failed: 0,
        }
    );

    let lines = recorder.lines.lock().unwrap();
    assert!(lines.contains(&"[FILENAME] smith_john_contract.pdf -> Smith_John".to_string()));
    assert!(lines.contains(&"[CONTENT] unlabeled.txt -> Smith_Jane".to_string()));
    assert!(lines.contains(&"[NO MATCH] random.txt".to_string()));

    assert!(dest.join("Smith_John/smith_john_contract.pdf").is_file());
    assert!(dest.join("Smith_Jane/unlabeled.txt").is_file());
    assert!(!dest.join("Smith_John/random.txt").exists());
    assert!(!dest.join("Smith_Jane/random.txt").exists());

    // Copy mode leaves every source in place.
    assert!(source.join("smith_john_contract.pdf").exists());
    assert!(source.join("inbox/unlabeled.txt").exists());

    // The filename match wins even though the PDF text names Jane, and it
    // never reaches the extractor.
    assert_eq!(extractor.calls_for("smith_john_contract.pdf"), 0);
    assert_eq!(extractor.calls_for("unlabeled.txt"), 1);
    assert_eq!(extractor.calls_for("random.txt"), 1);
    assert_eq!(extractor.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_end_to_end_move() {
    let tmp = tempdir().unwrap();
    let source = create_source_tree(tmp.path());
    let dest = tmp.path().join("sorted");

    let files = collect_candidate_files(&source, &[], None).unwrap();
    let extractor = FixtureExtractor::new(&[]);
    let tally = Router::new(smith_roster(), &dest, PlacementMode::Move).route(
        &files,
        &extractor,
        &SilentReporter,
    );

    assert_eq!(tally.matched, 2);
    assert!(!source.join("smith_john_contract.pdf").exists());
    assert!(!source.join("inbox/unlabeled.txt").exists());
    assert!(source.join("inbox/random.txt").exists());
    assert!(dest.join("Smith_John/smith_john_contract.pdf").is_file());
    assert_eq!(
        fs::read_to_string(dest.join("Smith_Jane/unlabeled.txt")).unwrap(),
        "The agreement ...Jane Smith signed... today"
    );
}

#[test]
fn test_second_run_into_same_destination() {
    let tmp = tempdir().unwrap();
    let source = create_source_tree(tmp.path());
    let dest = tmp.path().join("sorted");
    let extractor = FixtureExtractor::new(&[]);
    let router = Router::new(smith_roster(), &dest, PlacementMode::Copy);

    let files = collect_candidate_files(&source, &[], None).unwrap();
    let first = router.route(&files, &extractor, &SilentReporter);
    let second = router.route(&files, &extractor, &SilentReporter);

    assert_eq!(first, second);
    assert_eq!(second.failed, 0);
    assert_eq!(second.matched, 2);
}

#[test]
fn test_destination_inside_source_is_not_rescanned() {
    let tmp = tempdir().unwrap();
    let source = create_source_tree(tmp.path());
    let dest = source.join("sorted");
    let extractor = FixtureExtractor::new(&[]);
    let router = Router::new(smith_roster(), &dest, PlacementMode::Copy);

    let files = collect_candidate_files(&source, &[], Some(dest.as_path())).unwrap();
    router.route(&files, &extractor, &SilentReporter);

    let again = collect_candidate_files(&source, &[], Some(dest.as_path())).unwrap();
    assert_eq!(again.len(), 3);
    assert!(again.iter().all(|f| !f.path.starts_with(&dest)));
}

#[test]
fn test_pdf_content_match_via_extractor() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("scan_0042.PDF"), "%PDF").unwrap();
    fs::write(source.join("letter.docx"), "PK").unwrap();

    let roster = vec![
        ClientIdentity::parse("Ann Marie Lee").unwrap(),
        ClientIdentity::parse("Ann Lee").unwrap(),
    ];
    let extractor = FixtureExtractor::new(&[
        ("scan_0042.PDF", "Re: ANN LEE, deposition"),
        ("letter.docx", ""),
    ]);
    let dest = tmp.path().join("sorted");
    let recorder = LineRecorder::default();
    let router = Router::new(roster, &dest, PlacementMode::Copy);
    let files = collect_candidate_files(&source, &[], None).unwrap();
    let tally = router.route(&files, &extractor, &recorder);

    // Both clients match; the first roster entry takes it.
    assert_eq!(tally.matched, 1);
    assert_eq!(tally.unmatched, 1);
    assert!(dest.join("Lee_Marie_Ann/scan_0042.PDF").is_file());

    let lines = recorder.lines.lock().unwrap();
    assert_eq!(
        lines.as_slice(),
        &[
            "[NO MATCH] letter.docx".to_string(),
            "[CONTENT] scan_0042.PDF -> Lee_Marie_Ann".to_string(),
        ]
    );
}

#[test]
fn test_outcomes_reported_per_file() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("a.txt"), "nothing here").unwrap();

    struct Outcomes(Mutex<Vec<MatchOutcome>>);
    impl RouteReporter for Outcomes {
        fn on_file_routed(&self, _file: &CandidateFile, report: &FileReport) {
            assert_eq!(report.placement, Placement::Skipped);
            self.0.lock().unwrap().push(report.outcome);
        }
    }

    let reporter = Outcomes(Mutex::new(Vec::new()));
    let files = collect_candidate_files(&source, &[], None).unwrap();
    Router::new(smith_roster(), &tmp.path().join("sorted"), PlacementMode::Copy).route(
        &files,
        &FixtureExtractor::new(&[]),
        &reporter,
    );

    assert_eq!(reporter.0.lock().unwrap().as_slice(), &[MatchOutcome::NoMatch]);
    assert!(!tmp.path().join("sorted").exists());
}
