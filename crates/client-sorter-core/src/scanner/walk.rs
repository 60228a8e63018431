use crate::error::Error;
use crate::models::CandidateFile;
use glob::Pattern;
use std::path::Path;
use tracing::{error, warn};
use walkdir::{DirEntry, WalkDir};

/// Recursively list supported files under `source`, sorted by name per directory.
///
/// Entries matching an ignore glob are pruned, as is the `exclude` subtree
/// (the destination, when it lives inside the source). Links to files are
/// kept; directory links are not descended into.
pub fn collect_candidate_files(
    source: &Path,
    ignore_globs: &[String],
    exclude: Option<&Path>,
) -> Result<Vec<CandidateFile>, Error> {
    if !source.is_dir() {
        return Err(Error::InvalidSource(source.to_path_buf()));
    }

    let ignore_patterns: Vec<Pattern> = ignore_globs
        .iter()
        .filter_map(|glob| match Pattern::new(glob) {
            Ok(p) => Some(p),
            Err(e) => {
                error!("Invalid glob pattern '{}': {}", glob, e);
                None
            }
        })
        .collect();

    let exclude = exclude.and_then(|p| p.canonicalize().ok());

    let keep = |entry: &DirEntry| {
        if entry.depth() == 0 {
            return true;
        }
        let path = entry.path();
        if ignore_patterns
            .iter()
            .any(|pattern| pattern.matches_path(path))
        {
            return false;
        }
        match (&exclude, entry.file_type().is_dir()) {
            (Some(excluded), true) => path
                .canonicalize()
                .map(|p| p != *excluded)
                .unwrap_or(true),
            _ => true,
        }
    };

    let mut files = Vec::new();
    for entry in WalkDir::new(source)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(keep)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("Skipping unreadable entry under {}: {}", source.display(), err);
                continue;
            }
        };

        // `Path::is_file` follows the link, so symlinked documents count too.
        let is_file = entry.file_type().is_file()
            || (entry.path_is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        if let Some(candidate) = CandidateFile::from_path(entry.into_path()) {
            files.push(candidate);
        }
    }

    Ok(files)
}
