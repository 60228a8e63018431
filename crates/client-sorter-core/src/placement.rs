use crate::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlacementMode {
    #[default]
    Copy,
    Move,
}

impl PlacementMode {
    pub fn from_move_flag(move_files: bool) -> Self {
        if move_files {
            PlacementMode::Move
        } else {
            PlacementMode::Copy
        }
    }

    pub fn past_tense(&self) -> &'static str {
        match self {
            PlacementMode::Copy => "COPIED",
            PlacementMode::Move => "MOVED",
        }
    }
}

/// Create the destination root. Failure here is fatal to the run.
pub fn prepare_destination(path: &Path) -> Result<PathBuf, Error> {
    fs::create_dir_all(path).map_err(|source| Error::Destination {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// Dry-run counterpart of `prepare_destination`: fail if the path, or the
/// nearest existing ancestor, is not a directory. Nothing is created.
pub fn check_destination(path: &Path) -> Result<(), Error> {
    let existing = path.ancestors().find(|p| !p.as_os_str().is_empty() && p.exists());
    match existing {
        Some(found) if !found.is_dir() => Err(Error::Destination {
            path: path.to_path_buf(),
            source: io::Error::new(
                io::ErrorKind::Other,
                format!("{} exists and is not a directory", found.display()),
            ),
        }),
        _ => Ok(()),
    }
}

/// Where `source` lands inside `target_dir`; the file name is kept.
pub fn target_path(source: &Path, target_dir: &Path) -> io::Result<PathBuf> {
    let file_name = source.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} has no file name", source.display()),
        )
    })?;
    Ok(target_dir.join(file_name))
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Put `source` into `target_dir`, creating the directory if needed.
///
/// Copy overwrites an existing file of the same name. Move is a rename, so a
/// cross-device move fails and leaves the source where it was.
pub fn place_file(source: &Path, target_dir: &Path, mode: PlacementMode) -> io::Result<PathBuf> {
    fs::create_dir_all(target_dir)?;
    let target = target_path(source, target_dir)?;

    if is_same_file(source, &target) {
        debug!("{} is already in place", source.display());
        return Ok(target);
    }

    match mode {
        PlacementMode::Copy => {
            fs::copy(source, &target)?;
        }
        PlacementMode::Move => {
            fs::rename(source, &target)?;
        }
    }

    Ok(target)
}
