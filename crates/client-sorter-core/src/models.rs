use crate::error::Error;
use std::path::{Path, PathBuf};

/// One person files are routed to. Identity is the position in the roster,
/// so two clients with equal names are still distinct entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl ClientIdentity {
    pub fn new(first: &str, middle: &str, last: &str) -> Self {
        Self {
            first: first.to_string(),
            middle: middle.to_string(),
            last: last.to_string(),
        }
    }

    /// Parse `First Last` or `First Middle Last`.
    pub fn parse(line: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.iter().any(|part| !is_valid_token(part)) {
            return Err(Error::InvalidClient(line.trim().to_string()));
        }

        match parts.as_slice() {
            [first, last] => Ok(Self::new(first, "", last)),
            [first, middle, last] => Ok(Self::new(first, middle, last)),
            _ => Err(Error::InvalidClient(line.trim().to_string())),
        }
    }

    pub fn has_middle(&self) -> bool {
        !self.middle.is_empty()
    }

    /// `last_first` or `last_middle_first`, input casing kept.
    pub fn base_folder_name(&self) -> String {
        if self.has_middle() {
            format!("{}_{}_{}", self.last, self.middle, self.first)
        } else {
            format!("{}_{}", self.last, self.first)
        }
    }

    pub fn display_name(&self) -> String {
        if self.has_middle() {
            format!("{} {} {}", self.first, self.middle, self.last)
        } else {
            format!("{} {}", self.first, self.last)
        }
    }
}

// Tokens become folder name segments and must not walk out of the destination.
fn is_valid_token(token: &str) -> bool {
    token != "." && token != ".." && !token.contains(['/', '\\'])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentKind {
    pub const SUPPORTED_EXTENSIONS: [&'static str; 3] = ["txt", "pdf", "docx"];

    /// Case-insensitive lookup on the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "txt" => Some(DocumentKind::PlainText),
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

/// A file under the source tree with a supported extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub kind: DocumentKind,
}

impl CandidateFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let kind = DocumentKind::from_path(&path)?;
        Some(Self { path, kind })
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    FilenameMatch(usize),
    ContentMatch(usize),
    NoMatch,
}

impl MatchOutcome {
    pub fn client_index(&self) -> Option<usize> {
        match self {
            MatchOutcome::FilenameMatch(i) | MatchOutcome::ContentMatch(i) => Some(*i),
            MatchOutcome::NoMatch => None,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            MatchOutcome::FilenameMatch(_) => "FILENAME",
            MatchOutcome::ContentMatch(_) => "CONTENT",
            MatchOutcome::NoMatch => "NO MATCH",
        }
    }
}

/// Per-run counters, owned by the router and handed back when routing ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTally {
    pub total: usize,
    pub matched: usize,
    pub by_filename: usize,
    pub by_content: usize,
    pub unmatched: usize,
    pub failed: usize,
}
