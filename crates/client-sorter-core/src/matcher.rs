use crate::extractor::TextExtractor;
use crate::models::{CandidateFile, ClientIdentity, MatchOutcome};
use crate::normalize::normalize;
use tracing::debug;

/// Substring test on already-normalized text. Middle names never count.
fn contains_names(normalized: &str, client: &ClientIdentity) -> bool {
    normalized.contains(&normalize(&client.first)) && normalized.contains(&normalize(&client.last))
}

/// True when the file's base name contains both the first and last name.
pub fn filename_matches(file: &CandidateFile, client: &ClientIdentity) -> bool {
    contains_names(&normalize(&file.file_name()), client)
}

/// True when non-empty extracted text contains both the first and last name.
pub fn content_matches(text: &str, client: &ClientIdentity) -> bool {
    if text.is_empty() {
        return false;
    }
    contains_names(&normalize(text), client)
}

/// Single-client check: filename evidence first, then content.
pub fn matches(
    file: &CandidateFile,
    client: &ClientIdentity,
    extractor: &dyn TextExtractor,
) -> bool {
    filename_matches(file, client) || content_matches(&extractor.extract(&file.path), client)
}

/// Decide which client, if any, a file belongs to.
///
/// Every client is tried on the file name first, in roster order. Only when
/// none match is the text extracted, once, and the roster scanned again. The
/// lowest matching index wins in both phases.
pub fn find_match(
    file: &CandidateFile,
    roster: &[ClientIdentity],
    extractor: &dyn TextExtractor,
) -> MatchOutcome {
    let file_name = normalize(&file.file_name());
    for (index, client) in roster.iter().enumerate() {
        if contains_names(&file_name, client) {
            return MatchOutcome::FilenameMatch(index);
        }
    }

    let text = extractor.extract(&file.path);
    if text.is_empty() {
        debug!("No text extracted from {}", file.path.display());
        return MatchOutcome::NoMatch;
    }

    let text = normalize(&text);
    for (index, client) in roster.iter().enumerate() {
        if contains_names(&text, client) {
            return MatchOutcome::ContentMatch(index);
        }
    }

    MatchOutcome::NoMatch
}
