use super::TextExtractor;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Whole-file read, decoded as lossy UTF-8.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> String {
        match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(err) => {
                warn!("Error reading {}: {}", path.display(), err);
                String::new()
            }
        }
    }
}
