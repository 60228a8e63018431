mod command;
mod plain;

pub use command::CommandExtractor;
pub use plain::PlainTextExtractor;

use crate::config::ExtractorConfig;
use crate::models::DocumentKind;
use std::path::Path;

/// Best-effort text of a document.
///
/// Implementations return an empty string when nothing could be read; a
/// failed extraction must never abort routing. Tests substitute mocks here.
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> String;
}

/// Reads plain text directly and hands PDF/DOCX to an external command.
pub struct DocumentExtractor {
    plain: PlainTextExtractor,
    external: CommandExtractor,
}

impl DocumentExtractor {
    pub fn new(external: CommandExtractor) -> Self {
        Self {
            plain: PlainTextExtractor,
            external,
        }
    }

    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self::new(CommandExtractor::new(&config.program, config.args.as_slice()))
    }
}

impl TextExtractor for DocumentExtractor {
    fn extract(&self, path: &Path) -> String {
        match DocumentKind::from_path(path) {
            Some(DocumentKind::PlainText) => self.plain.extract(path),
            Some(DocumentKind::Pdf) | Some(DocumentKind::Docx) => self.external.extract(path),
            None => String::new(),
        }
    }
}
