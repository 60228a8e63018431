use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid client entry '{0}': expected 'First Last' or 'First Middle Last'")]
    InvalidClient(String),

    #[error("Invalid source directory: {}", .0.display())]
    InvalidSource(PathBuf),

    #[error("Cannot create destination directory {}: {source}", .path.display())]
    Destination {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No clients provided")]
    EmptyRoster,
}
