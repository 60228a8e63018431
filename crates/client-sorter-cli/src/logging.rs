use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LOG_FILE: &str = "./logs/client-sorter.log";

/// Resolve `LOG_FILE_PATH`. Unset means the default file; empty, `off` or
/// `none` turns file logging off.
fn file_log_path(value: Option<String>) -> Option<PathBuf> {
    match value {
        None => Some(PathBuf::from(DEFAULT_LOG_FILE)),
        Some(v) => {
            let v = v.trim();
            if v.is_empty() || v.eq_ignore_ascii_case("off") || v.eq_ignore_ascii_case("none") {
                None
            } else {
                Some(PathBuf::from(v))
            }
        }
    }
}

/// Split a log path into the appender's directory and file name.
fn appender_parts(path: &Path) -> (PathBuf, PathBuf) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file = path
        .file_name()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("client-sorter.log"));
    (dir, file)
}

/// Console diagnostics go to stderr so stdout carries only result lines.
/// The returned guard flushes the file writer on drop; it is `None` when
/// file logging is off.
pub fn init_logger() -> Option<WorkerGuard> {
    let filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter_layer = EnvFilter::new(filter);

    let log_file = file_log_path(env::var("LOG_FILE_PATH").ok());

    let (file_layer, guard) = match &log_file {
        Some(path) => {
            let (dir, file) = appender_parts(path);
            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));
            let layer = fmt::layer().with_writer(non_blocking).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time()
                .with_ansi(true),
        )
        .with(file_layer)
        .with(filter_layer)
        .init();

    match &log_file {
        Some(path) => debug!("Tracing to stderr and {}", path.display()),
        None => debug!("Tracing to stderr only; file logging is off"),
    }

    guard
}
