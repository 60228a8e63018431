use super::TextExtractor;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, error, warn};

/// Runs `program args... <absolute path>` and captures its stdout as the text.
///
/// The call blocks until the child exits; there is no timeout.
pub struct CommandExtractor {
    program: String,
    args: Vec<String>,
}

impl CommandExtractor {
    pub fn new<S: AsRef<str>>(program: &str, args: &[S]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }
}

fn absolute_path(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

impl TextExtractor for CommandExtractor {
    fn extract(&self, path: &Path) -> String {
        let target = absolute_path(path);
        debug!(
            "Executing extractor: {} {:?} \"{}\"",
            self.program,
            self.args,
            target.display()
        );

        let output = match Command::new(&self.program)
            .args(&self.args)
            .arg(&target)
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => output,
            Err(err) => {
                error!(
                    "Failed to launch extractor '{}' for {}: {}",
                    self.program,
                    target.display(),
                    err
                );
                return String::new();
            }
        };

        debug!(
            "Extractor exited with {} ({} bytes of output)",
            output.status,
            output.stdout.len()
        );

        if !output.status.success() {
            warn!(
                "Extractor '{}' failed on {} ({}): {}",
                self.program,
                target.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return String::new();
        }

        String::from_utf8_lossy(&output.stdout).into_owned()
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_captures_stdout() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("brief.pdf");
        fs::write(&path, "Counsel for Jane Smith").unwrap();

        let extractor = CommandExtractor::new::<&str>("cat", &[]);
        assert_eq!(extractor.extract(&path), "Counsel for Jane Smith");
    }

    #[test]
    fn test_path_is_passed_last_and_absolute() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("brief.docx");
        fs::write(&path, "").unwrap();

        let extractor = CommandExtractor::new("echo", &["-n"]);
        let text = extractor.extract(&path);
        assert!(Path::new(&text).is_absolute());
        assert!(text.ends_with("brief.docx"));
    }

    #[test]
    fn test_launch_failure_is_empty() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("brief.pdf");
        fs::write(&path, "content").unwrap();

        let extractor = CommandExtractor::new::<&str>("definitely-not-an-extractor-binary", &[]);
        assert_eq!(extractor.extract(&path), "");
    }

    #[test]
    fn test_nonzero_exit_is_empty() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("brief.pdf");
        fs::write(&path, "content").unwrap();

        let extractor = CommandExtractor::new("sh", &["-c", "echo partial; exit 3"]);
        assert_eq!(extractor.extract(&path), "");
    }
}
