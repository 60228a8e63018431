use crate::error::Error;
use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Glob patterns pruned from the source walk.
    pub ignore_patterns: Vec<String>,
    pub extractor: ExtractorConfig,
}

/// External process used to pull text out of PDF and DOCX files.
/// The file's absolute path is appended after `args`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            args: vec!["read_files.py".to_string()],
        }
    }
}

pub fn load_configuration() -> Result<AppConfig, Error> {
    load_configuration_from("Config")
}

/// Load from `<name>.toml` (optional), then `CLIENT_SORTER__*` environment overrides.
pub fn load_configuration_from(name: &str) -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(name).required(false))
        .add_source(Environment::with_prefix("CLIENT_SORTER").separator("__"))
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = tempdir().unwrap();
        let name = tmp.path().join("Absent");
        let config = load_configuration_from(name.to_str().unwrap()).unwrap();
        assert!(config.ignore_patterns.is_empty());
        assert_eq!(config.extractor.program, "python");
        assert_eq!(config.extractor.args, vec!["read_files.py".to_string()]);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join("Config.toml"),
            r#"
ignore_patterns = ["**/archive/**"]

[extractor]
program = "pdftotext-wrapper"
args = ["--stdout"]
"#,
        )
        .unwrap();

        let name = tmp.path().join("Config");
        let config = load_configuration_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config.ignore_patterns, vec!["**/archive/**".to_string()]);
        assert_eq!(config.extractor.program, "pdftotext-wrapper");
        assert_eq!(config.extractor.args, vec!["--stdout".to_string()]);
    }

    #[test]
    fn test_partial_extractor_section_keeps_default_args() {
        let tmp = tempdir().unwrap();
        fs::write(
            tmp.path().join("Config.toml"),
            "[extractor]\nprogram = \"python3\"\n",
        )
        .unwrap();

        let name = tmp.path().join("Config");
        let config = load_configuration_from(name.to_str().unwrap()).unwrap();
        assert_eq!(config.extractor.program, "python3");
        assert_eq!(config.extractor.args, vec!["read_files.py".to_string()]);
    }
}
