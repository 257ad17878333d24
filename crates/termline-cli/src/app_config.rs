//! Application configuration loading
//!
//! Reads the user's application config (`.toml` or `.json`) and maps every
//! failure to the sentence shown when the loading spinner stops.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use termline::{Reporter, State};
use thiserror::Error;

/// Spinner text while the config is read.
pub const LOADING_MESSAGE: &str = "Loading your application's configuration";

/// Final spinner text on success.
pub const LOADED_MESSAGE: &str = "Successfully loaded your application's configuration";

/// Trailer after a multi-line parse error.
pub const ERROR_TRAILER: &str = "The error has been printed above";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppKind {
    #[default]
    Desktop,
    Web,
    Node,
}

impl AppKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Web => "web",
            Self::Node => "node",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    pub auto_restart: bool,
    pub resource_directories: Vec<PathBuf>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            auto_restart: true,
            resource_directories: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub name: Option<String>,
    pub kind: AppKind,
    pub node: NodeConfig,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load the configuration because the file path provided was a directory")]
    PathIsDirectory(PathBuf),

    #[error(
        "Failed to load the configuration because the file path provided is invalid or the file doesn't exist in the current directory"
    )]
    InvalidPath {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(
        "Failed to load the configuration because the file extension is unsupported for loading configurations in this app"
    )]
    UnsupportedFileType(PathBuf),

    #[error("Failed to load the configuration because the file does not contain a configuration")]
    Empty(PathBuf),

    #[error("Failed to load your configuration because the file contains errors")]
    Invalid(String),
}

impl ConfigError {
    /// Detailed, possibly multi-line error text for parse failures.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::Invalid(details) => Some(details),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

fn detect_format(path: &Path) -> Option<Format> {
    let ext = path.extension()?.to_str()?;
    if ext.eq_ignore_ascii_case("toml") {
        Some(Format::Toml)
    } else if ext.eq_ignore_ascii_case("json") {
        Some(Format::Json)
    } else {
        None
    }
}

/// Read and parse the config at `path`. No output.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    if path.is_dir() {
        return Err(ConfigError::PathIsDirectory(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::InvalidPath {
        path: path.to_path_buf(),
        source,
    })?;

    let format =
        detect_format(path).ok_or_else(|| ConfigError::UnsupportedFileType(path.to_path_buf()))?;

    if content.trim().is_empty() {
        return Err(ConfigError::Empty(path.to_path_buf()));
    }

    match format {
        Format::Toml => toml::from_str(&content).map_err(|e| ConfigError::Invalid(e.to_string())),
        Format::Json => {
            serde_json::from_str(&content).map_err(|e| ConfigError::Invalid(e.to_string()))
        }
    }
}

/// Load the config behind a spinner.
///
/// Calls `animate` once, then exactly one of `stop(Success)` or
/// `stop(Error)`. Parse errors additionally produce one error line per
/// payload line followed by [`ERROR_TRAILER`].
pub fn load_config<R: Reporter + ?Sized>(reporter: &R, path: &Path) -> Result<AppConfig, ConfigError> {
    reporter.animate(LOADING_MESSAGE);

    match read_config(path) {
        Ok(config) => {
            reporter.stop_animation(State::Success, Some(LOADED_MESSAGE));
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = ?e, "config load failed");
            reporter.stop_animation(State::Error, Some(&e.to_string()));

            if let Some(payload) = e.payload() {
                for line in payload.lines() {
                    reporter.error(&format!("  {line}"));
                }
                reporter.error(ERROR_TRAILER);
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Reporter that records every call as a string.
    #[derive(Default)]
    struct RecordingReporter {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingReporter {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn push(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl Reporter for RecordingReporter {
        fn animate(&self, message: &str) {
            self.push(format!("animate:{message}"));
        }
        fn update_animation(&self, message: &str) {
            self.push(format!("update:{message}"));
        }
        fn stop_animation(&self, state: State, message: Option<&str>) {
            self.push(format!("stop:{state:?}:{}", message.unwrap_or_default()));
        }
        fn info(&self, msg: &str) {
            self.push(format!("info:{msg}"));
        }
        fn success(&self, msg: &str) {
            self.push(format!("success:{msg}"));
        }
        fn warning(&self, msg: &str) {
            self.push(format!("warning:{msg}"));
        }
        fn error(&self, msg: &str) {
            self.push(format!("error:{msg}"));
        }
        fn notice(&self, msg: &str) {
            self.push(format!("notice:{msg}"));
        }
    }

    #[test]
    fn test_defaults_applied() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.toml");
        fs::write(&path, "name = \"demo\"\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.name.as_deref(), Some("demo"));
        assert_eq!(config.kind, AppKind::Desktop);
        assert!(config.node.auto_restart);
        assert!(config.node.resource_directories.is_empty());
    }

    #[test]
    fn test_json_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.json");
        fs::write(
            &path,
            r#"{"kind": "node", "node": {"auto_restart": false, "resource_directories": ["assets"]}}"#,
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.kind, AppKind::Node);
        assert!(!config.node.auto_restart);
        assert_eq!(config.node.resource_directories, vec![PathBuf::from("assets")]);
    }

    #[test]
    fn test_error_variants() {
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            read_config(temp.path()),
            Err(ConfigError::PathIsDirectory(_))
        ));
        assert!(matches!(
            read_config(&temp.path().join("missing.toml")),
            Err(ConfigError::InvalidPath { .. })
        ));

        let yaml = temp.path().join("app.yaml");
        fs::write(&yaml, "name: x").unwrap();
        assert!(matches!(
            read_config(&yaml),
            Err(ConfigError::UnsupportedFileType(_))
        ));

        let empty = temp.path().join("empty.toml");
        fs::write(&empty, "  \n").unwrap();
        assert!(matches!(read_config(&empty), Err(ConfigError::Empty(_))));
    }

    #[test]
    fn test_load_success_contract() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.toml");
        fs::write(&path, "kind = \"web\"\n").unwrap();

        let reporter = RecordingReporter::default();
        let config = load_config(&reporter, &path).unwrap();
        assert_eq!(config.kind, AppKind::Web);
        assert_eq!(
            reporter.calls(),
            vec![
                format!("animate:{LOADING_MESSAGE}"),
                format!("stop:Success:{LOADED_MESSAGE}"),
            ]
        );
    }

    #[test]
    fn test_load_parse_error_prints_payload() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("app.toml");
        fs::write(&path, "kind = \"web\"\nname = \n").unwrap();

        let reporter = RecordingReporter::default();
        let err = load_config(&reporter, &path).unwrap_err();
        let payload_lines = err.payload().unwrap().lines().count();
        assert!(payload_lines >= 1);

        let calls = reporter.calls();
        assert_eq!(calls[0], format!("animate:{LOADING_MESSAGE}"));
        assert_eq!(
            calls[1],
            "stop:Error:Failed to load your configuration because the file contains errors"
        );
        assert_eq!(calls.len(), 2 + payload_lines + 1);
        assert!(calls[2..calls.len() - 1].iter().all(|c| c.starts_with("error:  ")));
        assert_eq!(calls.last().unwrap(), &format!("error:{ERROR_TRAILER}"));
    }

    #[test]
    fn test_load_missing_file_has_single_stop() {
        let temp = TempDir::new().unwrap();
        let reporter = RecordingReporter::default();
        load_config(&reporter, &temp.path().join("nope.toml")).unwrap_err();

        let calls = reporter.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls[1].starts_with("stop:Error:Failed to load the configuration because the file path provided is invalid"));
    }
}
