// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration handling for the WebBridge analyzer

use crate::error::{AnalyzerError, Result};
use crate::vocabulary::DEFAULT_WORDS_PATH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Word list backing the jargon check, one word per line
    #[serde(default = "default_common_words_path")]
    pub common_words_path: PathBuf,

    /// Where `analyze` persists the last report as JSON, if anywhere
    #[serde(default)]
    pub report_path: Option<PathBuf>,

    /// Directory scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            common_words_path: default_common_words_path(),
            report_path: None,
            scan: ScanConfig::default(),
            log: LogConfig::default(),
        }
    }
}

fn default_common_words_path() -> PathBuf {
    PathBuf::from(DEFAULT_WORDS_PATH)
}

/// Directory scan configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions treated as HTML
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory names never descended into
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            skip_dirs: default_skip_dirs(),
        }
    }
}

impl ScanConfig {
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }

    pub fn skips_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|d| d == name)
    }
}

fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

fn default_skip_dirs() -> Vec<String> {
    [
        "node_modules", ".git", "target", "dist", "build",
        "_build", "vendor", ".next", ".nuxt", "coverage",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Load configuration from a TOML file, or defaults if it does not exist
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("Config file not found at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    debug!(?config, "Loaded configuration");
    Ok(config)
}

/// Default config path, relative to the working directory
pub fn default_config_path() -> PathBuf {
    PathBuf::from("webbridge.toml")
}

/// Write default configuration to a file
pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let content =
        toml::to_string_pretty(&config).map_err(|e| AnalyzerError::Config(e.to_string()))?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.common_words_path, PathBuf::from("common_words_1000.txt"));
        assert!(config.report_path.is_none());
        assert!(config.scan.accepts_extension("HTML"));
        assert!(!config.scan.accepts_extension("css"));
        assert!(config.scan.skips_dir("node_modules"));
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_config(Path::new("/nonexistent/webbridge.toml")).expect("defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("webbridge.toml");
        std::fs::write(
            &path,
            "report_path = \"out/accessibility_report.json\"\n\n[scan]\nextensions = [\"xhtml\"]\n",
        )
        .expect("write config");

        let config = load_config(&path).expect("load config");
        assert_eq!(config.report_path, Some(PathBuf::from("out/accessibility_report.json")));
        assert_eq!(config.scan.extensions, vec!["xhtml"]);
        assert!(config.scan.skips_dir(".git"), "skip_dirs keeps its default");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_write_default_then_load() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested").join("webbridge.toml");
        write_default_config(&path).expect("write config");
        assert_eq!(load_config(&path).expect("load config"), Config::default());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("webbridge.toml");
        std::fs::write(&path, "scan = [").expect("write config");
        assert!(matches!(load_config(&path), Err(AnalyzerError::Toml(_))));
    }
}
