//! Configuration file handling
//!
//! A JSON object; every key is optional. Without a config path the
//! defaults apply.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::observability::Severity;
use crate::record::SeededSource;
use crate::validation::Validator;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Start from the sample records when nothing was saved (default true)
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,

    /// Offered courses; empty accepts any non-empty course
    #[serde(default)]
    pub courses: Vec<String>,

    /// Minimum log severity (default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_seed_sample_data() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed_sample_data(),
            courses: Vec::new(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        self.severity()?;

        if self.courses.iter().any(|course| course.trim().is_empty()) {
            return Err(CliError::config_error("courses must not contain blank names"));
        }

        Ok(())
    }

    /// Parsed `log_level`
    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(CliError::config_error)
    }

    /// Validator enforcing the configured course list
    pub fn validator(&self) -> Validator {
        Validator::with_courses(self.courses.iter().map(|course| course.trim()))
    }

    /// Record source for this session
    pub fn source(&self) -> SeededSource {
        if self.seed_sample_data {
            SeededSource::new()
        } else {
            SeededSource::unseeded()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_config(temp_dir: &TempDir, config: serde_json::Value) -> std::path::PathBuf {
        let config_path = temp_dir.path().join("studentdb.json");
        fs::write(&config_path, config.to_string()).unwrap();
        config_path
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, json!({}));

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.seed_sample_data);
        assert!(config.courses.is_empty());
        assert_eq!(config.severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_config_with_courses() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(
            &temp_dir,
            json!({"courses": ["BCA", "B.Tech"], "log_level": "warn", "seed_sample_data": false}),
        );

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.validator().courses(), ["BCA", "B.Tech"]);
        assert_eq!(config.severity().unwrap(), Severity::Warn);
        assert!(!config.seed_sample_data);
    }

    #[test]
    fn test_config_rejects_unknown_level() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, json!({"log_level": "verbose"}));

        let err = Config::load(&config_path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
        assert!(err.message().contains("verbose"));
    }

    #[test]
    fn test_config_rejects_blank_course() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_config(&temp_dir, json!({"courses": ["BCA", "  "]}));

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_config_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load(&temp_dir.path().join("absent.json")).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_load_or_default_without_path() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }
}
