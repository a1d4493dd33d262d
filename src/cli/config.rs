//! Configuration file
//!
//! ```json
//! {
//!   "data_dir": "./data",
//!   "round_trip_timeout_ms": 500,
//!   "strict_decode": false,
//!   "log_level": "info"
//! }
//! ```
//!
//! Only `data_dir` is required.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::index::{IndexConfig, MalformedPolicy};
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

const SNAPSHOT_FILE: &str = "slots.snap";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding the store snapshot
    pub data_dir: String,

    /// Budget per store round trip; absent means no deadline
    #[serde(default)]
    pub round_trip_timeout_ms: Option<u64>,

    /// Fail queries on undecodable members instead of skipping them
    #[serde(default)]
    pub strict_decode: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load and validate configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;
        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }
        if self.round_trip_timeout_ms == Some(0) {
            return Err(CliError::config_error("round_trip_timeout_ms must be > 0"));
        }
        self.severity()?;
        Ok(())
    }

    pub fn severity(&self) -> CliResult<Severity> {
        self.log_level.parse().map_err(CliError::config_error)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(SNAPSHOT_FILE)
    }

    pub fn index_config(&self) -> IndexConfig {
        let policy = if self.strict_decode {
            MalformedPolicy::Fail
        } else {
            MalformedPolicy::SkipAndLog
        };
        IndexConfig {
            round_trip_timeout: self.round_trip_timeout_ms.map(Duration::from_millis),
            malformed_policy: policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = Config::parse(r#"{"data_dir": "./data"}"#).unwrap();
        assert_eq!(config.round_trip_timeout_ms, None);
        assert!(!config.strict_decode);
        assert_eq!(config.severity().unwrap(), Severity::Info);
        assert_eq!(config.snapshot_path(), Path::new("./data").join("slots.snap"));

        let index = config.index_config();
        assert!(index.round_trip_timeout.is_none());
        assert_eq!(index.malformed_policy, MalformedPolicy::SkipAndLog);
    }

    #[test]
    fn test_full_config() {
        let config = Config::parse(
            r#"{"data_dir":"/d","round_trip_timeout_ms":250,"strict_decode":true,"log_level":"warn"}"#,
        )
        .unwrap();
        let index = config.index_config();
        assert_eq!(index.round_trip_timeout, Some(Duration::from_millis(250)));
        assert_eq!(index.malformed_policy, MalformedPolicy::Fail);
        assert_eq!(config.severity().unwrap(), Severity::Warn);
    }

    #[test]
    fn test_invalid_configs_rejected() {
        assert!(Config::parse("{}").is_err());
        assert!(Config::parse(r#"{"data_dir": ""}"#).is_err());
        assert!(Config::parse(r#"{"data_dir":"d","round_trip_timeout_ms":0}"#).is_err());
        assert!(Config::parse(r#"{"data_dir":"d","log_level":"loud"}"#).is_err());
        assert!(Config::parse(r#"{"data_dir":"d","extra":1}"#).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rosterdb.json");
        fs::write(&path, r#"{"data_dir": "x"}"#).unwrap();
        assert_eq!(Config::load(&path).unwrap().data_dir, "x");

        let missing = Config::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(missing.message().contains("Failed to read config"));
    }
}
