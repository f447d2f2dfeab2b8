//! Run configuration.
//!
//! Defaults match the lenient report format. A JSON file can override any
//! subset of fields; command-line flags are applied on top by the CLI.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How failures are written to the output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportMode {
    /// One error line per failed rule; accepted users always get a block
    #[default]
    Lenient,
    /// Only the first failure per user: name, then id, then no recommendations
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    pub mode: ReportMode,
    /// Leave users with an empty watch history out of the output
    pub skip_users_without_history: bool,
    /// Reject movies whose three digits repeat an accepted movie id
    pub check_movie_id_uniqueness: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            mode: ReportMode::Lenient,
            skip_users_without_history: false,
            check_movie_id_uniqueness: true,
        }
    }
}

impl OrchestratorConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Invalid orchestrator config")
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrchestratorConfig::default();
        assert_eq!(config.mode, ReportMode::Lenient);
        assert!(!config.skip_users_without_history);
        assert!(config.check_movie_id_uniqueness);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = OrchestratorConfig::from_json_str(r#"{"mode": "strict"}"#).unwrap();
        assert_eq!(config.mode, ReportMode::Strict);
        assert!(config.check_movie_id_uniqueness);
    }

    #[test]
    fn test_invalid_json() {
        assert!(OrchestratorConfig::from_json_str(r#"{"mode": "loud"}"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"skip_users_without_history": true}"#).unwrap();

        let config = OrchestratorConfig::from_json_file(&path).unwrap();
        assert!(config.skip_users_without_history);
        assert!(OrchestratorConfig::from_json_file(&dir.path().join("missing.json")).is_err());
    }
}
