//! # Scoreboard configuration
//!
//! Product decisions left open by the scoreboard rules. Roster size (eleven)
//! and the goal increment (one) are fixed and not configurable.
//!
//! ```rust
//! use scoreboard_core::config::ScoreboardConfig;
//!
//! let config = ScoreboardConfig::default();
//! assert!(!config.require_rostered_scorer);
//! ```

use crate::error::{Result, ScoreboardError};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path};

pub const CONFIG_PATH_ENV: &str = "SCOREBOARD_CONFIG_PATH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoreboardConfig {
    /// Reject goals credited to a name that is not on the scoring team's
    /// roster. Off by default: such a goal still counts for the team.
    pub require_rostered_scorer: bool,
}

impl ScoreboardConfig {
    /// Team total always equals the sum of its players' goals.
    pub fn strict() -> Self {
        Self { require_rostered_scorer: true }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ScoreboardError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| {
            ScoreboardError::Config(format!(
                "Failed to parse config JSON '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Load from the file named by `SCOREBOARD_CONFIG_PATH`, falling back to
    /// defaults when the variable is unset or blank.
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(CONFIG_PATH_ENV)
    }

    fn from_env_var(var: &str) -> Result<Self> {
        let Ok(path) = env::var(var) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        let config = Self::from_path(path)?;
        log::info!("Loaded scoreboard config from {}='{}'", var, path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_keeps_team_only_goals() {
        assert!(!ScoreboardConfig::default().require_rostered_scorer);
        assert!(ScoreboardConfig::strict().require_rostered_scorer);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        assert_eq!(ScoreboardConfig::from_json("{}").unwrap(), ScoreboardConfig::default());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let err = ScoreboardConfig::from_json(r#"{"squad_size": 7}"#).unwrap_err();
        assert!(matches!(err, ScoreboardError::Config(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"require_rostered_scorer": true}}"#).unwrap();

        let config = ScoreboardConfig::from_path(file.path()).unwrap();
        assert_eq!(config, ScoreboardConfig::strict());
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScoreboardConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ScoreboardError::Config(_)));
    }

    #[test]
    fn test_from_env_var_unset_falls_back_to_default() {
        let config =
            ScoreboardConfig::from_env_var("SCOREBOARD_CONFIG_PATH_UNSET_IN_TESTS").unwrap();
        assert_eq!(config, ScoreboardConfig::default());
    }
}
