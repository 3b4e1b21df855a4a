//! RON config loader
//!
//! Finds and parses `config.ron`, validating every value before use.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::habits::MAX_STREAK_WINDOW_DAYS;

/// Environment variable that points at an explicit config file
pub const CONFIG_ENV: &str = "FOCUSFIRST_CONFIG";

/// Config file name inside the platform config directory
const CONFIG_FILE: &str = "config.ron";

/// Fallback config shipped next to the binary
const ASSETS_CONFIG: &str = "assets/config.ron";

/// User-facing settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FocusConfig {
    /// Name shown in the greeting and on the profile
    pub user_name: String,
    /// "Member since" label on the profile
    pub member_since: String,
    /// Current quarter label, e.g. "Q1 2026"
    pub quarter: String,
    /// Current week inside the quarter (1-based)
    pub week: u32,
    /// Number of weeks in the quarter
    pub total_weeks: u32,
    /// Daily screen-time goal in hours
    pub screen_time_goal_hours: u32,
    /// How many days the streak calendar shows (today included)
    pub streak_window_days: u32,
    /// Fixed RNG seed for reproducible mock data
    pub seed: Option<u64>,
    /// Frame interval in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            user_name: "Edu".to_string(),
            member_since: "January 2026".to_string(),
            quarter: "Q1 2026".to_string(),
            week: 4,
            total_weeks: 12,
            screen_time_goal_hours: 3,
            streak_window_days: 21,
            seed: None,
            tick_rate_ms: 16,
        }
    }
}

/// Config loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl FocusConfig {
    /// Parse a config from RON text
    pub fn from_ron(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: FocusConfig = ron::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text, path)
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_weeks == 0 {
            return Err(ConfigError::Invalid {
                field: "total_weeks",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.week == 0 || self.week > self.total_weeks {
            return Err(ConfigError::Invalid {
                field: "week",
                reason: format!("must be within 1..={}", self.total_weeks),
            });
        }
        if self.screen_time_goal_hours > 24 {
            return Err(ConfigError::Invalid {
                field: "screen_time_goal_hours",
                reason: "must be within 0..=24".to_string(),
            });
        }
        if self.streak_window_days == 0 || self.streak_window_days > MAX_STREAK_WINDOW_DAYS {
            return Err(ConfigError::Invalid {
                field: "streak_window_days",
                reason: format!("must be within 1..={}", MAX_STREAK_WINDOW_DAYS),
            });
        }
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "tick_rate_ms",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Get the platform config file path
pub fn config_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "focusfirst", "FocusFirst") {
        proj_dirs.config_dir().join(CONFIG_FILE)
    } else {
        // Fallback to current directory
        PathBuf::from(CONFIG_FILE)
    }
}

/// Candidate config files in lookup order
fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        paths.push(PathBuf::from(explicit));
    }
    paths.push(config_path());
    paths.push(PathBuf::from(ASSETS_CONFIG));
    paths
}

/// Load the first config file found, falling back to defaults
pub fn load_config() -> FocusConfig {
    for path in candidate_paths() {
        if !path.exists() {
            continue;
        }
        match FocusConfig::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                return config;
            }
            Err(e) => {
                log::warn!("{}. Using defaults.", e);
                return FocusConfig::default();
            }
        }
    }
    log::info!("No config file found, using defaults");
    FocusConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(FocusConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_ron_fills_defaults() {
        let config = FocusConfig::from_ron(
            r#"(user_name: "Ana", screen_time_goal_hours: 2, seed: Some(7))"#,
            Path::new("test.ron"),
        )
        .unwrap();
        assert_eq!(config.user_name, "Ana");
        assert_eq!(config.screen_time_goal_hours, 2);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.streak_window_days, 21);
        assert_eq!(config.quarter, "Q1 2026");
    }

    #[test]
    fn test_week_past_quarter_rejected() {
        let err = FocusConfig::from_ron("(week: 13, total_weeks: 12)", Path::new("test.ron"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "week", .. }));
    }

    #[test]
    fn test_goal_hours_out_of_range_rejected() {
        let err = FocusConfig::from_ron("(screen_time_goal_hours: 30)", Path::new("test.ron"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "screen_time_goal_hours", .. }));
    }

    #[test]
    fn test_streak_window_bounds() {
        let huge = FocusConfig { streak_window_days: 200_000_000, ..FocusConfig::default() };
        assert!(matches!(
            huge.validate(),
            Err(ConfigError::Invalid { field: "streak_window_days", .. })
        ));
        let year = FocusConfig { streak_window_days: 366, ..FocusConfig::default() };
        assert!(year.validate().is_ok());
        let empty = FocusConfig { streak_window_days: 0, ..FocusConfig::default() };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let err = FocusConfig::from_ron("(user_name: ", Path::new("broken.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("broken.ron"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FocusConfig::from_file(Path::new("/definitely/not/here/config.ron")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
