//! User settings for fintrack
//!
//! Display preferences, default report policies and the color theme.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::FintrackPaths;
use crate::display::report::is_date_format;
use crate::error::FintrackError;
use crate::reports::dashboard::{DEFAULT_RECENT, DEFAULT_WINDOW};
use crate::reports::{CategoryGrouping, TrendBucketing};

/// Color theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// User settings for fintrack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Default trend bucketing
    #[serde(default)]
    pub trend_bucketing: TrendBucketing,

    /// Default breakdown grouping
    #[serde(default)]
    pub category_grouping: CategoryGrouping,

    /// Number of leading transactions the dashboard considers
    #[serde(default = "default_dashboard_window")]
    pub dashboard_window: usize,

    /// Number of recent transactions the dashboard lists
    #[serde(default = "default_recent_transactions")]
    pub recent_transactions: usize,

    #[serde(default)]
    pub theme: Theme,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_dashboard_window() -> usize {
    DEFAULT_WINDOW
}

fn default_recent_transactions() -> usize {
    DEFAULT_RECENT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            trend_bucketing: TrendBucketing::default(),
            category_grouping: CategoryGrouping::default(),
            dashboard_window: default_dashboard_window(),
            recent_transactions: default_recent_transactions(),
            theme: Theme::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &FintrackPaths) -> Result<Self, FintrackError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            tracing::debug!(path = %settings_path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| FintrackError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| FintrackError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;

        Ok(settings)
    }

    /// Reject values the report formatters cannot use
    pub fn validate(&self) -> Result<(), FintrackError> {
        if !is_date_format(&self.date_format) {
            return Err(FintrackError::Config(format!(
                "date_format '{}' cannot format a calendar date",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FintrackPaths) -> Result<(), FintrackError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| FintrackError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| FintrackError::Io(format!("Failed to write settings file: {}", e)))?;

        tracing::debug!(path = %settings_path.display(), "saved settings");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.trend_bucketing, TrendBucketing::MonthLabel);
        assert_eq!(settings.category_grouping, CategoryGrouping::Name);
        assert_eq!(settings.dashboard_window, 10);
        assert_eq!(settings.recent_transactions, 5);
        assert_eq!(settings.theme, Theme::Light);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().join("config"));

        let settings = Settings {
            trend_bucketing: TrendBucketing::YearMonth,
            theme: Theme::Dark,
            dashboard_window: 25,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "€"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.date_format, "%Y-%m-%d");
        assert_eq!(loaded.recent_transactions, 5);
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Config(_)));
    }

    #[test]
    fn test_time_only_date_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"date_format": "%H:%M"}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, FintrackError::Config(_)));
        assert!(err.to_string().contains("%H:%M"));
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
