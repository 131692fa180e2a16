//! User settings, stored as JSON in the platform config directory.
//!
//! A missing settings file is not an error: defaults reproduce the standard
//! report layout. Unknown or missing keys fall back to their defaults.

use crate::error::{ReportError, Result, ResultExt as _};
use crate::report::ReportOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "datareport";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogSettings {
    /// Default filter when `RUST_LOG` is not set (e.g. "info", "datareport=debug").
    pub level: String,
    /// Also write daily-rotated log files under the data directory.
    pub log_to_file: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            log_to_file: false,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    /// Data rows shown in each CSV preview table (default: 5)
    pub preview_rows: usize,
    /// Characters of text shown in each content preview (default: 500)
    pub preview_chars: usize,
    /// Entries in each word-frequency table (default: 10)
    pub top_words: usize,
    /// Where `report` writes files when `--output` is not given; current directory if unset
    pub output_dir: Option<PathBuf>,
    pub logging: LogSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        let report = ReportOptions::default();
        Self {
            preview_rows: report.preview_rows,
            preview_chars: report.preview_chars,
            top_words: report.top_words,
            output_dir: None,
            logging: LogSettings::default(),
        }
    }
}

impl AppSettings {
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            preview_rows: self.preview_rows,
            preview_chars: self.preview_chars,
            top_words: self.top_words,
        }
    }

    /// Output directory for saved reports.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// `<config dir>/datareport/config.json`, or `None` if the platform has no config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load settings from `path`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or is not valid JSON.
pub fn load_settings_from(path: &Path) -> Result<AppSettings> {
    if !path.exists() {
        return Ok(AppSettings::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&content).map_err(|e| {
        ReportError::Config(format!("Invalid config file {}: {e}", path.display()))
    })
}

/// Settings in effect, plus the problem with a default config file that was skipped.
#[derive(Debug)]
pub struct LoadedSettings {
    pub settings: AppSettings,
    /// Set when the default config file was unreadable and defaults were used.
    /// Log it once a subscriber is installed.
    pub ignored: Option<String>,
}

/// Load settings from an explicit path, or from the default location.
///
/// A broken file at the default location is reported in
/// [`LoadedSettings::ignored`] and replaced by defaults, while a broken
/// explicit file is an error.
///
/// # Errors
///
/// Returns an error if `explicit` is given and cannot be loaded.
pub fn load_settings(explicit: Option<&Path>) -> Result<LoadedSettings> {
    match explicit {
        Some(path) => load_settings_from(path).map(|settings| LoadedSettings {
            settings,
            ignored: None,
        }),
        None => Ok(load_default_settings(default_config_path().as_deref())),
    }
}

fn load_default_settings(path: Option<&Path>) -> LoadedSettings {
    let Some(path) = path else {
        return LoadedSettings {
            settings: AppSettings::default(),
            ignored: None,
        };
    };
    match load_settings_from(path) {
        Ok(settings) => LoadedSettings {
            settings,
            ignored: None,
        },
        Err(err) => LoadedSettings {
            settings: AppSettings::default(),
            ignored: Some(format!("Ignoring config at {}: {err}", path.display())),
        },
    }
}

/// Write settings as pretty JSON, creating parent directories.
///
/// # Errors
///
/// Returns an error if the file or its directory cannot be written.
pub fn save_settings(settings: &AppSettings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_defaults_match_standard_report() {
        assert_eq!(AppSettings::default().report_options(), ReportOptions::default());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "preview_rows": 3, "logging": { "level": "debug" } }"#).unwrap();

        let loaded = load_settings(Some(&path)).unwrap();
        assert!(loaded.ignored.is_none());
        let settings = loaded.settings;
        assert_eq!(settings.preview_rows, 3);
        assert_eq!(settings.preview_chars, 500);
        assert_eq!(settings.logging.level, "debug");
        assert!(!settings.logging.log_to_file);
    }

    #[test]
    fn test_malformed_explicit_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_settings(Some(&path)), Err(ReportError::Config(_))));
    }

    #[test]
    fn test_malformed_default_file_is_reported_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded = load_default_settings(Some(&path));
        assert_eq!(loaded.settings, AppSettings::default());
        let ignored = loaded.ignored.unwrap();
        assert!(ignored.starts_with("Ignoring config at "));
        assert!(ignored.contains("Invalid config file"));
    }

    #[test]
    fn test_missing_default_file_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_default_settings(Some(&dir.path().join("absent.json")));
        assert!(loaded.ignored.is_none());
        assert!(load_default_settings(None).ignored.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let settings = AppSettings {
            top_words: 20,
            output_dir: Some(PathBuf::from("reports")),
            ..AppSettings::default()
        };

        save_settings(&settings, &path).unwrap();
        assert_eq!(load_settings_from(&path).unwrap(), settings);
    }
}
