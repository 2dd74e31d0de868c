//! Application configuration.
//!
//! # Responsibility
//! - Provide defaults for the screen title, tick interval and colors.
//! - Read the app name from an Expo-style `app.json` manifest.
//! - Apply environment overrides for hosts.
//!
//! # Invariants
//! - Overrides never produce a zero `tick_interval`; the ticker treats a
//!   zero interval set directly as the default.
//! - `app_name` is never empty.

use crate::calendar::view::CalendarTheme;
use crate::model::marker::DEFAULT_DOT_COLOR;
use crate::timer::ticker::DEFAULT_TICK_INTERVAL;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Env var naming an `app.json` manifest to load.
pub const APP_JSON_ENV: &str = "DAYTIMER_APP_JSON";
/// Env var overriding the tick interval in milliseconds.
pub const TICK_MS_ENV: &str = "DAYTIMER_TICK_MS";

const DEFAULT_APP_NAME: &str = "daytimer";
const DEFAULT_TITLE: &str = "Time Management App";

#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
    MissingAppName,
    InvalidTickInterval(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid app manifest: {err}"),
            Self::MissingAppName => write!(f, "app manifest has an empty `expo.name`"),
            Self::InvalidTickInterval(value) => write!(
                f,
                "invalid tick interval `{value}`; expected a positive number of milliseconds"
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::MissingAppName | Self::InvalidTickInterval(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

#[derive(Deserialize)]
struct AppManifest {
    expo: ExpoSection,
}

#[derive(Deserialize)]
struct ExpoSection {
    name: String,
}

/// Settings shared by every host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Name the root screen is registered under.
    pub app_name: String,
    /// Heading shown at the top of the screen.
    pub title: String,
    pub tick_interval: Duration,
    /// Dot color for days with tasks.
    pub marker_color: String,
    pub theme: CalendarTheme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            title: DEFAULT_TITLE.to_string(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            marker_color: DEFAULT_DOT_COLOR.to_string(),
            theme: CalendarTheme::default(),
        }
    }
}

impl AppConfig {
    /// Defaults with the app name taken from `app.json` content.
    pub fn from_app_json(json: &str) -> Result<Self, ConfigError> {
        let manifest: AppManifest = serde_json::from_str(json)?;
        let name = manifest.expo.name.trim();
        if name.is_empty() {
            return Err(ConfigError::MissingAppName);
        }
        Ok(Self {
            app_name: name.to_string(),
            ..Self::default()
        })
    }

    /// Reads and parses an `app.json` file.
    pub fn load_app_json(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_app_json(&json)
    }

    /// Defaults, then `DAYTIMER_APP_JSON`, then `DAYTIMER_TICK_MS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = match non_empty_env(APP_JSON_ENV) {
            Some(path) => Self::load_app_json(path)?,
            None => Self::default(),
        };
        config.with_env_overrides()
    }

    /// Applies `DAYTIMER_TICK_MS` when set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        match non_empty_env(TICK_MS_ENV) {
            Some(raw) => self.with_tick_override(&raw),
            None => Ok(self),
        }
    }

    /// Replaces the tick interval with `raw` milliseconds.
    pub fn with_tick_override(mut self, raw: &str) -> Result<Self, ConfigError> {
        let millis = raw
            .trim()
            .parse::<u64>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| ConfigError::InvalidTickInterval(raw.trim().to_string()))?;
        self.tick_interval = Duration::from_millis(millis);
        Ok(self)
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn defaults_describe_the_stock_screen() {
        let config = AppConfig::default();
        assert_eq!(config.title, "Time Management App");
        assert_eq!(config.tick_interval, Duration::from_millis(1000));
        assert_eq!(config.marker_color, "blue");
        assert_eq!(config.theme.selected_day_background, "blue");
        assert_eq!(config.theme.today_text_color, "red");
    }

    #[test]
    fn from_app_json_reads_expo_name() {
        let config =
            AppConfig::from_app_json(r#"{"expo":{"name":"planner","slug":"planner"}}"#).unwrap();
        assert_eq!(config.app_name, "planner");
    }

    #[test]
    fn from_app_json_rejects_blank_name_and_bad_shape() {
        assert!(matches!(
            AppConfig::from_app_json(r#"{"expo":{"name":"  "}}"#),
            Err(ConfigError::MissingAppName)
        ));
        assert!(matches!(
            AppConfig::from_app_json(r#"{"name":"planner"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn load_app_json_reads_file_and_reports_missing_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"expo":{{"name":"from-file"}}}}"#).unwrap();
        let config = AppConfig::load_app_json(file.path()).unwrap();
        assert_eq!(config.app_name, "from-file");

        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load_app_json(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn env_overrides_apply_on_top_of_loaded_manifest() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"expo":{{"name":"from-file"}}}}"#).unwrap();

        std::env::set_var(super::TICK_MS_ENV, "40");
        let config = AppConfig::load_app_json(file.path())
            .and_then(AppConfig::with_env_overrides);
        std::env::remove_var(super::TICK_MS_ENV);

        let config = config.unwrap();
        assert_eq!(config.app_name, "from-file");
        assert_eq!(config.tick_interval, Duration::from_millis(40));
    }

    #[test]
    fn tick_override_requires_positive_millis() {
        let config = AppConfig::default().with_tick_override(" 250 ").unwrap();
        assert_eq!(config.tick_interval, Duration::from_millis(250));

        assert!(AppConfig::default().with_tick_override("0").is_err());
        assert!(AppConfig::default().with_tick_override("fast").is_err());
    }
}
