//! Settings module - host preferences stored as JSON in the user config dir
//!
//! Only window preferences live here. Language, quadrant filter and the
//! carousel position are session state and are never written.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

use zen_garden_landing::ControllerConfig;

const CONFIG_FILE_NAME: &str = "settings.json";
const APP_NAME: &str = "zen-garden-landing";

/// Lower bound so a bad config cannot spin the carousel
const MIN_AUTOPLAY_MS: u64 = 1000;

/// Theme mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    pub theme_mode: ThemeMode,
    pub autoplay_interval_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::System,
            autoplay_interval_ms: zen_garden_landing::limits::DEFAULT_AUTOPLAY_INTERVAL.as_millis() as u64,
        }
    }
}

impl AppSettings {
    fn config_file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn controller_config(&self) -> ControllerConfig {
        ControllerConfig {
            autoplay_interval: Duration::from_millis(self.autoplay_interval_ms.max(MIN_AUTOPLAY_MS)),
        }
    }

    /// Load from the user config dir, defaults when missing
    pub fn load() -> Self {
        match Self::config_file_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            _ => Self::default(),
        }
    }

    /// Unknown or malformed fields fall back to their defaults one by one.
    pub fn load_from_path(path: &Path) -> Self {
        let mut settings = Self::default();

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), "cannot read settings: {}", e);
                return settings;
            }
        };
        let json = match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(j) => j,
            Err(e) => {
                warn!(path = %path.display(), "malformed settings, using defaults: {}", e);
                return settings;
            }
        };

        if let Some(theme) = json.get("theme_mode").and_then(|v| v.as_str()) {
            settings.theme_mode = ThemeMode::from_str(theme);
        }
        if let Some(ms) = json.get("autoplay_interval_ms").and_then(|v| v.as_u64()) {
            settings.autoplay_interval_ms = ms;
        }

        settings
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path().context("Failed to get config directory")?;
        self.save_to_path(&path)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        let json = serde_json::json!({
            "theme_mode": self.theme_mode.as_str(),
            "autoplay_interval_ms": self.autoplay_interval_ms,
        });

        let content = serde_json::to_string_pretty(&json).context("Failed to serialize settings")?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings::load_from_path(&dir.path().join("settings.json"));
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.autoplay_interval_ms, 7000);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings { theme_mode: ThemeMode::Dark, autoplay_interval_ms: 4000 };
        settings.save_to_path(&path).unwrap();
        assert_eq!(AppSettings::load_from_path(&path), settings);
    }

    #[test]
    fn test_bad_fields_fall_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme_mode": "light", "autoplay_interval_ms": "soon"}"#).unwrap();
        let settings = AppSettings::load_from_path(&path);
        assert_eq!(settings.theme_mode, ThemeMode::Light);
        assert_eq!(settings.autoplay_interval_ms, 7000);

        fs::write(&path, "not json").unwrap();
        assert_eq!(AppSettings::load_from_path(&path), AppSettings::default());
    }

    #[test]
    fn test_interval_is_clamped() {
        let settings = AppSettings { theme_mode: ThemeMode::System, autoplay_interval_ms: 10 };
        assert_eq!(settings.controller_config().autoplay_interval, Duration::from_millis(1000));
    }

    #[test]
    fn test_theme_mode_cycle() {
        assert_eq!(ThemeMode::from_str("DARK"), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_str("sepia"), ThemeMode::System);
        assert_eq!(ThemeMode::System.next().next().next(), ThemeMode::System);
    }
}
