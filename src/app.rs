use adw::Application;
use directories::BaseDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::SettingsError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Regional,
}

impl Language {
    pub fn label(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Regional => "Regional",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::Regional,
            Language::Regional => Language::English,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub reply_delay_ms: u64,
    pub splash_duration_ms: u64,
    pub show_splash: bool,
    pub show_onboarding: bool,
    pub language: Language,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            splash_duration_ms: 3000,
            show_splash: true,
            show_onboarding: true,
            language: Language::English,
        }
    }
}

impl AppSettings {
    fn toml_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        Some(base.config_dir().join("hydrospatial.toml"))
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str::<AppSettings>(text)?)
    }

    pub fn read_from(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// The settings file is optional; anything unreadable falls back to defaults.
    pub fn load() -> Self {
        let Some(path) = Self::toml_path() else {
            warn!("{}, using default settings", SettingsError::NoConfigDir);
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::read_from(&path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("{e}, using default settings");
                Self::default()
            }
        }
    }

    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }
}

pub fn build_ui(app: &Application) {
    let settings = AppSettings::load();
    crate::ui::widgets::install_css();
    if settings.show_splash {
        crate::ui::splash::show_splash_window(app, settings);
    } else {
        show_entry(app, &settings);
    }
}

/// First screen after the splash: onboarding, or straight to the dashboard.
pub fn show_entry(app: &Application, settings: &AppSettings) {
    if settings.show_onboarding {
        crate::ui::onboarding::show_onboarding_window(app, settings.clone());
    } else {
        crate::ui::main_window::show_main_window(app, settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let settings = AppSettings::from_toml_str("").unwrap();
        assert_eq!(settings, AppSettings::default());
        assert_eq!(settings.reply_delay(), Duration::from_millis(1000));
        assert_eq!(settings.splash_duration(), Duration::from_millis(3000));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = AppSettings::from_toml_str(
            "reply_delay_ms = 250\nshow_onboarding = false\nlanguage = \"Hindi\"\n",
        )
        .unwrap();
        assert_eq!(settings.reply_delay_ms, 250);
        assert!(!settings.show_onboarding);
        assert!(settings.show_splash);
        assert_eq!(settings.language, Language::Hindi);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let err = AppSettings::from_toml_str("reply_delay_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = AppSettings::read_from(Path::new("/nonexistent/hydrospatial.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }

    #[test]
    fn language_cycles_back_to_english() {
        let mut lang = Language::English;
        for _ in 0..3 {
            lang = lang.next();
        }
        assert_eq!(lang, Language::English);
        assert_eq!(Language::Hindi.label(), "हिंदी");
    }
}
