use std::env;
use std::fmt;
use std::fs;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::AppPaths;
use crate::error::AppResult;

/// Fixed storage key for the persisted theme choice.
pub const THEME_KEY: &str = "portfolio_theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Label of the toggle button: it shows the theme you would switch to.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// System preference read from the terminal's `COLORFGBG` signal.
    pub fn system_preference() -> Self {
        Self::from_colorfgbg(env::var("COLORFGBG").ok().as_deref())
    }

    fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|value| value.rsplit(';').next())
            .and_then(|background| background.trim().parse::<u8>().ok());

        match background {
            Some(7) | Some(15) => Self::Light,
            _ => Self::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait ThemeStore {
    fn load(&self, profile: &str) -> AppResult<Option<Theme>>;
    fn save(&self, profile: &str, theme: Theme) -> AppResult<()>;

    /// Stored choice, falling back to the system preference on first use.
    fn resolve(&self, profile: &str) -> AppResult<Theme> {
        Ok(self
            .load(profile)?
            .unwrap_or_else(Theme::system_preference))
    }
}

/// Keeps the theme under [`THEME_KEY`] in the per-profile state file,
/// preserving any other keys already stored there.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    paths: AppPaths,
}

impl FileThemeStore {
    pub fn new(paths: AppPaths) -> Self {
        Self { paths }
    }

    fn read_state(&self, profile: &str) -> AppResult<Map<String, Value>> {
        let path = self.paths.state_file(profile);
        if !path.exists() {
            return Ok(Map::new());
        }

        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self, profile: &str) -> AppResult<Option<Theme>> {
        let state = self.read_state(profile)?;
        let theme = state
            .get(THEME_KEY)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok());
        Ok(theme)
    }

    fn save(&self, profile: &str, theme: Theme) -> AppResult<()> {
        let mut state = self.read_state(profile)?;
        state.insert(THEME_KEY.to_string(), Value::String(theme.to_string()));

        let path = self.paths.state_file(profile);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serde_json::to_string_pretty(&state)?)?;

        tracing::debug!(profile, theme = %theme, "theme saved");
        Ok(())
    }
}
