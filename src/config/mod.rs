pub mod paths;
pub mod profile;
pub mod settings;
pub mod theme;

pub use paths::AppPaths;
pub use profile::resolve_profile;
pub use settings::Settings;
pub use theme::{FileThemeStore, Theme, ThemeStore};

use crate::error::AppResult;

pub fn load_settings(paths: &AppPaths, profile: &str) -> AppResult<Settings> {
    settings::load(paths.settings_file(profile))
}
