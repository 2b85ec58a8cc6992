use crate::types::Theme;
use serde::Deserialize;
use std::path::PathBuf;

/// Directory under the user's home holding launcher configuration.
pub const CONFIG_DIR_NAME: &str = ".emulationstation";

/// Directory under [`CONFIG_DIR_NAME`] scanned for theme files.
pub const THEMES_DIR_NAME: &str = "WindowThemes";

/// Settings consumed when the registry starts up.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrySettings {
    /// Name of the theme to activate (the `WindowTheme` setting).
    #[serde(default = "default_window_theme")]
    pub window_theme: String,
    /// Override for the themes directory. Uses [`default_themes_dir`] when unset.
    #[serde(default)]
    pub themes_dir: Option<PathBuf>,
}

fn default_window_theme() -> String {
    Theme::DEFAULT_NAME.to_string()
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            window_theme: default_window_theme(),
            themes_dir: None,
        }
    }
}

impl RegistrySettings {
    /// Directory to scan, or `None` when neither an override nor a home
    /// directory is available.
    pub fn resolved_themes_dir(&self) -> Option<PathBuf> {
        self.themes_dir.clone().or_else(default_themes_dir)
    }
}

/// `$HOME/.emulationstation`
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|mut path| {
        path.push(CONFIG_DIR_NAME);
        path
    })
}

/// `$HOME/.emulationstation/WindowThemes`
pub fn default_themes_dir() -> Option<PathBuf> {
    config_dir().map(|mut path| {
        path.push(THEMES_DIR_NAME);
        path
    })
}
