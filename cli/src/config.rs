use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use wintheme::RegistrySettings;
use wintheme::settings;

/// Name of the optional configuration file inside the launcher config dir.
pub const CONFIG_FILE_NAME: &str = "wintheme.toml";

/// Prefix for environment overrides, e.g. `WINTHEME__WINDOW_THEME=retro`.
pub const ENV_PREFIX: &str = "WINTHEME";

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Configuration file not found: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },
    #[error("Configuration loading failed: {0}")]
    LoadError(String),
    #[error("Failed to deserialize config: {0}")]
    DeserializeError(String),
}

/// Application configuration
#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(flatten)]
    registry: RegistrySettings,
    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn registry(&self) -> &RegistrySettings {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut RegistrySettings {
        &mut self.registry
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }
}

/// Logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

/// `$HOME/.emulationstation/wintheme.toml`
pub fn default_config_path() -> Option<PathBuf> {
    settings::config_dir().map(|mut path| {
        path.push(CONFIG_FILE_NAME);
        path
    })
}

/// Load configuration from a TOML file and environment variables.
///
/// An explicitly given `path` must exist. Without one, the default config
/// file is used when present. Environment entries override file values.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, SetupError> {
    dotenv::dotenv().ok();

    let mut builder = Config::builder();

    match path {
        Some(path) => {
            if !path.exists() {
                return Err(SetupError::ConfigFileNotFound {
                    path: path.to_path_buf(),
                });
            }
            builder = builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml));
        }
        None => {
            if let Some(default_path) = default_config_path() {
                builder = builder.add_source(
                    File::new(&default_path.to_string_lossy(), FileFormat::Toml).required(false),
                );
            }
        }
    }

    let config = builder
        .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()
        .map_err(|e| SetupError::LoadError(e.to_string()))?;

    config
        .try_deserialize::<AppConfig>()
        .map_err(|e| SetupError::DeserializeError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;
    use std::fs;

    #[test]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wintheme.toml");
        fs::write(
            &path,
            r#"
window_theme = "retro"
themes_dir = "/srv/themes"

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = assert_ok!(load_config(Some(&path)));
        assert_eq!(config.registry().window_theme, "retro");
        assert_eq!(
            config.registry().themes_dir,
            Some(PathBuf::from("/srv/themes"))
        );
        assert_eq!(config.logging().level(), "debug");
        assert_none!(config.logging().file());
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wintheme.toml");
        fs::write(&path, "").unwrap();

        let config = assert_ok!(load_config(Some(&path)));
        assert_eq!(config.registry().window_theme, "default");
        assert_none!(&config.registry().themes_dir);
        assert_eq!(config.logging().level(), "info");
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(Some(&dir.path().join("missing.toml")));
        assert!(matches!(result, Err(SetupError::ConfigFileNotFound { .. })));
    }
}
