use super::app_config::AppConfig;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "lunchtray";
const APP_NAME: &str = "lunchtray";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while loading configuration or building from it.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("tax rate must be between 0 and 1, got {0}")]
    InvalidTaxRate(f64),
    #[error("menu item {name:?} has invalid price {price}")]
    InvalidPrice { name: String, price: f64 },
    #[error("menu item name must not be empty")]
    EmptyItemName,
}

/// Locates and persists `config.toml`.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Uses the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigDirNotFound` if the platform has no home
    /// directory.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Uses `config_dir` instead of the platform directory.
    #[must_use]
    pub const fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Directory holding the default `config.toml`.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the file `load_config` reads: the override when given,
    /// otherwise `config.toml` in the configuration directory.
    #[must_use]
    pub fn config_path(&self, path_override: Option<&Path>) -> PathBuf {
        path_override.map_or_else(|| self.config_dir.join(CONFIG_FILE_NAME), Path::to_path_buf)
    }

    /// Loads the configuration, writing the defaults first if the file is
    /// missing. A file that fails to parse is kept as is and the defaults are
    /// used for this run, with the parse error in `load_warning`. Logging is
    /// not up yet at this point, so reporting it is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot
    /// be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = self.config_path(path_override);

        if !path.exists() {
            info!(path = %path.display(), "No config file, writing defaults");
            let config = AppConfig::default();
            Self::save_to_file(&path, &config)?;
            return Ok(config);
        }

        Ok(Self::parse(&fs::read_to_string(&path)?))
    }

    fn parse(content: &str) -> AppConfig {
        toml::from_str(content).unwrap_or_else(|e: toml::de::Error| AppConfig {
            load_warning: Some(e.message().to_string()),
            ..AppConfig::default()
        })
    }

    fn save_to_file(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("config path has no parent directory"))?;
        fs::create_dir_all(parent)?;

        let mut file = tempfile::NamedTempFile::new_in(parent)?;
        file.write_all(toml::to_string_pretty(config)?.as_bytes())?;
        file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
