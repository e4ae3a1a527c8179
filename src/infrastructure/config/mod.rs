//! Application configuration.

/// Configuration model and defaults.
pub mod app_config;
/// Command line arguments.
pub mod args;
/// Config file loading and saving.
pub mod storage;

pub use app_config::{
    AppConfig, LogLevel, MenuConfig, MenuItemConfig, OrderingConfig, UiConfig,
};
pub use args::CliArgs;
pub use storage::{ConfigError, StorageManager};
