//! Infrastructure layer with catalog and configuration adapters.

/// Menu catalog adapters.
pub mod catalog;
/// Application configuration.
pub mod config;

pub use catalog::StaticCatalog;
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
