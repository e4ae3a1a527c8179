//! Application configuration.

use crate::application::dto::OrderPolicy;
use crate::domain::entities::TaxRate;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::storage::ConfigError;

const APP_NAME: &str = "lunchtray";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "lunchtray";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, from file then CLI.
#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Sales tax as a fraction of the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,

    /// Ordering rules.
    #[serde(default)]
    pub ordering: OrderingConfig,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Menu overrides.
    #[serde(default)]
    pub menu: MenuConfig,

    /// Parse error of a config file that was replaced by the defaults.
    #[serde(skip)]
    pub load_warning: Option<String>,
}

/// Ordering rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderingConfig {
    /// Require a selection before leaving a menu screen.
    #[serde(default = "default_true")]
    pub require_selection: bool,

    /// Reject items that are not on the screen's menu.
    #[serde(default = "default_true")]
    pub validate_membership: bool,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            require_selection: true,
            validate_membership: true,
        }
    }
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Notification duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notification_duration: default_notification_duration(),
        }
    }
}

/// Menu item as written in the configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItemConfig {
    /// Item name.
    pub name: String,
    /// Price in dollars.
    pub price: f64,
    /// Description text.
    #[serde(default)]
    pub description: String,
    /// Opaque image asset id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Per-category menu overrides. An empty list keeps the built-in menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Entree items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entree: Vec<MenuItemConfig>,
    /// Side dish items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub side_dish: Vec<MenuItemConfig>,
    /// Accompaniment items.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accompaniment: Vec<MenuItemConfig>,
}

const fn default_tax_rate() -> f64 {
    0.08
}

const fn default_true() -> bool {
    true
}

const fn default_notification_duration() -> u64 {
    3
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(tax_rate) = args.tax_rate {
            self.tax_rate = tax_rate;
        }
        if args.permissive {
            self.ordering.require_selection = false;
            self.ordering.validate_membership = false;
        }
        if let Some(notification_duration) = args.notification_duration {
            self.ui.notification_duration = notification_duration;
        }
    }

    /// Builds the ordering policy.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidTaxRate` if the rate is not within `0..=1`.
    pub fn order_policy(&self) -> Result<OrderPolicy, ConfigError> {
        let tax_rate =
            TaxRate::from_fraction(self.tax_rate).ok_or(ConfigError::InvalidTaxRate(self.tax_rate))?;
        Ok(OrderPolicy {
            tax_rate,
            require_selection: self.ordering.require_selection,
            validate_membership: self.ordering.validate_membership,
        })
    }

    /// Returns how long notifications stay visible.
    #[must_use]
    pub const fn notification_duration(&self) -> Duration {
        Duration::from_secs(self.ui.notification_duration)
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("lunchtray.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: None,
            log_path: None,
            log_level: LogLevel::Info,
            tax_rate: default_tax_rate(),
            ordering: OrderingConfig::default(),
            ui: UiConfig::default(),
            menu: MenuConfig::default(),
            load_warning: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_config_with_menu() {
        let toml_content = r#"
            tax_rate = 0.0725

            [ordering]
            require_selection = false

            [[menu.entree]]
            name = "Burrito"
            price = 5.0
            description = "Bean burrito"

            [[menu.entree]]
            name = "Tacos"
            price = 6.25
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert!(!config.ordering.require_selection);
        assert!(config.ordering.validate_membership);
        assert_eq!(config.menu.entree.len(), 2);
        assert_eq!(config.menu.entree[1].description, "");
        assert!(config.menu.side_dish.is_empty());

        let policy = config.order_policy().unwrap();
        assert_eq!(policy.tax_rate.basis_points(), 725);
        assert!(!policy.require_selection);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.order_policy().unwrap(), OrderPolicy::default());
        assert_eq!(config.notification_duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_invalid_tax_rate() {
        let config = AppConfig {
            tax_rate: -0.5,
            ..AppConfig::default()
        };

        assert!(matches!(
            config.order_policy(),
            Err(ConfigError::InvalidTaxRate(_))
        ));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = AppConfig::default();
        let args = CliArgs::parse_from([
            "lunchtray",
            "--tax-rate",
            "0.1",
            "--permissive",
            "--log-level",
            "debug",
        ]);

        config.merge_with_args(args);

        assert_eq!(config.log_level, LogLevel::Debug);
        let policy = config.order_policy().unwrap();
        assert_eq!(policy.tax_rate.basis_points(), 1000);
        assert!(!policy.require_selection);
        assert!(!policy.validate_membership);
    }
}
