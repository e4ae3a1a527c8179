use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command line arguments. Each one overrides its config file value.
#[derive(Debug, Parser)]
#[command(
    name = "lunchtray",
    version,
    about = "Order lunch from the terminal: entree, side dish, accompaniment, checkout",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Sales tax as a fraction of the subtotal (0.08 is 8%).
    #[arg(long, value_name = "RATE")]
    pub tax_rate: Option<f64>,

    /// Allow leaving a menu without a selection and accept off-menu items.
    #[arg(long)]
    pub permissive: bool,

    /// Notification duration in seconds.
    #[arg(long)]
    pub notification_duration: Option<u64>,
}
