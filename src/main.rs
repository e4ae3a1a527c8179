use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use lunchtray::application::OrderSession;
use lunchtray::infrastructure::{AppConfig, CliArgs, StaticCatalog, StorageManager};
use lunchtray::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    init_logging(&config)?;

    info!(version = lunchtray::VERSION, "Starting Lunch Tray");
    if let Some(error) = &config.load_warning {
        let path = storage.config_path(config.config.as_deref());
        warn!(path = %path.display(), %error, "Unreadable config, using defaults");
    }

    let policy = config.order_policy()?;
    let catalog = Arc::new(StaticCatalog::from_config(&config.menu)?);
    info!(
        tax_rate = %policy.tax_rate,
        require_selection = policy.require_selection,
        validate_membership = policy.validate_membership,
        "Ordering policy"
    );

    let session = OrderSession::new(catalog, policy);
    Ok(App::new(session, config.notification_duration()))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
