use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use dadjokes::infrastructure::{
    AppConfig, CliArgs, DadJokesClient, DesktopNotificationService, StorageManager,
};
use dadjokes::presentation::{App, AppOptions, HostEnvironment, Tab};

const SNAPSHOT_SIZE: (u16, u16) = (80, 30);

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

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let storage = StorageManager::new()?;
    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);
    Ok(config)
}

fn create_app(config: &AppConfig, host: HostEnvironment) -> Result<App> {
    let client = Arc::new(DadJokesClient::with_timeout(
        config.api_url.as_str(),
        config.request_timeout(),
    )?);
    let notifier = Arc::new(DesktopNotificationService::new(
        config.enable_desktop_notifications,
    ));

    Ok(App::new(client, notifier, AppOptions::from_config(config, host)))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let args = CliArgs::parse();
    let config = load_config(&args)?;
    init_logging(&config)?;

    info!(version = dadjokes::VERSION, api_url = %config.api_url, "Starting Dad Jokes");

    let host = HostEnvironment::detect(args.snapshot.is_some());
    let app = create_app(&config, host)?;

    let snapshot = args
        .snapshot
        .map(Tab::from)
        .or_else(|| (host == HostEnvironment::Static).then_some(Tab::Random));

    if let Some(tab) = snapshot {
        let (width, height) = crossterm::terminal::size().unwrap_or(SNAPSHOT_SIZE);
        let text = app.snapshot(tab, width, height).await?;
        println!("{text}");
        return Ok(());
    }

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
