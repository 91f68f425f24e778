// Desktop host binary: unwrap/expect/panic acceptable outside the library.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use weather_app::{
    refresh, runtime, App, AppConfig, FileBridge, FixtureSource, JsonLinesSource, RuntimeOptions,
};

#[derive(Parser)]
#[command(name = "g2-weather")]
#[command(about = "G2 weather display host: renders weather screens, reads input events from stdin", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Weather snapshot JSON, overrides the config.
    #[arg(long)]
    fixture: Option<PathBuf>,
    /// Directory for page layouts and screen images, overrides the config.
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Tracing filter, e.g. `debug` or `weather_app=trace`. RUST_LOG wins when set.
    #[arg(long)]
    log_level: Option<String>,
    /// Exit when stdin closes instead of idling on the refresh timer.
    #[arg(long)]
    exit_on_eof: bool,
}

fn init_tracing(level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or("info")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    if let Some(fixture) = &cli.fixture {
        config.fixture_path.clone_from(fixture);
    }
    if let Some(dir) = &cli.output_dir {
        config.output_dir.clone_from(dir);
    }
    config.validate().context("validating config")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = load_config(&cli)?;
    tracing::info!(
        app = platform::config::app_title(),
        version = platform::config::APP_VERSION,
        fixture = %config.fixture_path.display(),
        output = %config.output_dir.display(),
        "starting"
    );
    if config.location.is_none() {
        tracing::warn!("no location configured, refreshes will be skipped");
    }

    let bridge = FileBridge::create(&config.output_dir)
        .await
        .with_context(|| format!("preparing output directory {}", config.output_dir.display()))?;
    let source = FixtureSource::new(&config.fixture_path);
    let (handle, mut requests) = refresh::channel();

    let mut app = App::new(&config, source, bridge, handle);
    let mut input = JsonLinesSource::stdin();

    let options = RuntimeOptions {
        refresh_interval: config.refresh_interval(),
        exit_on_eof: cli.exit_on_eof,
    };
    let reason = runtime::run(&mut app, &mut input, &mut requests, options).await;

    tracing::info!(
        reason = reason.as_str(),
        skipped_input = input.skipped(),
        pages = app.bridge().pages_written(),
        images = app.bridge().images_written(),
        "stopped"
    );
    Ok(())
}
