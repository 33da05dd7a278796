/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: Running terminal UI connected to the task-selection service
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taskpick_adapter::TaskpickClient;
use taskpick_tui::{AppConfig, Controller};

use crate::tui::{LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory, run_tui};

mod tui;

#[derive(Parser, Debug)]
#[command(name = "taskpick", version, about = "Terminal UI for the task-selection service")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "server", value_name = "URL")]
    server_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Logs go to the in-TUI logs tab; stdout belongs to the terminal UI.
    let log_buffer: LogBufferHandle = Arc::new(StdMutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));
    init_tracing(&args.log_level, log_buffer.clone())?;

    let mut config = load_config(args.config_path.as_deref())?;
    if let Some(server_url) = args.server_url {
        config.server_url = server_url;
    }
    info!(server_url = %config.server_url, "starting taskpick");

    let client =
        TaskpickClient::with_config_and_base_url(config.client_config(), &config.server_url)
            .map_err(|err| anyhow!("create client failed: {err}"))?;
    let controller = Controller::new(client);

    run_tui(controller, log_buffer).await
}

fn init_tracing(log_level: &str, buffer: LogBufferHandle) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(LogWriterFactory::new(buffer))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit_path {
        let path_str = path.to_str().context("config path must be valid utf-8")?;
        return AppConfig::from_file(path_str).context("load config");
    }

    match AppConfig::default_path() {
        Some(path) if path.exists() => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            AppConfig::from_file(path_str).context("load config")
        }
        _ => Ok(AppConfig::default()),
    }
}
