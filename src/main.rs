use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::sync::mpsc;

use neurosync::app::{App, AppEvent};
use neurosync::config::Config;
use neurosync::theme::ThemeVariant;
use neurosync::ui;
use neurosync::util::validate_backend_url;

/// Get the config directory path (~/.config/neurosync/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    let config_dir = PathBuf::from(home).join(".config").join("neurosync");
    Ok(config_dir)
}

#[derive(Parser, Debug)]
#[command(name = "neurosync", about = "Terminal dashboard for the NeuroSync BCI intelligence feed")]
struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL")]
    backend: Option<String>,

    /// Path to config file (default: ~/.config/neurosync/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up config directory
    let config_dir = get_config_dir()?;
    if !config_dir.exists() {
        std::fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        println!("Created config directory: {}", config_dir.display());
    }

    // Directory permissions on Unix (user-only access)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        match std::fs::metadata(&config_dir) {
            Ok(metadata) => {
                let mut perms = metadata.permissions();
                perms.set_mode(0o700);
                if let Err(e) = std::fs::set_permissions(&config_dir, perms) {
                    tracing::warn!(
                        path = %config_dir.display(),
                        error = %e,
                        "Failed to set config directory permissions to 0700"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_dir.display(),
                    error = %e,
                    "Failed to read config directory metadata"
                );
            }
        }
    }

    // Logging goes to a file: stderr is unusable once the alternate screen
    // is up, and writes to it would corrupt the TUI
    let log_path = config_dir.join("neurosync.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    // Load configuration, with CLI flags taking precedence
    let config_path = args
        .config
        .unwrap_or_else(|| config_dir.join("config.toml"));
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let backend_base_url = args.backend.unwrap_or(config.backend_base_url);
    validate_backend_url(&backend_base_url)
        .with_context(|| format!("Invalid backend URL: {}", backend_base_url))?;

    let theme_variant = ThemeVariant::from_str_name(&config.theme).unwrap_or_else(|| {
        tracing::warn!(theme = %config.theme, "Unknown theme in config, using dark");
        ThemeVariant::Dark
    });

    tracing::info!(backend = %backend_base_url, "Starting dashboard");

    let mut app =
        App::new(backend_base_url, theme_variant).context("Failed to create application")?;

    // Create event channel for background tasks
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    // Run the TUI
    ui::run(&mut app, event_tx, event_rx).await?;

    Ok(())
}
