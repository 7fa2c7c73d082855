#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod external;
mod pages;
mod scroll_bridge;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::PortfolioData;

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Content loaded at startup
static CONTENT: OnceLock<PortfolioData> = OnceLock::new();

/// Keep preferences in memory only
static EPHEMERAL: OnceLock<bool> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

/// Get the portfolio content, falling back to the built-in data
pub fn get_content() -> PortfolioData {
    CONTENT.get().cloned().unwrap_or_else(PortfolioData::builtin)
}

/// Whether preferences should skip the disk entirely
pub fn is_ephemeral() -> bool {
    EPHEMERAL.get().copied().unwrap_or(false)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

/// Personal portfolio desktop application
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Single-page developer portfolio with persisted theme and language")]
struct Args {
    /// Data directory for stored preferences
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON file replacing the built-in portfolio content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Do not read or write preferences on disk
    #[arg(long)]
    ephemeral: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let content = match &args.content {
        Some(path) => PortfolioData::from_file(path)
            .with_context(|| format!("Failed to load content from {}", path.display()))?,
        None => PortfolioData::builtin(),
    };

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);
    let title = format!("{} - Portfolio", content.personal.name);

    let _ = DATA_DIR.set(data_dir.clone());
    let _ = EPHEMERAL.set(args.ephemeral);
    let _ = CONTENT.set(content);

    tracing::info!(
        data_dir = %data_dir.display(),
        ephemeral = args.ephemeral,
        "Starting portfolio"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
