//! Bloom - plant shop demo in the terminal
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use bloom_app::config::{self, ThemeMode};
use bloom_core::{logging, Screen};

/// Bloom - browse themes and plants from your terminal
#[derive(Parser, Debug)]
#[command(name = "bloom")]
#[command(about = "Bloom plant shop demo in the terminal", long_about = None)]
struct Args {
    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Screen to start on: welcome, login or home
    #[arg(long, value_name = "SCREEN")]
    start: Option<Screen>,

    /// Use the dark palette
    #[arg(long)]
    dark: bool,

    /// Write a default settings file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if args.init_config {
        let path = match args.config.clone().or_else(config::default_config_path) {
            Some(path) => path,
            None => color_eyre::eyre::bail!("no config directory on this platform"),
        };
        config::init_config_file(&path)?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    logging::init()?;

    let mut settings = config::load_settings(args.config.as_deref())?;
    if let Some(screen) = args.start {
        settings.behavior.start_screen = screen;
    }
    if args.dark {
        settings.ui.theme = ThemeMode::Dark;
    }
    info!("Settings: {:?}", settings);

    bloom_tui::run(settings).await?;
    Ok(())
}
