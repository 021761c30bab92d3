// Application entry point for the BLOATKILL dashboard

use std::io::{self, Write};
use std::path::PathBuf;

use bloatkill::catalog::CATALOG;
use bloatkill::config::Config;
use bloatkill::errors::{BloatkillError, Result};
use bloatkill::gui::{AppState, DashboardState};
use bloatkill::listing::write_listing;
use bloatkill::logging::init_tracing;
use clap::Parser;

/// Windows storage remediation reference.
#[derive(Debug, Parser)]
#[command(name = "bloatkill", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Folder to show first (overrides the configuration)
    #[arg(long, value_name = "KEY")]
    folder: Option<String>,

    /// Print the catalog to stdout instead of opening a window
    #[arg(long)]
    list: bool,

    /// Debug-level logging
    #[arg(long)]
    debug: bool,
}

/// Entry point for the application.
/// Validates the catalog, loads configuration and launches the eframe window.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    // A defective catalog is an authoring bug; refuse to start
    CATALOG.validate()?;

    if cli.list {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        write_listing(&mut out, &CATALOG)
            .and_then(|()| out.flush())
            .map_err(|source| BloatkillError::Io {
                path: PathBuf::from("<stdout>"),
                source,
            })?;
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load(path, &CATALOG)?,
        None => Config::default(),
    };
    if let Some(folder) = cli.folder {
        config.dashboard.start_folder = Some(folder);
        config.validate(&CATALOG)?;
    }

    let state = match &config.dashboard.start_folder {
        Some(key) => DashboardState::starting_at(&CATALOG, key)?,
        None => DashboardState::new(&CATALOG)?,
    };
    let copy_feedback = config.dashboard.copy_feedback();
    tracing::info!(
        folders = CATALOG.len(),
        start = state.active_key(),
        "starting dashboard"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(config.window.resizable),
        ..Default::default()
    };

    eframe::run_native(
        "BLOATKILL",
        options,
        Box::new(move |cc| Ok(Box::new(AppState::new(cc, state, copy_feedback)))),
    )?;
    Ok(())
}
