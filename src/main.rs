use clap::Parser;
use stardust::app::AppState;
use stardust::cli::Cli;
use stardust::constants::POLL_INTERVAL_MS;
use stardust::error::{AppError, Result};
use stardust::frontend::CrosstermFrontend;
use stardust::logging::init_logging;
use stardust::runner;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

fn main() {
    if let Err(e) = run() {
        eprintln!("Alas, there's been an error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Validate CLI arguments
    cli.validate().map_err(AppError::Other)?;

    // Initialize logging if requested
    let _log_guard = match &cli.log_file {
        Some(log_file) => {
            let guard = init_logging(log_file)?;
            tracing::info!("=== stardust starting ===");
            tracing::info!("Log file: {}", log_file.display());
            Some(guard)
        }
        None => None,
    };

    // Setup Ctrl-C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        tracing::info!("Ctrl-C received, shutting down");
        r.store(false, Ordering::SeqCst);
    })
    .map_err(|e| AppError::Other(format!("Failed to set Ctrl-C handler: {}", e)))?;

    let mut frontend = CrosstermFrontend::new(Duration::from_millis(POLL_INTERVAL_MS))?;
    let mut app = AppState::new();

    let result = runner::run(&mut frontend, &mut app, &running);
    if let Err(e) = &result {
        tracing::error!("Event loop failed: {}", e);
    }

    // Cleanup terminal even when the loop failed
    let cleanup = frontend.restore();

    tracing::info!("stardust shutting down");
    result.and(cleanup)
}
