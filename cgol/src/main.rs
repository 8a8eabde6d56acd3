// main.rs - Entry point: parse flags, seed the grid, run the animation
//
// Every path out of here exits with status 0, errors included; diagnostics
// go to stderr.

use std::io::{self, BufWriter};
use std::sync::Arc;

use anyhow::{Context, Result};

use cgol::cli::{self, Config, Invocation};
use cgol::viewport::spawn_resize_listener;
use cgol::{Driver, Grid, Renderer, Stepper, ViewportTracker, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let log_dir = logging::log_dir_from_env();
    let _log_guard = logging::init(log_dir.as_deref());

    let config = match cli::parse_args(std::env::args_os()) {
        Invocation::Run(config) => config,
        Invocation::Version => {
            eprintln!("cgol-{}", cli::VERSION);
            return;
        }
        Invocation::Help(text) => {
            eprint!("{}", text);
            return;
        }
        Invocation::Usage(detail) => {
            tracing::debug!("Rejected arguments: {}", detail.trim_end());
            eprintln!("{}", cli::USAGE);
            return;
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("cgol failed: {:#}", e);
        eprintln!("cgol: {:#}", e);
    }
}

async fn run(config: Config) -> Result<()> {
    tracing::info!(
        width = config.width,
        height = config.height,
        delay_ms = config.settings.delay.as_millis() as u64,
        warmup = config.settings.warmup,
        ticks = config.settings.ticks.map(|n| n.get()),
        "Starting cgol"
    );

    let tracker = Arc::new(ViewportTracker::from_terminal());
    let _resize_listener = spawn_resize_listener(Arc::clone(&tracker))
        .context("Cannot listen for terminal resizes")?;

    let mut grid = Grid::new(config.width, config.height)?;
    config.seed.populate(&mut grid, tracker.get())?;

    let renderer = Renderer::new(BufWriter::new(io::stdout()));
    let mut driver = Driver::new(Stepper::new(grid), renderer, tracker, config.settings);
    let summary = driver.run_until(interrupted()).await?;

    tracing::info!(
        generation = summary.generation,
        ticks = summary.ticks,
        interrupted = summary.interrupted,
        "Finished"
    );
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed the run simply
/// has no graceful interrupt.
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Ctrl-C handler unavailable: {}", e);
        std::future::pending::<()>().await;
    }
}
