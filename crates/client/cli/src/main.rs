//! Command-line front end for the stat consistency solver.
//!
//! Run with: `stat-solver <command>`
mod commands;
mod config;
mod dirs;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::{Cp, Levels, ListSpecies, Validate};
use config::CliConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Check Level, CP, and IVs against each other and infer the missing one
#[derive(Parser)]
#[command(name = "stat-solver")]
#[command(about = "Level / CP / IV consistency solver", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Validate stats and infer the missing value
    Validate(Validate),

    /// Compute CP from level and IVs
    Cp(Cp),

    /// List species and their base stats
    Species(ListSpecies),

    /// Print the level ladder and CP multipliers
    Levels(Levels),
}

fn main() -> Result<ExitCode> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    let _guard = setup_logging(&config)?;
    tracing::debug!(data_dir = %config.data_dir().display(), "starting");

    match cli.command {
        Command::Validate(cmd) => cmd.execute(&config),
        Command::Cp(cmd) => cmd.execute(&config),
        Command::Species(cmd) => cmd.execute(&config),
        Command::Levels(cmd) => cmd.execute(&config),
    }
}

/// Setup logging to stderr, and to a session log file when enabled.
///
/// The returned guard flushes the file writer on drop.
fn setup_logging(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let env_filter =
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter());

    if !config.log_to_file {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    }

    let session_id = config.session_id.clone().unwrap_or_else(new_session_id);
    let session_log_dir = dirs::log_dir().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "solver.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_filter(env_filter());

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/solver.log", session_log_dir.display());

    Ok(Some(guard))
}

fn new_session_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{}", timestamp)
}
