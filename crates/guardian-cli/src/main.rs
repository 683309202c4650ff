//! # guardian CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use guardian_cli::config::{GuardianConfig, OutputFormat};
use guardian_cli::integrity::{run_integrity, IntegrityArgs};
use guardian_cli::stats::{run_stats, StatsArgs};
use guardian_cli::view::{run_view, ViewArgs};
use guardian_core::Variant;

/// GuardianOS dashboard
///
/// Deployment manual, compliance registry, ethics statement and integrity
/// check for the GuardianOS field kit and global mesh.
#[derive(Parser, Debug)]
#[command(name = "guardian", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dashboard variant: field-kit or global-mesh.
    #[arg(long, global = true)]
    variant: Option<Variant>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one dashboard view.
    View(ViewArgs),

    /// Print the compliance score for the current scope.
    Stats(StatsArgs),

    /// Run the integrity check and print its seal.
    Integrity(IntegrityArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "guardian CLI starting");

    let result = GuardianConfig::load(cli.config.as_deref()).and_then(|config| {
        let config = config.with_overrides(cli.variant, cli.format);
        config.validate()?;
        let mut stdout = std::io::stdout().lock();
        match &cli.command {
            Commands::View(args) => run_view(args, &config, &mut stdout),
            Commands::Stats(args) => run_stats(args, &config, &mut stdout),
            Commands::Integrity(args) => run_integrity(args, &config, &mut stdout),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
