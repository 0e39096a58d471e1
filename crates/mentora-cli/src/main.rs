//! # mentora CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Uses clap derive macros; verbosity flags map to tracing env-filter
//! levels.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mentora_cli::request::{run_request, RequestArgs};
use mentora_cli::states::{run_states, StatesArgs};

/// Mentora CLI — mentorship program operations.
///
/// Lists and inspects mentorship requests, drives lifecycle transitions
/// against the tutoring backend, and prints the transition matrix.
#[derive(Parser, Debug)]
#[command(name = "mentora", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Mentorship request operations (list, show, advance, back, cancel).
    Request(RequestArgs),

    /// Print the lifecycle transition matrix.
    States(StatesArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Request(args) => run_request(&args).await,
        Commands::States(args) => run_states(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
