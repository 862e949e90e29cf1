//! Markup CLI - renders HTML with the markup builder.
//!
//! Provides commands for:
//! - `demo`: Render the demo document
//! - `table`: Render delimited rows as an HTML table

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{DemoArgs, TableArgs};
use output::Output;

/// Markup - fluent HTML fragment builder.
#[derive(Parser)]
#[command(name = "markup", version, about)]
struct Cli {
    /// Enable verbose output (log at info level).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the demo document.
    Demo(DemoArgs),
    /// Render delimited rows as an HTML table.
    Table(TableArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Demo(args) => args.execute(),
        Commands::Table(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
