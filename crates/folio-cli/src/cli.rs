//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI arguments for the Folio application.
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "FOLIO_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all documents, newest first.
    List,

    /// Show one document by identifier.
    Show {
        /// Document identifier.
        id: String,

        /// Skip the view-metrics round trip.
        #[arg(long)]
        no_metrics: bool,
    },

    /// Run the interactive console.
    Console,

    /// Print version information.
    Version,
}
