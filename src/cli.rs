//! CLI definitions for pagetweak.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// pagetweak CLI.
#[derive(Parser)]
#[command(name = "pagetweak")]
#[command(about = "Restyle a page with plain-language commands")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (missing file means defaults)
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    pub config: PathBuf,

    /// Debug logging and executor messages in status lines
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the instruction a command classifies to, as JSON
    Classify {
        /// Command text
        text: String,
    },

    /// Run commands against a page fixture
    Apply {
        /// Page fixture (JSON)
        #[arg(short, long)]
        document: PathBuf,

        /// Write the resulting page state here (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Commands, run in order
        #[arg(required = true)]
        commands: Vec<String>,
    },

    /// Interactive session against a page fixture
    Repl {
        /// Page fixture (JSON)
        #[arg(short, long)]
        document: PathBuf,
    },

    /// List example commands
    Examples,
}
