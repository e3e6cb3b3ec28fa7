//! acuity-cli library root.
//!
//! The command-line intake collaborator: reads assessment drafts, runs them
//! through the engine and prints finalized records. Modules are public so
//! integration tests can drive them without spawning the binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod commands;
pub mod config;

/// Emergency triage acuity classifier
#[derive(Parser, Debug)]
#[command(name = "acuity")]
#[command(author, version, about = "Emergency triage acuity classifier")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify an assessment draft (JSON) and print the finalized record
    Classify {
        /// Path to the draft, or `-` for stdin
        draft: PathBuf,

        /// Operator id; defaults to the configured operator
        #[arg(long)]
        operator: Option<String>,
    },

    /// Print the level configuration table
    Levels,

    /// Manage the local config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the current config
    Show,

    /// Write a new config file
    Init {
        #[arg(long)]
        operator: String,

        #[arg(long)]
        station: Option<String>,

        /// Default to JSON logs
        #[arg(long)]
        log_json: bool,
    },
}
