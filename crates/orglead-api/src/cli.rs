//! CLI definitions for the `orglead` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Account management and chat proxy backend.
#[derive(Parser)]
#[command(name = "orglead", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config.toml (defaults to `<data dir>/config.toml`).
    #[arg(long, global = true, env = "ORGLEAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress all log output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server.
    Serve {
        /// Address to bind (overrides `server.host`).
        #[arg(long, env = "ORGLEAD_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides `server.port`).
        #[arg(short, long, env = "ORGLEAD_PORT")]
        port: Option<u16>,
    },

    /// Create the database and apply migrations, then exit.
    Migrate,
}

impl Cli {
    /// Log filter implied by `--quiet` / `-v`, if any.
    pub fn filter_override(&self) -> Option<&'static str> {
        match self.verbose {
            0 if self.quiet => Some("error"),
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}
