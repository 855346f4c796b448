use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Quire: dock and float layout tools for a writing project.
#[derive(Parser, Debug)]
#[command(name = "quire", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a project's saved layout after repair.
    Inspect {
        /// Project directory.
        project: PathBuf,
    },
    /// Delete a project's saved layout.
    Reset {
        /// Project directory.
        project: PathBuf,
    },
    /// Serve the layout bridge as JSON lines on stdin/stdout.
    ///
    /// Each request line is `{"id", "kind", "payload"}`; each response echoes
    /// the id. Host events are written as `{"type", "data"}` lines.
    Serve,
    /// Work with the settings file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write the effective settings, every field spelled out.
    ///
    /// Defaults to the `--config` path, or the platform config file.
    Write {
        /// Destination file.
        path: Option<PathBuf>,
    },
}

pub fn parse() -> Args {
    Args::parse()
}
