//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::requirements::manifest::DEFAULT_MANIFEST;
use crate::runner::DEFAULT_LAUNCH_TARGET;
use crate::shell::DEFAULT_PYTHON;

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "app.log";

/// launchpad - check, install, and launch a Python application.
#[derive(Debug, Parser)]
#[command(name = "launchpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Interpreter used for import probes and pip
    #[arg(long, global = true, env = "LAUNCHPAD_PYTHON", default_value = DEFAULT_PYTHON)]
    pub python: PathBuf,

    /// Log file (appended to, never truncated)
    #[arg(long, global = true, env = "LAUNCHPAD_LOG_FILE", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Also write log events to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan modules, offer to install, offer to launch (default)
    Run(RunArgs),

    /// Scan modules and print their classification
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Cli {
    /// Whether this invocation writes to the log file.
    pub fn uses_log_file(&self) -> bool {
        !matches!(self.command, Some(Commands::Completions(_)))
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Program to launch, relative to the current directory
    #[arg(long, default_value = DEFAULT_LAUNCH_TARGET)]
    pub target: PathBuf,

    /// File that receives the names of failed installs
    #[arg(long, default_value = DEFAULT_MANIFEST)]
    pub requirements: PathBuf,

    /// Modules to check instead of the built-in list (repeatable)
    #[arg(long = "module", value_name = "NAME")]
    pub modules: Vec<String>,

    /// Do not queue external modules that already import
    #[arg(long)]
    pub skip_present: bool,

    /// Answer "y" to both prompts
    #[arg(short, long)]
    pub yes: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_LAUNCH_TARGET),
            requirements: PathBuf::from(DEFAULT_MANIFEST),
            modules: Vec::new(),
            skip_present: false,
            yes: false,
        }
    }
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Modules to check instead of the built-in list (repeatable)
    #[arg(long = "module", value_name = "NAME")]
    pub modules: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
