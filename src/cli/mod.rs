//! Command-line interface for launchpad.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, CompletionsArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
