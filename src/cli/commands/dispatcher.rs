//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, RunArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
///
/// Install and launch outcomes never change the exit status, so every
/// command that returns normally reports success. Fatal errors travel as
/// `Err` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandResult {
    /// Process exit code.
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    working_dir: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher rooted at `working_dir`.
    pub fn new(working_dir: PathBuf) -> Self {
        Self { working_dir }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(&self.working_dir, &cli.python, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(&cli.python, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to run command with default args
                let cmd =
                    super::run::RunCommand::new(&self.working_dir, &cli.python, RunArgs::default());
                cmd.execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::ui::MockUI;
    use clap::Parser;

    #[test]
    fn command_result_success() {
        assert_eq!(CommandResult::success().exit_code, 0);
    }

    #[test]
    fn dispatch_routes_check() {
        let cli = Cli::parse_from([
            "launchpad",
            "--python",
            "/nonexistent/launchpad-python",
            "check",
            "--module",
            "sys",
        ]);
        let dispatcher = CommandDispatcher::new(PathBuf::from("/test"));
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert_eq!(result, CommandResult::success());
        assert!(ui.has_message("sys is missing and needs to be installed."));
        assert!(ui.prompts_shown().is_empty());
    }
}
