//! Shell completions generation.
//!
//! `launchpad completions <shell>` prints a completion script to stdout.
//! It does not open the log file.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, bin, out);
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        write_completions(self.args.shell, &mut std::io::stdout().lock());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_knows_subcommands() {
        let out = script(Shell::Bash);
        assert!(out.contains("launchpad"));
        assert!(out.contains("check"));
        assert!(out.contains("--skip-present"));
    }

    #[test]
    fn fish_script_names_binary() {
        assert!(script(Shell::Fish).contains("launchpad"));
    }
}
