//! launchpad CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use launchpad::cli::{Cli, CommandDispatcher};
use launchpad::logging;
use launchpad::ui::TerminalUI;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut ui = TerminalUI::new(cli.no_color);

    if cli.uses_log_file() {
        if let Err(e) = logging::init(&cli.log_file, cli.debug) {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    }

    tracing::debug!("launchpad starting with args: {:?}", cli);

    let working_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: cannot read current directory: {}", e);
            return ExitCode::from(1);
        }
    };

    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(result.exit_code),
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
