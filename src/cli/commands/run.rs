//! Run command implementation.
//!
//! The `launchpad run` command (also the default) scans the module list,
//! offers to install what is queued, and offers to launch the program.
//! It exits 0 whatever the install and launch outcomes were.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::error::Result;
use crate::requirements::{Catalog, InstallPolicy, InterpreterProbe, Pip};
use crate::runner::{BootstrapRunner, RunOptions, Toolkit};
use crate::shell::DetachedLauncher;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    working_dir: PathBuf,
    python: PathBuf,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(working_dir: &Path, python: &Path, args: RunArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            python: python.to_path_buf(),
            args,
        }
    }

    /// Build run options from the command arguments.
    pub fn options(&self) -> RunOptions {
        let mut options = RunOptions::new(&self.working_dir);
        options.catalog = Catalog::with_targets(self.args.modules.clone());
        options.policy = if self.args.skip_present {
            InstallPolicy::SkipPresent
        } else {
            InstallPolicy::Reinstall
        };
        options.target = self.args.target.clone();
        options.manifest_path = self.working_dir.join(&self.args.requirements);
        options.assume_yes = self.args.yes;
        options
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = InterpreterProbe::new(&self.python);
        let manager = Pip::new(&self.python);
        let launcher = DetachedLauncher::new();
        let toolkit = Toolkit {
            probe: &probe,
            manager: &manager,
            launcher: &launcher,
        };

        BootstrapRunner::new(toolkit, self.options()).run(ui)?;
        Ok(CommandResult::success())
    }
}
