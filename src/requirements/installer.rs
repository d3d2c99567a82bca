//! Package installation.
//!
//! Every queued name is installed in order with a blocking child process.
//! A failure is recorded and the batch moves on; nothing here stops the run
//! except failing to write the requirements file afterwards.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::Result;
use crate::requirements::manifest;
use crate::shell::{execute_checked, CommandOptions, Invocation};
use crate::ui::UserInterface;

/// Installs packages by name.
pub trait PackageManager {
    /// Install `package`, blocking until the installer exits.
    fn install(&self, package: &str) -> Result<()>;
}

/// `pip`, run as a module of the selected interpreter.
#[derive(Debug, Clone)]
pub struct Pip {
    python: PathBuf,
}

impl Pip {
    /// Create a pip installer for the given interpreter.
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// The invocation used to install `package`.
    pub fn invocation(&self, package: &str) -> Invocation {
        Invocation::new(&self.python, ["-m", "pip", "install", package])
    }
}

impl PackageManager for Pip {
    fn install(&self, package: &str) -> Result<()> {
        execute_checked(&self.invocation(package), &CommandOptions::inherited())
    }
}

/// A package whose install attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallFailure {
    /// Package name as queued.
    pub name: String,
    /// Why the install failed.
    pub message: String,
}

/// Result of installing a queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Every name attempted, in order.
    pub attempted: Vec<String>,
    /// Failed names, in the order they failed.
    pub failures: Vec<InstallFailure>,
}

impl InstallReport {
    /// Whether every attempt succeeded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failed names, in order.
    pub fn failed_names(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.name.as_str()).collect()
    }
}

/// Install every name in `queue`, collecting failures.
pub fn install_all(
    queue: &[String],
    manager: &dyn PackageManager,
    ui: &mut dyn UserInterface,
) -> InstallReport {
    let mut report = InstallReport::default();

    for name in queue {
        debug!("Trying to install: {}", name);
        report.attempted.push(name.clone());

        if let Err(e) = manager.install(name) {
            let line = format!("Failed to install {}: {}", name, e);
            ui.error(&line);
            error!("{}", line);
            report.failures.push(InstallFailure {
                name: name.clone(),
                message: e.to_string(),
            });
        }
    }

    report
}

/// Report the batch result and persist failures to `manifest_path`.
///
/// The requirements file is only written when something failed; a clean
/// batch leaves any existing file untouched.
pub fn finish_install(
    report: &InstallReport,
    manifest_path: &Path,
    ui: &mut dyn UserInterface,
) -> Result<()> {
    if report.is_clean() {
        let line = "Installation complete without failures.";
        ui.success(line);
        debug!("{}", line);
        return Ok(());
    }

    let failed = report.failed_names();
    debug!(
        "Writing failed installations to {}.",
        manifest_path.display()
    );
    manifest::write(manifest_path, &failed)?;

    let line = format!(
        "The following libraries failed to install and have been added to '{}': {:?}",
        manifest_path.display(),
        failed
    );
    ui.warning(&line);
    debug!("{}", line);
    Ok(())
}
