//! Bootstrap orchestration.
//!
//! Three phases run in a fixed order, each taking the previous phase's
//! result as a value: scan, then install behind a gate, then launch behind
//! a second gate. Probe, install, and launch failures are reported and the
//! run continues; any other error ends it.

use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::error::Result;
use crate::requirements::manifest::DEFAULT_MANIFEST;
use crate::requirements::{
    finish_install, install_all, scan, Catalog, InstallPolicy, InstallReport, ModuleProbe,
    PackageManager, ScanReport,
};
use crate::shell::{LaunchHandle, Launcher};
use crate::ui::{confirm, Prompt, UserInterface, INSTALL_PROMPT, LAUNCH_PROMPT};

/// Launch target used when none is given.
pub const DEFAULT_LAUNCH_TARGET: &str = "HEMA_Pakbon_Editor.pyw";

/// The collaborators a run talks to.
pub struct Toolkit<'a> {
    /// Module import probe.
    pub probe: &'a dyn ModuleProbe,
    /// Package installer.
    pub manager: &'a dyn PackageManager,
    /// Program launcher.
    pub launcher: &'a dyn Launcher,
}

/// Options for a bootstrap run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Modules to scan.
    pub catalog: Catalog,
    /// Queueing rule for modules that already import.
    pub policy: InstallPolicy,
    /// Directory the launch target is resolved against.
    pub working_dir: PathBuf,
    /// Launch target file name, relative to `working_dir`.
    pub target: PathBuf,
    /// Where failed installs are recorded.
    pub manifest_path: PathBuf,
    /// Accept both gates without asking.
    pub assume_yes: bool,
}

impl RunOptions {
    /// Default options rooted at `working_dir`.
    pub fn new(working_dir: &Path) -> Self {
        Self {
            catalog: Catalog::default(),
            policy: InstallPolicy::default(),
            working_dir: working_dir.to_path_buf(),
            target: PathBuf::from(DEFAULT_LAUNCH_TARGET),
            manifest_path: working_dir.join(DEFAULT_MANIFEST),
            assume_yes: false,
        }
    }

    /// Absolute path of the launch target.
    pub fn target_path(&self) -> PathBuf {
        self.working_dir.join(&self.target)
    }
}

/// What happened in the launch phase.
#[derive(Debug)]
pub enum LaunchStatus {
    /// The operator declined the launch gate.
    Declined,
    /// The program was started; it runs on its own.
    Started(LaunchHandle),
    /// The program could not be started.
    Failed(String),
}

impl LaunchStatus {
    /// Whether a child process was started.
    pub fn is_started(&self) -> bool {
        matches!(self, LaunchStatus::Started(_))
    }
}

/// Result of a bootstrap run.
#[derive(Debug)]
pub struct BootstrapResult {
    /// Scan classification and installation queue.
    pub scan: ScanReport,
    /// Install batch result, or `None` if the install gate was declined.
    pub install: Option<InstallReport>,
    /// Launch phase result.
    pub launch: LaunchStatus,
}

/// Runs the scan, install, and launch phases.
pub struct BootstrapRunner<'a> {
    toolkit: Toolkit<'a>,
    options: RunOptions,
}

impl<'a> BootstrapRunner<'a> {
    /// Create a runner.
    pub fn new(toolkit: Toolkit<'a>, options: RunOptions) -> Self {
        Self { toolkit, options }
    }

    /// Run every phase in order.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<BootstrapResult> {
        let scan = self.scan_phase(ui);
        let install = self.install_phase(&scan, ui)?;
        let launch = self.launch_phase(ui)?;

        Ok(BootstrapResult {
            scan,
            install,
            launch,
        })
    }

    /// Phase 1: classify every target and build the queue.
    pub fn scan_phase(&self, ui: &mut dyn UserInterface) -> ScanReport {
        debug!("Scanning {} modules.", self.options.catalog.targets().len());
        let report = scan(
            &self.options.catalog,
            self.toolkit.probe,
            self.options.policy,
            ui,
        );

        let line = format!("Libraries that need to be installed: {:?}", report.queue);
        ui.message("");
        ui.message(&line);
        debug!("{}", line);
        report
    }

    /// Phase 2: install the queue if the operator agrees.
    pub fn install_phase(
        &self,
        scan: &ScanReport,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<InstallReport>> {
        let prompt = Prompt::new("install", INSTALL_PROMPT);
        if !confirm(ui, &prompt, self.options.assume_yes)? {
            return Ok(None);
        }

        let report = install_all(&scan.queue, self.toolkit.manager, ui);
        finish_install(&report, &self.options.manifest_path, ui)?;
        Ok(Some(report))
    }

    /// Phase 3: start the launch target if the operator agrees.
    ///
    /// Returns as soon as the child is spawned.
    pub fn launch_phase(&self, ui: &mut dyn UserInterface) -> Result<LaunchStatus> {
        let prompt = Prompt::new("launch", LAUNCH_PROMPT);
        if !confirm(ui, &prompt, self.options.assume_yes)? {
            return Ok(LaunchStatus::Declined);
        }

        let path = self.options.target_path();
        ui.message(&path.display().to_string());

        match self.toolkit.launcher.launch(&path) {
            Ok(handle) => {
                let line = "Launcher script started.";
                ui.success(line);
                debug!("{} (pid {})", line, handle.pid());
                Ok(LaunchStatus::Started(handle))
            }
            Err(e) => {
                let line = format!("Failed to start the launcher script: {}", e);
                ui.error(&line);
                error!("{}", line);
                Ok(LaunchStatus::Failed(e.to_string()))
            }
        }
    }
}
