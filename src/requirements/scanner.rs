//! Availability scan.
//!
//! Walks the catalog's targets in order, probes each one, and builds the
//! installation queue. A failed probe is the `Missing` branch, not an error.

use serde::Serialize;
use tracing::debug;

use crate::requirements::catalog::Catalog;
use crate::requirements::probe::ModuleProbe;
use crate::requirements::status::{InstallPolicy, ModuleStatus, ScanEntry};
use crate::ui::UserInterface;

/// Result of scanning every target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// One entry per target, in scan order.
    pub entries: Vec<ScanEntry>,
    /// Names that need an install attempt, in scan order.
    pub queue: Vec<String>,
}

impl ScanReport {
    /// Status of a scanned module, if it was scanned.
    pub fn status_of(&self, name: &str) -> Option<ModuleStatus> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.status)
    }
}

/// Classify a single module.
pub fn classify(name: &str, catalog: &Catalog, probe: &dyn ModuleProbe) -> ModuleStatus {
    match probe.load(name) {
        Ok(()) if catalog.is_builtin(name) => ModuleStatus::Builtin,
        Ok(()) => ModuleStatus::ExternalPresent,
        Err(e) => {
            debug!("import of {} failed: {}", name, e);
            ModuleStatus::Missing
        }
    }
}

/// Scan every target, reporting one line per module.
pub fn scan(
    catalog: &Catalog,
    probe: &dyn ModuleProbe,
    policy: InstallPolicy,
    ui: &mut dyn UserInterface,
) -> ScanReport {
    let mut report = ScanReport::default();

    for name in catalog.targets() {
        let status = classify(name, catalog, probe);

        let line = status.describe(name, policy);
        ui.message(&line);
        debug!("{}", line);

        if status.needs_install(policy) {
            report.queue.push(name.clone());
        }
        report.entries.push(ScanEntry {
            name: name.clone(),
            status,
        });
    }

    report
}
