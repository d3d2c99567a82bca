//! Module classification types.
//!
//! Each scanned target produces a [`ScanEntry`] whose [`ModuleStatus`]
//! says whether it imported and whether it ships with the interpreter.

use serde::Serialize;

/// The result of probing a single module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleStatus {
    /// Imports and is part of the standard library.
    Builtin,

    /// Imports but is not a known standard-library module.
    ExternalPresent,

    /// Does not import.
    Missing,
}

/// Which statuses go on the installation queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InstallPolicy {
    /// Queue every external module, even one that already imports.
    #[default]
    Reinstall,

    /// Queue only modules that fail to import.
    SkipPresent,
}

impl ModuleStatus {
    /// Whether a module with this status is queued for install.
    pub fn needs_install(&self, policy: InstallPolicy) -> bool {
        match self {
            ModuleStatus::Builtin => false,
            ModuleStatus::ExternalPresent => policy == InstallPolicy::Reinstall,
            ModuleStatus::Missing => true,
        }
    }

    /// Operator-facing line for a scanned module.
    pub fn describe(&self, name: &str, policy: InstallPolicy) -> String {
        match self {
            ModuleStatus::Builtin => format!("{} is built-in.", name),
            ModuleStatus::ExternalPresent if self.needs_install(policy) => {
                format!(
                    "{} is an external library and needs to be installed.",
                    name
                )
            }
            ModuleStatus::ExternalPresent => {
                format!("{} is an external library and is already installed.", name)
            }
            ModuleStatus::Missing => format!("{} is missing and needs to be installed.", name),
        }
    }
}

/// One scanned module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanEntry {
    /// Module name as imported.
    pub name: String,
    /// Classification.
    pub status: ModuleStatus,
}
