//! Python module availability and installation.
//!
//! This module checks whether the modules an application imports are
//! available to the interpreter, and installs the ones that are not.
//!
//! # Modules
//!
//! - [`catalog`] - Fixed target list and known standard-library names
//! - [`probe`] - Import probes
//! - [`status`] - Classification types
//! - [`scanner`] - Availability scan and installation queue
//! - [`installer`] - Package installation and failure collection
//! - [`manifest`] - Requirements file for failed installs

pub mod catalog;
pub mod installer;
pub mod manifest;
pub mod probe;
pub mod scanner;
pub mod status;

pub use catalog::Catalog;
pub use installer::{finish_install, install_all, InstallFailure, InstallReport, PackageManager, Pip};
pub use probe::{InterpreterProbe, ModuleProbe};
pub use scanner::{classify, scan, ScanReport};
pub use status::{InstallPolicy, ModuleStatus, ScanEntry};
