//! launchpad - check, install, and launch a Python application.
//!
//! launchpad asks an interpreter whether each module an application imports
//! is available, offers to `pip install` the ones that are external or
//! missing, records failed installs in a requirements file, and offers to
//! start the application as a detached process.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Log file format and subscriber setup
//! - [`requirements`] - Module scan, install, and requirements file
//! - [`runner`] - Phase orchestration
//! - [`shell`] - Child processes and detached launch
//! - [`ui`] - Terminal output and yes/no gates
//!
//! # Example
//!
//! ```
//! use launchpad::requirements::{InstallPolicy, ModuleStatus};
//!
//! assert!(ModuleStatus::ExternalPresent.needs_install(InstallPolicy::Reinstall));
//! assert!(!ModuleStatus::ExternalPresent.needs_install(InstallPolicy::SkipPresent));
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{LaunchpadError, Result};
