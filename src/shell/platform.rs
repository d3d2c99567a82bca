//! Platform-specific defaults.

use std::path::PathBuf;

/// Interpreter used when `--python` is not given.
#[cfg(windows)]
pub const DEFAULT_PYTHON: &str = "python";

/// Interpreter used when `--python` is not given.
#[cfg(not(windows))]
pub const DEFAULT_PYTHON: &str = "python3";

/// The host shell used to start the launch target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInfo {
    /// Shell executable path.
    pub executable: PathBuf,

    /// Flag that makes the shell run the next argument as a command.
    pub command_flag: &'static str,
}

/// Detect the shell that interprets the launch command.
///
/// This is the system shell (`/bin/sh`, or `COMSPEC` on Windows), not the
/// operator's login shell, so the command syntax is always known.
pub fn launch_shell() -> ShellInfo {
    if cfg!(target_os = "windows") {
        ShellInfo {
            executable: std::env::var("COMSPEC")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("cmd.exe")),
            command_flag: "/C",
        }
    } else {
        ShellInfo {
            executable: PathBuf::from("/bin/sh"),
            command_flag: "-c",
        }
    }
}
