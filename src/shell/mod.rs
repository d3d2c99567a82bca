//! Child process execution and detached launch.

pub mod command;
pub mod launch;
pub mod platform;

pub use command::{
    execute, execute_checked, CommandOptions, CommandResult, Invocation,
};
pub use launch::{DetachedLauncher, LaunchHandle, LaunchOutcome, Launcher};
pub use platform::{launch_shell, ShellInfo, DEFAULT_PYTHON};
