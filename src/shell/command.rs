//! Child process execution.
//!
//! Probes and installs run a program directly with an argument vector, wait
//! for it, and look only at the exit status. Output is either inherited
//! (so the operator sees `pip`) or discarded.

use crate::error::{LaunchpadError, Result};
use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<String>,
}

impl Invocation {
    /// Create an invocation.
    pub fn new<P, I, S>(program: P, args: I) -> Self
    where
        P: AsRef<OsStr>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: PathBuf::from(program.as_ref()),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Program to run.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of executing a command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Discard stdout and stderr instead of inheriting them.
    pub discard_output: bool,
}

impl CommandOptions {
    /// Options that discard all output.
    pub fn quiet() -> Self {
        Self {
            discard_output: true,
        }
    }

    /// Options that let the child write to the terminal.
    pub fn inherited() -> Self {
        Self::default()
    }
}

/// Run an invocation to completion.
///
/// Errors only when the process cannot be started. A non-zero exit is
/// reported in the returned [`CommandResult`].
pub fn execute(invocation: &Invocation, options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new(&invocation.program);
    cmd.args(&invocation.args);

    if options.discard_output {
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
    }

    let status = cmd.status().map_err(|e| LaunchpadError::SpawnFailed {
        command: invocation.to_string(),
        message: e.to_string(),
    })?;

    Ok(CommandResult {
        exit_code: status.code(),
        success: status.success(),
    })
}

/// Run an invocation and turn a non-zero exit into an error.
pub fn execute_checked(invocation: &Invocation, options: &CommandOptions) -> Result<()> {
    let result = execute(invocation, options)?;
    if result.success {
        Ok(())
    } else {
        Err(LaunchpadError::CommandFailed {
            command: invocation.to_string(),
            code: result.exit_code,
        })
    }
}
