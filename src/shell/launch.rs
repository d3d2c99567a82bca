//! Detached program launch.
//!
//! The launch target is started through the host shell with no console
//! window, no inherited stdio, and (on Unix) its own process group, so it
//! outlives the bootstrap run. The caller gets a [`LaunchHandle`] back
//! immediately; a watcher thread reports the child's exit through it.

use std::io;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::{LaunchpadError, Result};

use super::platform::{launch_shell, ShellInfo};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// How a launched program ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchOutcome {
    /// Exit code (None if killed by signal or if waiting failed).
    pub exit_code: Option<i32>,

    /// Whether the program exited with status 0.
    pub success: bool,
}

/// Handle to a launched program.
///
/// Dropping the handle does not affect the program.
#[derive(Debug)]
pub struct LaunchHandle {
    pid: u32,
    outcome: Receiver<LaunchOutcome>,
}

impl LaunchHandle {
    /// Build a handle from a pid and the channel its outcome arrives on.
    pub fn from_parts(pid: u32, outcome: Receiver<LaunchOutcome>) -> Self {
        Self { pid, outcome }
    }

    /// Process id of the launched child.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// The outcome, if the program has already ended.
    pub fn try_outcome(&self) -> Option<LaunchOutcome> {
        match self.outcome.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Wait up to `timeout` for the program to end.
    pub fn wait_outcome(&self, timeout: Duration) -> Option<LaunchOutcome> {
        match self.outcome.recv_timeout(timeout) {
            Ok(outcome) => Some(outcome),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}

/// Starts a program without waiting for it.
pub trait Launcher {
    /// Start the program at `path`.
    fn launch(&self, path: &Path) -> Result<LaunchHandle>;
}

/// Launches through the host shell as a detached child.
#[derive(Debug, Clone)]
pub struct DetachedLauncher {
    shell: ShellInfo,
}

impl Default for DetachedLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl DetachedLauncher {
    /// Create a launcher using the host shell.
    pub fn new() -> Self {
        Self {
            shell: launch_shell(),
        }
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.shell.executable);
        cmd.arg(self.shell.command_flag);

        // The path is passed as $0 so the shell never re-splits it.
        #[cfg(unix)]
        cmd.arg("exec \"$0\"").arg(path);
        #[cfg(not(unix))]
        cmd.arg(path);

        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        cmd
    }
}

impl Launcher for DetachedLauncher {
    fn launch(&self, path: &Path) -> Result<LaunchHandle> {
        let child = self
            .command(path)
            .spawn()
            .map_err(|e| LaunchpadError::SpawnFailed {
                command: path.display().to_string(),
                message: e.to_string(),
            })?;

        let pid = child.id();
        debug!("Spawned {} as pid {}", path.display(), pid);

        let (tx, rx) = mpsc::channel();
        let watcher = thread::Builder::new()
            .name("launch-watcher".to_string())
            .spawn(move || {
                let outcome = watch(child);
                debug!("Launched pid {} ended: {:?}", pid, outcome);
                // The receiver may be gone; the program has ended either way.
                let _ = tx.send(outcome);
            });

        Ok(launch_handle(pid, rx, watcher))
    }
}

/// Build the handle for a started child.
///
/// The child is already running, so a watcher that failed to start only
/// loses the exit notification. Its closure, and with it the sender, is
/// gone, so the handle never reports an outcome.
fn launch_handle(
    pid: u32,
    outcome: Receiver<LaunchOutcome>,
    watcher: io::Result<thread::JoinHandle<()>>,
) -> LaunchHandle {
    if let Err(e) = watcher {
        warn!("Started pid {} but cannot watch it: {}", pid, e);
    }
    LaunchHandle::from_parts(pid, outcome)
}

fn watch(mut child: Child) -> LaunchOutcome {
    match child.wait() {
        Ok(status) => LaunchOutcome {
            exit_code: status.code(),
            success: status.success(),
        },
        Err(_) => LaunchOutcome {
            exit_code: None,
            success: false,
        },
    }
}
