//! Module import probes.
//!
//! A probe answers one question: can the interpreter import this module
//! right now? The production probe asks a real interpreter in a child
//! process. Any failure (non-zero exit, interpreter not found) means the
//! module is missing; the caller never sees it as an error.
//!
//! # Example
//!
//! ```no_run
//! use launchpad::requirements::probe::{InterpreterProbe, ModuleProbe};
//!
//! let probe = InterpreterProbe::new("python3");
//! if probe.load("requests").is_ok() {
//!     println!("requests imports");
//! }
//! ```

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::Result;
use crate::shell::{execute_checked, CommandOptions, Invocation};

/// Imports the module named by the first script argument.
pub const IMPORT_SNIPPET: &str = "import importlib, sys; importlib.import_module(sys.argv[1])";

/// Attempts to load a module by name.
pub trait ModuleProbe {
    /// `Ok(())` if `module` imports, an error describing why not otherwise.
    fn load(&self, module: &str) -> Result<()>;
}

/// Probe backed by an interpreter executable.
#[derive(Debug, Clone)]
pub struct InterpreterProbe {
    python: PathBuf,
}

impl InterpreterProbe {
    /// Create a probe for the given interpreter.
    pub fn new(python: impl Into<PathBuf>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Interpreter this probe runs.
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// The invocation used to import `module`.
    pub fn invocation(&self, module: &str) -> Invocation {
        Invocation::new(&self.python, ["-c", IMPORT_SNIPPET, module])
    }
}

impl ModuleProbe for InterpreterProbe {
    fn load(&self, module: &str) -> Result<()> {
        let invocation = self.invocation(module);
        trace!("probing: {}", invocation);
        execute_checked(&invocation, &CommandOptions::quiet())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invocation_passes_module_as_argument() {
        let probe = InterpreterProbe::new("python3");
        let inv = probe.invocation("xml.etree");
        assert_eq!(inv.program(), Path::new("python3"));
        assert_eq!(inv.args(), &["-c", IMPORT_SNIPPET, "xml.etree"]);
    }

    #[test]
    fn missing_interpreter_is_an_error() {
        let probe = InterpreterProbe::new("/nonexistent/launchpad-test-python");
        assert!(probe.load("sys").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_decides_importability() {
        // `sh -c <script> <module>` exits 0 only when $0 is "good".
        struct ShellProbe;
        impl ModuleProbe for ShellProbe {
            fn load(&self, module: &str) -> Result<()> {
                let inv = Invocation::new("sh", ["-c", "test \"$0\" = good", module]);
                execute_checked(&inv, &CommandOptions::quiet())
            }
        }

        assert!(ShellProbe.load("good").is_ok());
        assert!(ShellProbe.load("bad").is_err());
    }
}
