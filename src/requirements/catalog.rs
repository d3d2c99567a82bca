//! The fixed module lists a run works from.
//!
//! `DEFAULT_TARGETS` is what the application imports. `KNOWN_BUILTINS` is
//! the set of standard-library names that never need a package install.
//! Both are read-only for the lifetime of a run.

use std::collections::HashSet;

/// Modules the application imports, in scan order.
pub const DEFAULT_TARGETS: &[&str] = &[
    "sys",
    "logging",
    "subprocess",
    "tkinter",
    "openpyxl",
    "requests",
    "datetime",
    "os",
    "shutil",
    "json",
    "re",
    "webbrowser",
];

/// Standard-library modules that ship with the interpreter.
pub const KNOWN_BUILTINS: &[&str] = &[
    "importlib",
    "getpass",
    "sys",
    "logging",
    "subprocess",
    "tkinter",
    "datetime",
    "os",
    "shutil",
    "json",
    "re",
    "webbrowser",
    "collections",
    "itertools",
    "math",
    "time",
    "functools",
    "random",
    "operator",
    "string",
    "statistics",
    "uuid",
    "io",
    "pickle",
    "socket",
    "hashlib",
    "http",
    "urllib",
    "socketserver",
    "select",
    "platform",
    "email",
    "http.client",
    "http.cookiejar",
    "http.cookies",
    "http.server",
    "pdb",
    "sqlite3",
    "xml",
    "xml.etree",
    "csv",
    "asyncio",
    "asyncore",
    "curses",
    "traceback",
    "zlib",
    "contextlib",
    "wsgiref",
    "xml.sax",
    "xmlrpc",
];

/// Target list plus builtin set for one run.
#[derive(Debug, Clone)]
pub struct Catalog {
    targets: Vec<String>,
    builtins: HashSet<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect(),
            KNOWN_BUILTINS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl Catalog {
    /// Create a catalog from explicit lists.
    pub fn new(targets: Vec<String>, builtins: HashSet<String>) -> Self {
        Self { targets, builtins }
    }

    /// The default builtin set with a different target list.
    ///
    /// An empty `targets` keeps the default target list.
    pub fn with_targets(targets: Vec<String>) -> Self {
        if targets.is_empty() {
            return Self::default();
        }
        Self {
            targets,
            ..Self::default()
        }
    }

    /// Targets in scan order.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Whether `name` ships with the interpreter.
    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_keep_order() {
        let catalog = Catalog::default();
        assert_eq!(catalog.targets().first().map(String::as_str), Some("sys"));
        assert_eq!(
            catalog.targets().last().map(String::as_str),
            Some("webbrowser")
        );
        assert_eq!(catalog.targets().len(), DEFAULT_TARGETS.len());
    }

    #[test]
    fn third_party_targets_are_not_builtin() {
        let catalog = Catalog::default();
        assert!(!catalog.is_builtin("openpyxl"));
        assert!(!catalog.is_builtin("requests"));
        assert!(catalog.is_builtin("tkinter"));
        assert!(catalog.is_builtin("http.cookiejar"));
    }

    #[test]
    fn with_targets_overrides_list_only() {
        let catalog = Catalog::with_targets(vec!["numpy".to_string(), "os".to_string()]);
        assert_eq!(catalog.targets(), &["numpy", "os"]);
        assert!(catalog.is_builtin("os"));
    }

    #[test]
    fn with_empty_targets_uses_defaults() {
        let catalog = Catalog::with_targets(Vec::new());
        assert_eq!(catalog.targets().len(), DEFAULT_TARGETS.len());
    }
}
