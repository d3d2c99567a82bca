//! Library integration tests.

use std::cell::RefCell;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use launchpad::requirements::{Catalog, ModuleProbe, PackageManager};
use launchpad::runner::{BootstrapRunner, RunOptions, Toolkit};
use launchpad::shell::{LaunchHandle, LaunchOutcome, Launcher};
use launchpad::ui::MockUI;
use launchpad::LaunchpadError;
use tempfile::TempDir;

struct Importable(HashSet<String>);

impl ModuleProbe for Importable {
    fn load(&self, module: &str) -> launchpad::Result<()> {
        if self.0.contains(module) {
            Ok(())
        } else {
            Err(LaunchpadError::CommandFailed {
                command: format!("import {}", module),
                code: Some(1),
            })
        }
    }
}

struct RecordingPip {
    broken: HashSet<String>,
    calls: RefCell<Vec<String>>,
}

impl PackageManager for RecordingPip {
    fn install(&self, package: &str) -> launchpad::Result<()> {
        self.calls.borrow_mut().push(package.to_string());
        if self.broken.contains(package) {
            Err(LaunchpadError::CommandFailed {
                command: format!("pip install {}", package),
                code: Some(1),
            })
        } else {
            Ok(())
        }
    }
}

/// Reports an immediate clean exit for every launch.
#[derive(Default)]
struct InstantLauncher {
    launched: RefCell<Vec<PathBuf>>,
}

impl Launcher for InstantLauncher {
    fn launch(&self, path: &Path) -> launchpad::Result<LaunchHandle> {
        self.launched.borrow_mut().push(path.to_path_buf());
        let (tx, rx) = mpsc::channel();
        tx.send(LaunchOutcome {
            exit_code: Some(0),
            success: true,
        })
        .unwrap();
        Ok(LaunchHandle::from_parts(7, rx))
    }
}

fn set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> launchpad::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn full_run_through_public_api() {
    let temp = TempDir::new().unwrap();
    let probe = Importable(set(&["json", "requests"]));
    let pip = RecordingPip {
        broken: set(&["openpyxl"]),
        calls: RefCell::new(Vec::new()),
    };
    let launcher = InstantLauncher::default();

    let mut options = RunOptions::new(temp.path());
    options.catalog = Catalog::with_targets(
        ["json", "requests", "openpyxl", "tkinter"]
            .iter()
            .map(|s| s.to_string())
            .collect(),
    );

    let mut ui = MockUI::new();
    ui.set_prompt_response("install", "y");
    ui.set_prompt_response("launch", "y");

    let toolkit = Toolkit {
        probe: &probe,
        manager: &pip,
        launcher: &launcher,
    };
    let result = BootstrapRunner::new(toolkit, options).run(&mut ui).unwrap();

    assert_eq!(result.scan.queue, vec!["requests", "openpyxl", "tkinter"]);
    assert_eq!(*pip.calls.borrow(), vec!["requests", "openpyxl", "tkinter"]);
    assert_eq!(
        fs::read_to_string(temp.path().join("requirements.txt")).unwrap(),
        "openpyxl\n"
    );
    assert_eq!(launcher.launched.borrow().len(), 1);

    match result.launch {
        launchpad::runner::LaunchStatus::Started(handle) => {
            assert_eq!(handle.pid(), 7);
            let outcome = handle.try_outcome().expect("outcome already sent");
            assert!(outcome.success);
        }
        other => panic!("Expected Started, got {:?}", other),
    }
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use launchpad::cli::{Cli, Commands};

    let cli = Cli::parse_from(["launchpad", "check", "--json"]);
    if let Some(Commands::Check(args)) = cli.command {
        assert!(args.json);
    } else {
        panic!("Expected Check command");
    }
}
