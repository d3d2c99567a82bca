//! Check command implementation.
//!
//! The `launchpad check` command runs only the availability scan. It never
//! prompts, installs, or launches.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::{LaunchpadError, Result};
use crate::requirements::{scan, Catalog, InstallPolicy, InterpreterProbe, ScanReport};
use crate::ui::{SilentUI, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    python: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(python: &Path, args: CheckArgs) -> Self {
        Self {
            python: python.to_path_buf(),
            args,
        }
    }

    fn catalog(&self) -> Catalog {
        Catalog::with_targets(self.args.modules.clone())
    }
}

/// Render a scan report as pretty JSON.
pub fn render_json(report: &ScanReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| LaunchpadError::Other(e.into()))
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let probe = InterpreterProbe::new(&self.python);
        let catalog = self.catalog();

        if self.args.json {
            // Scan lines would corrupt the JSON document on stdout.
            let mut sink = SilentUI::new();
            let report = scan(&catalog, &probe, InstallPolicy::Reinstall, &mut sink);
            println!("{}", render_json(&report)?);
            return Ok(CommandResult::success());
        }

        let report = scan(&catalog, &probe, InstallPolicy::Reinstall, ui);
        ui.message("");
        ui.message(&format!(
            "Libraries that need to be installed: {:?}",
            report.queue
        ));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::requirements::{ModuleStatus, ScanEntry};
    use crate::ui::MockUI;

    #[test]
    fn render_json_lists_entries_and_queue() {
        let report = ScanReport {
            entries: vec![
                ScanEntry {
                    name: "sys".to_string(),
                    status: ModuleStatus::Builtin,
                },
                ScanEntry {
                    name: "openpyxl".to_string(),
                    status: ModuleStatus::Missing,
                },
            ],
            queue: vec!["openpyxl".to_string()],
        };

        let json = render_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["entries"][1]["name"], "openpyxl");
        assert_eq!(value["queue"], serde_json::json!(["openpyxl"]));
    }

    #[test]
    fn missing_interpreter_marks_everything_missing() {
        let args = CheckArgs {
            modules: vec!["sys".to_string(), "requests".to_string()],
            json: false,
        };
        let cmd = CheckCommand::new(Path::new("/nonexistent/launchpad-python"), args);
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 0);
        assert!(ui.has_message("sys is missing and needs to be installed."));
        assert!(ui.has_message(r#"["sys", "requests"]"#));
    }
}
