//! Operator-facing terminal interaction.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests
//! - [`SilentUI`] when stdout carries machine-readable output
//! - The yes/no gates in [`prompts`]
//!
//! # Example
//!
//! ```
//! use launchpad::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("sys is built-in.");
//! assert!(ui.has_message("built-in"));
//! ```

pub mod mock;
pub mod prompts;
pub mod silent;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use prompts::{confirm, is_affirmative, INSTALL_PROMPT, LAUNCH_PROMPT};
pub use silent::SilentUI;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, LaunchpadTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Show a prompt and return the raw answer line, without its line terminator.
    ///
    /// End of input is an error: there is no answer to act on.
    fn prompt(&mut self, prompt: &Prompt) -> Result<String>;
}

/// A question to show to the operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// Unique key for the prompt (used for lookup in tests and logs).
    pub key: String,
    /// The question to display, including any `Y/N` hint.
    pub question: String,
}

impl Prompt {
    /// Create a prompt.
    pub fn new(key: &str, question: &str) -> Self {
        Self {
            key: key.to_string(),
            question: question.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_new_copies_fields() {
        let prompt = Prompt::new("install", "Install now? Y/N: ");
        assert_eq!(prompt.key, "install");
        assert_eq!(prompt.question, "Install now? Y/N: ");
    }
}
