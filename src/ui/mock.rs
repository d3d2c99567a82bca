//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt answers.
//!
//! # Example
//!
//! ```
//! use launchpad::ui::{MockUI, Prompt, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("install", "y");
//!
//! let answer = ui.prompt(&Prompt::new("install", "Install now? Y/N: ")).unwrap();
//! assert_eq!(answer, "y");
//! assert_eq!(ui.prompts_shown(), &["install".to_string()]);
//! ```

use std::collections::{HashMap, HashSet};
use std::io;

use crate::error::{LaunchpadError, Result};

use super::{Prompt, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt answers.
/// Unconfigured prompts answer with an empty line.
///
/// [`MockUI::set_prompt_end_of_input`] makes a prompt fail the way a closed
/// stdin does.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    prompt_responses: HashMap<String, String>,
    closed_prompts: HashSet<String>,
    prompts_shown: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the answer for a prompt key.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Make the prompt with `key` hit end of input.
    pub fn set_prompt_end_of_input(&mut self, key: &str) {
        self.closed_prompts.insert(key.to_string());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all prompts that were shown (by key).
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        self.prompts_shown.push(prompt.key.clone());

        if self.closed_prompts.contains(&prompt.key) {
            return Err(LaunchpadError::Prompt {
                question: prompt.question.trim_end().to_string(),
                source: io::ErrorKind::UnexpectedEof.into(),
            });
        }

        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .cloned()
            .unwrap_or_default())
    }
}
