//! UI that keeps stdout clean.
//!
//! Used when stdout carries machine-readable output. Errors still reach the
//! operator on stderr; everything else is dropped.

use crate::error::Result;

use super::{Prompt, UserInterface};

/// Output-suppressing UI.
#[derive(Debug, Default)]
pub struct SilentUI;

impl SilentUI {
    /// Create a silent UI.
    pub fn new() -> Self {
        Self
    }
}

impl UserInterface for SilentUI {
    fn message(&mut self, _msg: &str) {}

    fn success(&mut self, _msg: &str) {}

    fn warning(&mut self, _msg: &str) {}

    fn error(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }

    /// Always declines: there is nobody to ask.
    fn prompt(&mut self, _prompt: &Prompt) -> Result<String> {
        Ok(String::new())
    }
}
