//! Terminal UI.

use console::Term;
use std::io::{self, BufRead, Write};

use crate::error::{LaunchpadError, Result};

use super::prompts::strip_line_ending;
use super::{should_use_colors, LaunchpadTheme, Prompt, UserInterface};

/// Terminal UI implementation.
///
/// Messages go to stdout. Answers are read line by line from `input`,
/// which is stdin outside of tests.
pub struct TerminalUI {
    term: Term,
    theme: LaunchpadTheme,
    input: Box<dyn BufRead>,
}

impl TerminalUI {
    /// Create a terminal UI reading answers from stdin.
    pub fn new(no_color: bool) -> Self {
        Self::with_input(no_color, Box::new(io::stdin().lock()))
    }

    /// Create a terminal UI reading answers from `input`.
    pub fn with_input(no_color: bool, input: Box<dyn BufRead>) -> Self {
        let theme = if !no_color && should_use_colors() {
            LaunchpadTheme::new()
        } else {
            LaunchpadTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            input,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<String> {
        let read_err = |source: io::Error| LaunchpadError::Prompt {
            question: prompt.question.trim_end().to_string(),
            source,
        };

        write!(self.term, "{}", self.theme.prompt.apply_to(&prompt.question)).map_err(read_err)?;
        self.term.flush().map_err(read_err)?;

        let mut line = String::new();
        if self.input.read_line(&mut line).map_err(read_err)? == 0 {
            return Err(read_err(io::ErrorKind::UnexpectedEof.into()));
        }
        strip_line_ending(&mut line);
        Ok(line)
    }
}
