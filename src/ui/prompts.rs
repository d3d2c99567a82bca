//! Yes/no confirmation gates.
//!
//! A gate asks one question, reads one raw line, and proceeds only on an
//! answer that lowercases to exactly `y`. There is no re-prompt and no
//! validation: any other line, including an empty one, declines silently.
//! End of input is not an answer and fails the run.

use tracing::debug;

use crate::error::Result;

use super::{Prompt, UserInterface};

/// Gate shown before the install phase.
pub const INSTALL_PROMPT: &str = "Install now? Y/N: ";

/// Gate shown before the launch phase.
pub const LAUNCH_PROMPT: &str = "Want to launch the program? Y/N: ";

/// Whether a raw answer counts as "yes".
pub fn is_affirmative(answer: &str) -> bool {
    answer.to_lowercase() == "y"
}

/// Ask a yes/no question and report whether the operator accepted.
///
/// With `assume_yes` the question is not shown and the answer is taken as
/// `y`. Read errors, end of input included, propagate.
pub fn confirm(ui: &mut dyn UserInterface, prompt: &Prompt, assume_yes: bool) -> Result<bool> {
    debug!("Prompting: {}", prompt.question.trim_end());
    let answer = if assume_yes {
        "y".to_string()
    } else {
        ui.prompt(prompt)?
    };
    debug!("Answer = {}", answer);
    Ok(is_affirmative(&answer))
}

/// Strip one trailing line terminator (`\n` or `\r\n`) from a raw line.
pub(crate) fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
