//! Visual theme and styling.

use console::Style;

/// launchpad's visual theme.
#[derive(Debug, Clone)]
pub struct LaunchpadTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for prompts (bold).
    pub prompt: Style,
}

impl Default for LaunchpadTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchpadTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            prompt: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            prompt: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = LaunchpadTheme::plain().format_success("Launcher script started.");
        assert_eq!(msg, "✓ Launcher script started.");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = LaunchpadTheme::plain().format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = LaunchpadTheme::plain().format_error("Failed to install foo");
        assert!(msg.starts_with("✗"));
        assert!(msg.contains("Failed to install foo"));
    }

    #[test]
    fn plain_prompt_is_unstyled() {
        let theme = LaunchpadTheme::plain();
        assert_eq!(
            theme.prompt.apply_to("Install now? Y/N: ").to_string(),
            "Install now? Y/N: "
        );
    }
}
