//! Visual theme and styling.

use console::Style;

/// Styles used for terminal output.
#[derive(Debug, Clone)]
pub struct ShelfTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
}

impl Default for ShelfTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ShelfTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            header: Style::new().cyan().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(format!("♦ {}", title)))
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
