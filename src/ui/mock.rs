//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.

use super::{OutputMode, UserInterface};

/// Mock UI capturing every interaction.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    data: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
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

    /// Get all captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Get all captured data output, joined by newlines.
    pub fn data_output(&self) -> String {
        self.data.join("\n")
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
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

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

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn data(&mut self, text: &str) {
        self.data.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_ui_captures_output() {
        let mut ui = MockUI::new();
        ui.message("hello");
        ui.success("done");
        ui.warning("careful");
        ui.error("broken");
        ui.show_header("Title");

        assert!(ui.has_message("hello"));
        assert!(ui.has_success("done"));
        assert!(ui.has_warning("careful"));
        assert!(ui.has_error("broken"));
        assert_eq!(ui.headers(), &["Title".to_string()]);
    }

    #[test]
    fn mock_ui_joins_data() {
        let mut ui = MockUI::new();
        ui.data("line one");
        ui.data("line two");

        assert_eq!(ui.data_output(), "line one\nline two");
    }

    #[test]
    fn mock_ui_with_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
    }
}
