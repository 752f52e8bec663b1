//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, ShelfTheme, UserInterface};

/// Terminal UI writing status to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: ShelfTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            ShelfTheme::new()
        } else {
            ShelfTheme::plain()
        };

        Self::with_theme(mode, theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(mode: OutputMode, theme: ShelfTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_header(title)).ok();
        }
    }

    fn data(&mut self, text: &str) {
        writeln!(self.out, "{}", text).ok();
    }
}

/// Create the UI for the given mode.
///
/// `no_color` forces the plain theme regardless of the terminal.
pub fn create_ui(mode: OutputMode, no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(TerminalUI::with_theme(mode, ShelfTheme::plain()))
    } else {
        Box::new(TerminalUI::new(mode))
    }
}
