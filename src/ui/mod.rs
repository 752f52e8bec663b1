//! Terminal output.
//!
//! This module provides:
//! - [`UserInterface`] trait so commands can be tested against [`MockUI`]
//! - [`TerminalUI`] for real terminal output
//! - [`Table`] for hotel listings
//!
//! # Example
//!
//! ```
//! use stayshelf::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Added Harbour View to favorites");
//! assert!(ui.has_success("Harbour View"));
//! ```

pub mod mock;
pub mod output;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use table::{Align, Table};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ShelfTheme};

/// Trait for user-facing output.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Shown in every mode.
    fn error(&mut self, msg: &str);

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Write requested data (listings, JSON). Shown in every mode.
    fn data(&mut self, text: &str);
}
