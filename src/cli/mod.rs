//! Command-line interface for stayshelf.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ComparisonArgs, CompletionsArgs, ConfigArgs, HotelArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
