//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod compare;
pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod display;
pub mod favorites;

pub use dispatcher::{Command, CommandContext, CommandDispatcher, CommandResult};
