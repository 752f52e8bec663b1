//! Shell completions generation.

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;
use clap::CommandFactory;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

impl Command for CompletionsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut cmd = Cli::command();
        let mut buf = Vec::new();
        clap_complete::generate(self.args.shell, &mut cmd, "stayshelf", &mut buf);
        ui.data(String::from_utf8_lossy(&buf).trim_end());
        Ok(CommandResult::success())
    }
}
