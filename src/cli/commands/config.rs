//! Config command implementation.
//!
//! Shows where settings came from and where each list is persisted.

use serde::Serialize;
use std::path::PathBuf;

use crate::cli::args::ConfigArgs;
use crate::error::Result;
use crate::lists::{COMPARISON_KEY, FAVORITES_KEY};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult};

/// Resolved configuration as reported by `stayshelf config`.
#[derive(Debug, Serialize)]
struct ResolvedConfig {
    settings_file: Option<PathBuf>,
    data_dir: PathBuf,
    favorites_slot: PathBuf,
    comparison_slot: PathBuf,
    output: &'static str,
}

/// The config command implementation.
pub struct ConfigCommand {
    context: CommandContext,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(context: CommandContext, args: ConfigArgs) -> Self {
        Self { context, args }
    }

    fn resolve(&self, mode: OutputMode) -> Result<ResolvedConfig> {
        let storage = self.context.storage();
        Ok(ResolvedConfig {
            settings_file: self.context.settings_path.clone(),
            data_dir: self.context.data_dir.clone(),
            favorites_slot: storage.slot_path(FAVORITES_KEY)?,
            comparison_slot: storage.slot_path(COMPARISON_KEY)?,
            output: match mode {
                OutputMode::Verbose => "verbose",
                OutputMode::Normal => "normal",
                OutputMode::Quiet => "quiet",
            },
        })
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = self.resolve(ui.output_mode())?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolved)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        let settings_file = resolved
            .settings_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(defaults)".to_string());

        ui.data(&format!("settings file:    {}", settings_file));
        ui.data(&format!("data dir:         {}", resolved.data_dir.display()));
        ui.data(&format!(
            "favorites slot:   {}",
            resolved.favorites_slot.display()
        ));
        ui.data(&format!(
            "comparison slot:  {}",
            resolved.comparison_slot.display()
        ));
        ui.data(&format!("output:           {}", resolved.output));

        Ok(CommandResult::success())
    }
}
