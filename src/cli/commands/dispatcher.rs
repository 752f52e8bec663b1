//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandContext`] for the resolved settings and data directory
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::{default_data_dir, default_settings_path, load_settings, Settings};
use crate::error::Result;
use crate::storage::FileStorage;
use crate::ui::{OutputMode, UserInterface};

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: u8,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: u8) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Settings and paths resolved from flags, environment and settings file.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Settings file that was loaded, if any.
    pub settings_path: Option<PathBuf>,

    /// Merged settings.
    pub settings: Settings,

    /// Directory holding the slot files.
    pub data_dir: PathBuf,
}

impl CommandContext {
    /// Resolve the context for a parsed command line.
    ///
    /// Precedence for the data directory: `--data-dir` (or
    /// `STAYSHELF_DATA_DIR`), then `data_dir` from the settings file, then
    /// the platform default.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let settings_path = cli
            .config
            .clone()
            .or_else(|| default_settings_path().filter(|p| p.is_file()));
        let settings = load_settings(settings_path.as_deref())?;

        let data_dir = cli
            .data_dir
            .clone()
            .or_else(|| settings.data_dir.clone())
            .unwrap_or_else(default_data_dir);

        tracing::debug!("Using data directory {:?}", data_dir);

        Ok(Self {
            settings_path,
            settings,
            data_dir,
        })
    }

    /// Output mode: `--verbose`/`--quiet` win over the settings file.
    pub fn output_mode(&self, cli: &Cli) -> OutputMode {
        if cli.verbose {
            OutputMode::Verbose
        } else if cli.quiet {
            OutputMode::Quiet
        } else {
            self.settings.output.map(OutputMode::from).unwrap_or_default()
        }
    }

    /// Slot storage rooted at the data directory.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for a resolved context.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Favorites(args) => {
                let cmd = super::favorites::FavoritesCommand::new(
                    self.context.storage(),
                    args.clone(),
                );
                cmd.execute(ui)
            }
            Commands::Compare(args) => {
                let cmd =
                    super::compare::CompareCommand::new(self.context.storage(), args.clone());
                cmd.execute(ui)
            }
            Commands::Config(args) => {
                let cmd = super::config::ConfigCommand::new(self.context.clone(), args.clone());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
