//! Comparison command implementation.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::cli::args::ComparisonArgs;
use crate::hotel::HotelId;
use crate::lists::{AddOutcome, ComparisonStore, COMPARISON_KEY};
use crate::storage::FileStorage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::comparison_table;

/// Arguments for the `compare` command.
#[derive(Debug, Clone, Args)]
pub struct CompareArgs {
    #[command(subcommand)]
    pub command: CompareSubcommand,
}

/// Comparison subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CompareSubcommand {
    /// Show the hotels being compared.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add a hotel to the comparison.
    Add(ComparisonArgs),
    /// Remove a hotel from the comparison.
    Remove {
        /// Hotel ID.
        #[arg(allow_negative_numbers = true)]
        id: HotelId,
    },
    /// Remove every hotel from the comparison.
    Clear,
    /// Check whether a hotel is being compared (exits 1 if not).
    Check {
        /// Hotel ID.
        #[arg(allow_negative_numbers = true)]
        id: HotelId,
    },
}

/// The compare command implementation.
pub struct CompareCommand {
    storage: FileStorage,
    args: CompareArgs,
}

impl CompareCommand {
    /// Create a new compare command over `storage`.
    pub fn new(storage: FileStorage, args: CompareArgs) -> Self {
        Self { storage, args }
    }
}

impl Command for CompareCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut store = ComparisonStore::open(&self.storage);

        if ui.output_mode().shows_details() {
            if let Ok(path) = self.storage.slot_path(COMPARISON_KEY) {
                ui.message(&format!("Comparison slot: {}", path.display()));
            }
        }

        let exit_code = match &self.args.command {
            CompareSubcommand::List { json } => list_comparison(&store, *json, ui)?,
            CompareSubcommand::Add(hotel) => add_hotel(&mut store, hotel, ui),
            CompareSubcommand::Remove { id } => remove_hotel(&mut store, *id, ui),
            CompareSubcommand::Clear => clear_comparison(&mut store, ui),
            CompareSubcommand::Check { id } => check_hotel(&store, *id, ui),
        };

        Ok(if exit_code == 0 {
            CommandResult::success()
        } else {
            CommandResult::failure(exit_code)
        })
    }
}

fn list_comparison(
    store: &ComparisonStore<&FileStorage>,
    json: bool,
    ui: &mut dyn UserInterface,
) -> Result<u8> {
    if json {
        let output = serde_json::to_string_pretty(store.hotels())
            .context("Failed to serialize comparison")?;
        ui.data(&output);
        return Ok(0);
    }

    if store.count() == 0 {
        ui.message(&format!(
            "No hotels in comparison. Add up to {}.",
            store.max_hotels()
        ));
        return Ok(0);
    }

    ui.show_header(&format!(
        "Comparison ({}/{})",
        store.count(),
        store.max_hotels()
    ));
    ui.data(&comparison_table(store.hotels()).render());
    Ok(0)
}

fn add_hotel(
    store: &mut ComparisonStore<&FileStorage>,
    args: &ComparisonArgs,
    ui: &mut dyn UserInterface,
) -> u8 {
    let hotel = args.to_comparison();
    let id = hotel.id();

    match store.add_hotel(hotel) {
        AddOutcome::Added => {
            ui.success(&format!(
                "Added {} ({}) to comparison [{}/{}]",
                args.hotel.name,
                id,
                store.count(),
                store.max_hotels()
            ));
        }
        AddOutcome::AlreadyPresent => {
            ui.warning(&format!("Hotel {} is already in the comparison", id));
        }
        AddOutcome::Full => {
            ui.warning(&format!(
                "Comparison is full ({} hotels). Remove one first.",
                store.max_hotels()
            ));
        }
    }
    0
}

fn remove_hotel(
    store: &mut ComparisonStore<&FileStorage>,
    id: HotelId,
    ui: &mut dyn UserInterface,
) -> u8 {
    if store.remove_hotel(id) {
        ui.success(&format!("Removed hotel {} from comparison", id));
    } else {
        ui.warning(&format!("Hotel {} is not in the comparison", id));
    }
    0
}

fn clear_comparison(store: &mut ComparisonStore<&FileStorage>, ui: &mut dyn UserInterface) -> u8 {
    let count = store.count();
    store.clear_all();
    ui.success(&format!("Cleared {} hotel(s) from comparison", count));
    0
}

fn check_hotel(
    store: &ComparisonStore<&FileStorage>,
    id: HotelId,
    ui: &mut dyn UserInterface,
) -> u8 {
    if store.is_in_comparison(id) {
        ui.message(&format!("Hotel {} is in the comparison", id));
        0
    } else {
        ui.message(&format!("Hotel {} is not in the comparison", id));
        1
    }
}
