//! Favorites command implementation.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::cli::args::HotelArgs;
use crate::hotel::HotelId;
use crate::lists::{FavoritesStore, FAVORITES_KEY};
use crate::storage::FileStorage;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::favorites_table;

/// Arguments for the `favorites` command.
#[derive(Debug, Clone, Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: FavoritesSubcommand,
}

/// Favorites subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum FavoritesSubcommand {
    /// List favorite hotels.
    List {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Add a hotel to favorites.
    Add(HotelArgs),
    /// Remove a hotel from favorites.
    Remove {
        /// Hotel ID.
        #[arg(allow_negative_numbers = true)]
        id: HotelId,
    },
    /// Add the hotel if it isn't a favorite, remove it if it is.
    Toggle(HotelArgs),
    /// Check whether a hotel is a favorite (exits 1 if not).
    Check {
        /// Hotel ID.
        #[arg(allow_negative_numbers = true)]
        id: HotelId,
    },
}

/// The favorites command implementation.
pub struct FavoritesCommand {
    storage: FileStorage,
    args: FavoritesArgs,
}

impl FavoritesCommand {
    /// Create a new favorites command over `storage`.
    pub fn new(storage: FileStorage, args: FavoritesArgs) -> Self {
        Self { storage, args }
    }
}

impl Command for FavoritesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        let mut store = FavoritesStore::open(&self.storage);

        if ui.output_mode().shows_details() {
            if let Ok(path) = self.storage.slot_path(FAVORITES_KEY) {
                ui.message(&format!("Favorites slot: {}", path.display()));
            }
        }

        let exit_code = match &self.args.command {
            FavoritesSubcommand::List { json } => list_favorites(&store, *json, ui)?,
            FavoritesSubcommand::Add(hotel) => add_favorite(&mut store, hotel, ui),
            FavoritesSubcommand::Remove { id } => remove_favorite(&mut store, *id, ui),
            FavoritesSubcommand::Toggle(hotel) => toggle_favorite(&mut store, hotel, ui),
            FavoritesSubcommand::Check { id } => check_favorite(&store, *id, ui),
        };

        Ok(if exit_code == 0 {
            CommandResult::success()
        } else {
            CommandResult::failure(exit_code)
        })
    }
}

fn list_favorites(
    store: &FavoritesStore<&FileStorage>,
    json: bool,
    ui: &mut dyn UserInterface,
) -> Result<u8> {
    if json {
        let output = serde_json::to_string_pretty(store.favorites())
            .context("Failed to serialize favorites")?;
        ui.data(&output);
        return Ok(0);
    }

    if store.count() == 0 {
        ui.message("No favorites yet.");
        return Ok(0);
    }

    ui.show_header(&format!("Favorites ({})", store.count()));
    ui.data(&favorites_table(store.favorites()).render());
    Ok(0)
}

fn add_favorite(
    store: &mut FavoritesStore<&FileStorage>,
    hotel: &HotelArgs,
    ui: &mut dyn UserInterface,
) -> u8 {
    if store.add_favorite(hotel.to_summary()) {
        report_added(hotel, ui);
    } else {
        ui.warning(&format!("Hotel {} is already a favorite", hotel.id));
    }
    0
}

fn remove_favorite(
    store: &mut FavoritesStore<&FileStorage>,
    id: HotelId,
    ui: &mut dyn UserInterface,
) -> u8 {
    if store.remove_favorite(id) {
        report_removed(id, ui);
    } else {
        ui.warning(&format!("Hotel {} is not a favorite", id));
    }
    0
}

fn toggle_favorite(
    store: &mut FavoritesStore<&FileStorage>,
    hotel: &HotelArgs,
    ui: &mut dyn UserInterface,
) -> u8 {
    if store.toggle_favorite(hotel.to_summary()) {
        report_added(hotel, ui);
    } else {
        report_removed(hotel.id, ui);
    }
    0
}

fn report_added(hotel: &HotelArgs, ui: &mut dyn UserInterface) {
    ui.success(&format!("Added {} ({}) to favorites", hotel.name, hotel.id));
}

fn report_removed(id: HotelId, ui: &mut dyn UserInterface) {
    ui.success(&format!("Removed hotel {} from favorites", id));
}

fn check_favorite(
    store: &FavoritesStore<&FileStorage>,
    id: HotelId,
    ui: &mut dyn UserInterface,
) -> u8 {
    if store.is_favorite(id) {
        ui.message(&format!("Hotel {} is a favorite", id));
        0
    } else {
        ui.message(&format!("Hotel {} is not a favorite", id));
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    fn hotel_args(id: i64, name: &str) -> HotelArgs {
        HotelArgs {
            id: HotelId(id),
            name: name.to_string(),
            location: "Porto".to_string(),
            image: String::new(),
            rating: 8.7,
            stars: 4,
        }
    }

    fn run(temp: &TempDir, command: FavoritesSubcommand, ui: &mut MockUI) -> CommandResult {
        let cmd = FavoritesCommand::new(
            FileStorage::new(temp.path()),
            FavoritesArgs { command },
        );
        cmd.execute(ui).unwrap()
    }

    #[test]
    fn list_empty() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, FavoritesSubcommand::List { json: false }, &mut ui);

        assert!(result.success);
        assert!(ui.has_message("No favorites yet"));
    }

    #[test]
    fn add_then_list() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        run(&temp, FavoritesSubcommand::Add(hotel_args(7, "Ribeira Inn")), &mut ui);
        assert!(ui.has_success("Added Ribeira Inn (7)"));

        run(&temp, FavoritesSubcommand::List { json: false }, &mut ui);
        assert!(ui.headers().iter().any(|h| h == "Favorites (1)"));
        assert!(ui.data_output().contains("Ribeira Inn"));
        assert!(ui.data_output().contains("★★★★"));
    }

    #[test]
    fn duplicate_add_warns() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        run(&temp, FavoritesSubcommand::Add(hotel_args(7, "A")), &mut ui);
        let result = run(&temp, FavoritesSubcommand::Add(hotel_args(7, "B")), &mut ui);

        assert!(result.success);
        assert!(ui.has_warning("already a favorite"));
    }

    #[test]
    fn list_json_is_array() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        run(&temp, FavoritesSubcommand::Add(hotel_args(1, "A")), &mut ui);
        run(&temp, FavoritesSubcommand::Add(hotel_args(2, "B")), &mut ui);

        let mut ui = MockUI::new();
        run(&temp, FavoritesSubcommand::List { json: true }, &mut ui);

        let value: serde_json::Value = serde_json::from_str(&ui.data_output()).unwrap();
        let ids: Vec<i64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|h| h["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn remove_missing_warns() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = run(&temp, FavoritesSubcommand::Remove { id: HotelId(3) }, &mut ui);

        assert!(result.success);
        assert!(ui.has_warning("not a favorite"));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        run(&temp, FavoritesSubcommand::Toggle(hotel_args(5, "Casa")), &mut ui);
        assert!(ui.has_success("Added Casa (5)"));

        run(&temp, FavoritesSubcommand::Toggle(hotel_args(5, "Casa")), &mut ui);
        assert!(ui.has_success("Removed hotel 5"));

        let store = FavoritesStore::open(FileStorage::new(temp.path()));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn toggle_off_reports_like_remove() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        run(&temp, FavoritesSubcommand::Add(hotel_args(6, "Six")), &mut ui);
        run(&temp, FavoritesSubcommand::Toggle(hotel_args(6, "Six")), &mut ui);
        run(&temp, FavoritesSubcommand::Add(hotel_args(6, "Six")), &mut ui);
        run(&temp, FavoritesSubcommand::Remove { id: HotelId(6) }, &mut ui);

        let removals: Vec<&String> = ui
            .successes()
            .iter()
            .filter(|msg| msg.starts_with("Removed"))
            .collect();
        assert_eq!(removals.len(), 2);
        assert_eq!(removals[0], removals[1]);
    }

    #[test]
    fn check_exit_codes() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        run(&temp, FavoritesSubcommand::Add(hotel_args(9, "Nine")), &mut ui);

        let yes = run(&temp, FavoritesSubcommand::Check { id: HotelId(9) }, &mut ui);
        let no = run(&temp, FavoritesSubcommand::Check { id: HotelId(10) }, &mut ui);

        assert_eq!(yes.exit_code, 0);
        assert_eq!(no.exit_code, 1);
    }

    #[test]
    fn verbose_shows_slot_path() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::with_mode(OutputMode::Verbose);

        run(&temp, FavoritesSubcommand::List { json: false }, &mut ui);

        assert!(ui.has_message("stayshelf_favorites.json"));
    }
}
