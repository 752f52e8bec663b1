//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::hotel::{ComparisonHotel, HotelId, HotelSummary};

use super::commands::compare::CompareArgs;
use super::commands::favorites::FavoritesArgs;

/// stayshelf - Keep hotel favorites and comparisons between sessions.
#[derive(Debug, Parser)]
#[command(name = "stayshelf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to settings file (overrides the default location)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the persisted lists
    #[arg(long, global = true, env = "STAYSHELF_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Show storage details
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print requested data and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage favorite hotels
    #[command(alias = "fav")]
    Favorites(FavoritesArgs),

    /// Manage the hotel comparison (up to 4 hotels)
    Compare(CompareArgs),

    /// Show resolved settings and storage paths
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Parse a number that can be stored and read back, rejecting NaN and
/// infinities.
fn finite_number(value: &str) -> Result<f64, String> {
    let number: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(format!("`{}` is not a finite number", value))
    }
}

/// Hotel fields shared by every command that stores a hotel.
#[derive(Debug, Clone, clap::Args)]
pub struct HotelArgs {
    /// Hotel ID
    #[arg(allow_negative_numbers = true)]
    pub id: HotelId,

    /// Hotel name
    #[arg(long)]
    pub name: String,

    /// Hotel location
    #[arg(long, default_value = "")]
    pub location: String,

    /// Image URL
    #[arg(long, default_value = "")]
    pub image: String,

    /// Guest review rating
    #[arg(long, default_value_t = 0.0, value_parser = finite_number)]
    pub rating: f64,

    /// Star classification (0-5)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=5))]
    pub stars: u8,
}

impl HotelArgs {
    /// Build the favorites record.
    pub fn to_summary(&self) -> HotelSummary {
        HotelSummary::new(self.id, self.name.clone())
            .with_location(self.location.clone())
            .with_image(self.image.clone())
            .with_rating(self.rating)
            .with_stars(f64::from(self.stars))
    }
}

/// Hotel fields for the comparison list.
#[derive(Debug, Clone, clap::Args)]
pub struct ComparisonArgs {
    #[command(flatten)]
    pub hotel: HotelArgs,

    /// Nightly price
    #[arg(long, value_parser = finite_number)]
    pub price: Option<f64>,

    /// Price before discount
    #[arg(long, value_parser = finite_number)]
    pub original_price: Option<f64>,

    /// Discount in percent
    #[arg(long)]
    pub discount: Option<u32>,

    /// Review label (e.g. "Excellent")
    #[arg(long)]
    pub review_label: Option<String>,

    /// Number of reviews
    #[arg(long)]
    pub review_count: Option<u32>,

    /// Location score
    #[arg(long, value_parser = finite_number)]
    pub location_score: Option<f64>,

    /// Features (comma-separated)
    #[arg(long = "feature", value_delimiter = ',')]
    pub features: Vec<String>,

    /// Perks (comma-separated)
    #[arg(long = "perk", value_delimiter = ',')]
    pub perks: Vec<String>,
}

impl ComparisonArgs {
    /// Build the comparison record.
    pub fn to_comparison(&self) -> ComparisonHotel {
        ComparisonHotel {
            review_label: self.review_label.clone(),
            review_count: self.review_count.map(f64::from),
            price: self.price,
            original_price: self.original_price,
            discount: self.discount.map(f64::from),
            location_score: self.location_score,
            features: self.features.clone(),
            perks: self.perks.clone(),
            ..ComparisonHotel::new(self.hotel.to_summary())
        }
    }
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
