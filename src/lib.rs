//! stayshelf - Persisted hotel favorites and comparison lists.
//!
//! A hotel-booking front end keeps two small lists per user: favorited
//! hotels and up to four hotels queued for side-by-side comparison. Both
//! survive between sessions in a key-value slot store.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Settings file loading
//! - [`error`] - Error types and result aliases
//! - [`hotel`] - Hotel records and identifiers
//! - [`lists`] - The favorites and comparison stores
//! - [`storage`] - Persisted key-value slot backends
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use stayshelf::hotel::{ComparisonHotel, HotelId, HotelSummary};
//! use stayshelf::lists::{AddOutcome, ComparisonStore, FavoritesStore};
//! use stayshelf::storage::MemoryStorage;
//!
//! let storage = MemoryStorage::new();
//!
//! let mut favorites = FavoritesStore::open(&storage);
//! favorites.toggle_favorite(HotelSummary::new(7, "Harbour View"));
//! assert!(favorites.is_favorite(HotelId(7)));
//!
//! let mut comparison = ComparisonStore::open(&storage);
//! let hotel = ComparisonHotel::new(HotelSummary::new(7, "Harbour View"));
//! assert_eq!(comparison.add_hotel(hotel.clone()), AddOutcome::Added);
//! assert_eq!(comparison.add_hotel(hotel), AddOutcome::AlreadyPresent);
//!
//! // A fresh store on the same backend sees the persisted lists.
//! assert_eq!(FavoritesStore::open(&storage).count(), 1);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod hotel;
pub mod lists;
pub mod storage;
pub mod ui;

pub use error::{Result, StayshelfError};
