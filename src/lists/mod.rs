//! Persisted hotel lists.
//!
//! This module provides the two client-side lists a user builds while
//! browsing:
//! - [`FavoritesStore`] - hotels marked as favorite
//! - [`ComparisonStore`] - up to [`MAX_HOTELS`] hotels queued for comparison
//!
//! Both keep an in-memory [`HotelList`] and write the full list to their
//! slot after every change. Loading never fails: a missing or unreadable
//! slot starts the list empty.

mod comparison;
mod favorites;
mod list;
mod slot;

pub use comparison::{AddOutcome, ComparisonStore, COMPARISON_KEY, MAX_HOTELS};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use list::HotelList;
