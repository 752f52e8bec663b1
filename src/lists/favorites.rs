//! Favorite hotels.

use super::slot::{read_slot, write_slot, SlotRead};
use super::HotelList;
use crate::error::Result;
use crate::hotel::{HotelId, HotelSummary};
use crate::storage::SlotStorage;

/// Slot key for the favorites list.
pub const FAVORITES_KEY: &str = "stayshelf:favorites";

/// The hotels a user has marked as favorite.
///
/// Every mutation that changes the list writes the whole list back to
/// [`FAVORITES_KEY`]. A malformed slot is left in place on open and simply
/// overwritten by the next change.
#[derive(Debug)]
pub struct FavoritesStore<S: SlotStorage> {
    storage: S,
    favorites: HotelList<HotelSummary>,
}

impl<S: SlotStorage> FavoritesStore<S> {
    /// Open the store, seeding it from the persisted slot.
    pub fn open(storage: S) -> Self {
        let favorites = match read_slot(&storage, FAVORITES_KEY) {
            SlotRead::Loaded(entries) => {
                let list = HotelList::from_entries(entries);
                tracing::debug!("Loaded {} favorite(s)", list.len());
                list
            }
            SlotRead::Missing => HotelList::new(),
            SlotRead::Unreadable(e) => {
                tracing::warn!("Could not read favorites, starting empty: {}", e);
                HotelList::new()
            }
            SlotRead::Malformed(e) => {
                tracing::warn!("Ignoring malformed favorites slot: {}", e);
                HotelList::new()
            }
        };

        Self { storage, favorites }
    }

    /// Add a hotel unless one with the same id is already a favorite.
    ///
    /// Returns `true` if the hotel was added.
    pub fn add_favorite(&mut self, hotel: HotelSummary) -> bool {
        let added = self.favorites.push_unique(hotel);
        if added {
            self.persist();
        }
        added
    }

    /// Remove the favorite with `id`. Returns `true` if one was removed.
    pub fn remove_favorite(&mut self, id: HotelId) -> bool {
        let removed = self.favorites.remove(id).is_some();
        if removed {
            self.persist();
        }
        removed
    }

    /// Remove the hotel if it is a favorite, otherwise add it.
    ///
    /// Returns whether the hotel is a favorite afterwards.
    pub fn toggle_favorite(&mut self, hotel: HotelSummary) -> bool {
        if self.is_favorite(hotel.id) {
            self.remove_favorite(hotel.id);
            false
        } else {
            self.add_favorite(hotel);
            true
        }
    }

    /// Check whether `id` is a favorite.
    pub fn is_favorite(&self, id: HotelId) -> bool {
        self.favorites.contains(id)
    }

    /// Number of favorites.
    pub fn count(&self) -> usize {
        self.favorites.len()
    }

    /// Favorites in the order they were added.
    pub fn favorites(&self) -> &[HotelSummary] {
        self.favorites.as_slice()
    }

    /// Get the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the full list to the favorites slot.
    pub fn save(&self) -> Result<()> {
        write_slot(&self.storage, FAVORITES_KEY, self.favorites.as_slice())?;
        tracing::debug!("Saved {} favorite(s)", self.favorites.len());
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist favorites: {}", e);
        }
    }
}
