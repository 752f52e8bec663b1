//! Hotels queued for side-by-side comparison.

use std::fmt;

use super::slot::{read_slot, write_slot, SlotRead};
use super::HotelList;
use crate::error::Result;
use crate::hotel::{ComparisonHotel, HotelId};
use crate::storage::SlotStorage;

/// Slot key for the comparison list.
pub const COMPARISON_KEY: &str = "stayshelf:comparison";

/// Maximum number of hotels in a comparison.
pub const MAX_HOTELS: usize = 4;

/// What happened to a hotel passed to [`ComparisonStore::add_hotel`].
///
/// Rejections leave the list untouched; the variant only tells the caller
/// which guard applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The hotel was appended.
    Added,
    /// A hotel with the same id is already in the comparison.
    AlreadyPresent,
    /// The comparison already holds [`MAX_HOTELS`] hotels.
    Full,
}

impl AddOutcome {
    /// Check if the hotel was appended.
    pub fn is_added(self) -> bool {
        matches!(self, Self::Added)
    }
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::AlreadyPresent => write!(f, "already in comparison"),
            Self::Full => write!(f, "comparison is full"),
        }
    }
}

/// Up to [`MAX_HOTELS`] hotels selected for comparison.
///
/// Unlike favorites, a slot that exists but cannot be decoded is erased on
/// open.
#[derive(Debug)]
pub struct ComparisonStore<S: SlotStorage> {
    storage: S,
    hotels: HotelList<ComparisonHotel>,
}

impl<S: SlotStorage> ComparisonStore<S> {
    /// Open the store, seeding it from the persisted slot.
    pub fn open(storage: S) -> Self {
        let hotels = match read_slot(&storage, COMPARISON_KEY) {
            SlotRead::Loaded(entries) => {
                let mut list = HotelList::from_entries(entries);
                if list.len() > MAX_HOTELS {
                    tracing::warn!(
                        "Comparison slot holds {} hotels, keeping the first {}",
                        list.len(),
                        MAX_HOTELS
                    );
                    list.truncate(MAX_HOTELS);
                }
                tracing::debug!("Loaded {} hotel(s) for comparison", list.len());
                list
            }
            SlotRead::Missing => HotelList::new(),
            SlotRead::Unreadable(e) => {
                tracing::warn!("Could not read comparison, starting empty: {}", e);
                HotelList::new()
            }
            SlotRead::Malformed(e) => {
                tracing::warn!("Erasing malformed comparison slot: {}", e);
                if let Err(e) = storage.erase(COMPARISON_KEY) {
                    tracing::warn!("Failed to erase comparison slot: {}", e);
                }
                HotelList::new()
            }
        };

        Self { storage, hotels }
    }

    /// Add a hotel if it is not already present and there is room.
    pub fn add_hotel(&mut self, hotel: ComparisonHotel) -> AddOutcome {
        if self.hotels.contains(hotel.id()) {
            return AddOutcome::AlreadyPresent;
        }
        if !self.can_add_more() {
            return AddOutcome::Full;
        }

        self.hotels.push_unique(hotel);
        self.persist();
        AddOutcome::Added
    }

    /// Remove the hotel with `id`. Returns `true` if one was removed.
    pub fn remove_hotel(&mut self, id: HotelId) -> bool {
        let removed = self.hotels.remove(id).is_some();
        if removed {
            self.persist();
        }
        removed
    }

    /// Empty the comparison.
    pub fn clear_all(&mut self) {
        self.hotels.clear();
        self.persist();
    }

    /// Check whether `id` is in the comparison.
    pub fn is_in_comparison(&self, id: HotelId) -> bool {
        self.hotels.contains(id)
    }

    /// Check whether another hotel fits.
    pub fn can_add_more(&self) -> bool {
        self.hotels.len() < MAX_HOTELS
    }

    /// The capacity, for display.
    pub fn max_hotels(&self) -> usize {
        MAX_HOTELS
    }

    /// Number of hotels selected.
    pub fn count(&self) -> usize {
        self.hotels.len()
    }

    /// Hotels in the order they were added.
    pub fn hotels(&self) -> &[ComparisonHotel] {
        self.hotels.as_slice()
    }

    /// Get the backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the full list to the comparison slot.
    pub fn save(&self) -> Result<()> {
        write_slot(&self.storage, COMPARISON_KEY, self.hotels.as_slice())?;
        tracing::debug!("Saved {} hotel(s) for comparison", self.hotels.len());
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            tracing::warn!("Failed to persist comparison: {}", e);
        }
    }
}
