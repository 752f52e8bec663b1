//! Ordered, id-deduplicated list.

use std::collections::HashSet;

use crate::hotel::{HotelId, ListEntry};

/// Entries in insertion order with an id index for constant-time membership.
#[derive(Debug, Clone)]
pub struct HotelList<T> {
    entries: Vec<T>,
    ids: HashSet<HotelId>,
}

impl<T> Default for HotelList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            ids: HashSet::new(),
        }
    }
}

impl<T: ListEntry> HotelList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from loaded entries, keeping the first of any duplicate ids.
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::new();
        for entry in entries {
            let id = entry.hotel_id();
            if !list.push_unique(entry) {
                tracing::debug!("Dropping duplicate hotel {} from loaded list", id);
            }
        }
        list
    }

    /// Check whether an entry with `id` is present.
    pub fn contains(&self, id: HotelId) -> bool {
        self.ids.contains(&id)
    }

    /// Append `entry` unless its id is already present.
    ///
    /// Returns `true` if the entry was appended.
    pub fn push_unique(&mut self, entry: T) -> bool {
        if !self.ids.insert(entry.hotel_id()) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    /// Remove the entry with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: HotelId) -> Option<T> {
        if !self.ids.remove(&id) {
            return None;
        }
        let index = self.entries.iter().position(|e| e.hotel_id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Keep only the first `len` entries.
    pub fn truncate(&mut self, len: usize) {
        for dropped in self.entries.drain(len.min(self.entries.len())..) {
            self.ids.remove(&dropped.hotel_id());
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.ids.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }
}

impl<'a, T: ListEntry> IntoIterator for &'a HotelList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
