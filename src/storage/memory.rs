//! In-memory slot storage.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::SlotStorage;
use crate::error::Result;

/// Slots held in a map for the lifetime of the value.
///
/// Single-threaded by construction (`RefCell`), matching the store model.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot (builder style).
    pub fn with_slot(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.borrow_mut().insert(key.into(), value.into());
        self
    }

    /// Check whether a slot exists.
    pub fn contains(&self, key: &str) -> bool {
        self.slots.borrow().contains_key(key)
    }

    /// Number of slots present.
    pub fn len(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Check if no slots are present.
    pub fn is_empty(&self) -> bool {
        self.slots.borrow().is_empty()
    }
}

impl SlotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn erase(&self, key: &str) -> Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
