//! Persisted key-value slots.
//!
//! A slot is a single named string value that outlives the process, the way
//! browser local storage outlives a page session. The stores in
//! [`crate::lists`] only ever talk to a [`SlotStorage`], so the same list
//! logic runs over an in-memory map in tests and over a data directory in
//! the CLI.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use std::rc::Rc;

use crate::error::Result;

/// A key-value backend holding persisted slots.
///
/// Methods take `&self` so one backend can be shared by several stores.
pub trait SlotStorage {
    /// Read a slot. Returns `Ok(None)` if the slot does not exist.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Create or overwrite a slot.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing a missing slot is not an error.
    fn erase(&self, key: &str) -> Result<()>;
}

impl<T: SlotStorage + ?Sized> SlotStorage for &T {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn erase(&self, key: &str) -> Result<()> {
        (**self).erase(key)
    }
}

impl<T: SlotStorage + ?Sized> SlotStorage for Rc<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn erase(&self, key: &str) -> Result<()> {
        (**self).erase(key)
    }
}

impl<T: SlotStorage + ?Sized> SlotStorage for Box<T> {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn erase(&self, key: &str) -> Result<()> {
        (**self).erase(key)
    }
}
