//! Reading and writing a list slot.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, StayshelfError};
use crate::storage::SlotStorage;

/// Outcome of reading a list slot.
#[derive(Debug)]
pub(crate) enum SlotRead<T> {
    /// No slot stored under the key.
    Missing,
    /// The backend failed to read the slot.
    Unreadable(StayshelfError),
    /// The slot exists but does not hold a list of `T`.
    Malformed(serde_json::Error),
    Loaded(Vec<T>),
}

/// Read and decode the list stored under `key`.
pub(crate) fn read_slot<T, S>(storage: &S, key: &str) -> SlotRead<T>
where
    T: DeserializeOwned,
    S: SlotStorage + ?Sized,
{
    let raw = match storage.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return SlotRead::Missing,
        Err(e) => return SlotRead::Unreadable(e),
    };

    match serde_json::from_str(&raw) {
        Ok(entries) => SlotRead::Loaded(entries),
        Err(e) => SlotRead::Malformed(e),
    }
}

/// Encode `entries` and store them under `key`, replacing the slot.
pub(crate) fn write_slot<T, S>(storage: &S, key: &str, entries: &[T]) -> Result<()>
where
    T: Serialize,
    S: SlotStorage + ?Sized,
{
    let json = serde_json::to_string(entries).map_err(|e| StayshelfError::Serialize {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    storage.write(key, &json)
}
