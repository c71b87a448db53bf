//! # Storage Layer
//!
//! This module defines the storage abstraction for jotz. The [`SlotStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! The entire note collection lives in **one slot**: a single serialized
//! document that is read once at startup and rewritten in full after every
//! mutation. There is no per-note persistence and no partial write. Last
//! writer wins if two processes race; with one slot there is no cross-file
//! consistency to repair.
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `MemorySlot` (no filesystem needed)
//! - Allow **future backends** without changing core logic
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: Production file-based storage, a JSON array in
//!   `notes.json` under the data directory
//! - [`memory::MemorySlot`]: In-memory slot for testing, holding the raw
//!   serialized string so malformed-content behavior is exercisable
//!
//! ## Corrupt Slots
//!
//! `load` never fails on bad content: a missing, unreadable-as-JSON, or
//! wrong-shaped slot is an empty store. The next save rewrites it wholesale.
//! Only hard IO errors (permissions, disk) surface as errors.

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;

/// Abstract interface for the persisted slot.
pub trait SlotStore {
    /// Read the full note list. Missing or malformed content yields an
    /// empty list, not an error.
    fn load(&self) -> Result<Vec<Note>>;

    /// Rewrite the slot with the full note list.
    fn save(&mut self, notes: &[Note]) -> Result<()>;
}
