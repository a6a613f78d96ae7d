//! # Storage Layer
//!
//! This module defines the storage abstraction for habitz. The [`HabitStore`]
//! trait allows the application to work with different storage backends.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Keep business logic **decoupled** from persistence details
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage. One record file per
//!   habit, named by its decimal id, under a container directory that is
//!   created lazily on first write.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. Holds encoded
//!   record text rather than model objects, so every save/load round-trip
//!   exercises the codec exactly as the file store does.
//!
//! ## Consistency Model
//!
//! There is no caching: every get re-reads and re-decodes the record, every
//! save rewrites it wholesale. Saving unchanged state produces byte-identical
//! records. There is no locking either — concurrent access from multiple
//! processes is unsafe and documented as a known limitation.

use crate::error::Result;
use crate::model::{Habit, HabitId};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for habit storage.
pub trait HabitStore {
    /// Save a habit (create or update), overwriting any existing record.
    fn save_habit(&mut self, habit: &Habit) -> Result<()>;

    /// Load and decode the habit with the given id.
    fn get_habit(&self, id: HabitId) -> Result<Habit>;

    /// All stored habit ids, ascending. Also feeds id allocation and
    /// title search.
    fn list_ids(&self) -> Result<Vec<HabitId>>;

    /// Delete a habit permanently.
    fn delete_habit(&mut self, id: HabitId) -> Result<()>;

    /// The record file path for a habit (for file-based stores).
    fn habit_path(&self, id: HabitId) -> Result<PathBuf>;
}
