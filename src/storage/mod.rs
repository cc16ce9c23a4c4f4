/// Storage layer for persisting habit data
///
/// This module handles durable persistence of the habit collection and the
/// theme preference. It provides a clean interface so the stores never know
/// whether they are talking to the JSON-file backend or the in-memory one.

pub mod json;
pub mod memory;

// Re-export the concrete storage types
pub use json::JsonFileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

use crate::domain::{Habit, Theme};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No writable storage location available")]
    NoLocation,
}

/// Trait defining the persistence interface for habits and theme
///
/// Both documents are saved whole on every write: the collection store does
/// read-modify-write against its in-memory state and persists the full
/// result, never deltas. Implementations must return `Ok` with an empty /
/// default value when the underlying data is simply missing, and reserve
/// `Err` for actual read or decode failures.
pub trait HabitStorage {
    /// Persist the full habit collection
    fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError>;

    /// Load the habit collection; empty when nothing was ever saved
    fn load_habits(&self) -> Result<Vec<Habit>, StorageError>;

    /// Persist the theme preference
    fn save_theme(&self, theme: Theme) -> Result<(), StorageError>;

    /// Load the theme preference; `Theme::Light` when nothing was ever saved
    fn load_theme(&self) -> Result<Theme, StorageError>;
}

/// Shared handles to a backend are backends themselves
///
/// Lets a caller keep an `Rc` to the storage it hands to a store, e.g. to
/// observe persisted state in tests.
impl<S: HabitStorage + ?Sized> HabitStorage for std::rc::Rc<S> {
    fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError> {
        (**self).save_habits(habits)
    }

    fn load_habits(&self) -> Result<Vec<Habit>, StorageError> {
        (**self).load_habits()
    }

    fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        (**self).save_theme(theme)
    }

    fn load_theme(&self) -> Result<Theme, StorageError> {
        (**self).load_theme()
    }
}
