/// In-memory implementation of the habit storage interface
///
/// Backs ephemeral sessions and tests that need to observe what the stores
/// persist without touching the filesystem.

use std::cell::RefCell;

use crate::domain::{Habit, Theme};
use crate::storage::{HabitStorage, StorageError};

/// Storage that keeps both documents in memory
///
/// `save_count` records how many habit-collection writes happened, which the
/// store tests use to assert the persist-on-every-mutation contract.
#[derive(Default)]
pub struct MemoryStorage {
    habits: RefCell<Vec<Habit>>,
    theme: RefCell<Theme>,
    save_count: RefCell<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times the habit collection was saved
    pub fn habit_save_count(&self) -> usize {
        *self.save_count.borrow()
    }

    /// The last persisted habit collection
    pub fn persisted_habits(&self) -> Vec<Habit> {
        self.habits.borrow().clone()
    }
}

impl HabitStorage for MemoryStorage {
    fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError> {
        *self.habits.borrow_mut() = habits.to_vec();
        *self.save_count.borrow_mut() += 1;
        Ok(())
    }

    fn load_habits(&self) -> Result<Vec<Habit>, StorageError> {
        Ok(self.habits.borrow().clone())
    }

    fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        *self.theme.borrow_mut() = theme;
        Ok(())
    }

    fn load_theme(&self) -> Result<Theme, StorageError> {
        Ok(*self.theme.borrow())
    }
}
