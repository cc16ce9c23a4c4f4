/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, HabitStats, AppStats) and
/// their validation rules, plus the calendar utilities everything else is
/// built on.

pub mod dates;
pub mod habit;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
