/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a behavior the
/// user tracks, along with validation and the pure completion-toggle
/// operations the collection store builds on.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::domain::{DomainError, HabitId};

/// A habit represents something the user wants to do regularly
///
/// This is the core entity in our system. Each habit has a name and a set of
/// calendar days on which it was completed. The serialized shape matches the
/// persisted JSON document: `completedDates` is a list of canonical
/// `YYYY-MM-DD` strings in append order, `createdAt` an ISO-8601 instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier, derived from the creation timestamp
    pub id: HabitId,
    /// Display name (e.g., "Morning Run", "Read for 30min")
    pub name: String,
    /// Days this habit was completed; append-ordered, no duplicates
    pub completed_dates: Vec<NaiveDate>,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit with validation
    ///
    /// The name is trimmed; an empty trimmed name is rejected. The id is
    /// derived from the current instant and the completion set starts empty.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = Self::validate_name(name)?;

        Ok(Self {
            id: HabitId::now(),
            name,
            completed_dates: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Create a habit from existing data (used when loading from storage)
    ///
    /// This constructor assumes data is already validated and is mainly used
    /// by the storage layer and by tests that need fixed ids and dates.
    pub fn from_existing(
        id: HabitId,
        name: String,
        completed_dates: Vec<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            completed_dates,
            created_at,
        }
    }

    /// Toggle completion for a calendar day, returning the updated habit
    ///
    /// Pure: the input is untouched. If `date` is already in the completion
    /// set it is removed, otherwise it is appended, so toggling the same day
    /// twice restores the original set.
    pub fn toggle_completion(&self, date: NaiveDate) -> Habit {
        let mut toggled = self.clone();

        if let Some(position) = toggled.completed_dates.iter().position(|d| *d == date) {
            toggled.completed_dates.remove(position);
        } else {
            toggled.completed_dates.push(date);
        }

        toggled
    }

    /// Whether this habit was completed on the given calendar day
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// The habit's creation instant normalized to the local calendar day
    ///
    /// Completion-rate windows count a day as "possible" only from this day
    /// onwards.
    pub fn creation_day(&self) -> NaiveDate {
        self.created_at.with_timezone(&Local).date_naive()
    }

    /// Validate and normalize a habit name according to business rules
    fn validate_name(name: &str) -> Result<String, DomainError> {
        let trimmed = name.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidHabitName(
                "Habit name cannot be empty".to_string()
            ));
        }

        Ok(trimmed.to_string())
    }
}
