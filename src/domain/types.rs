/// Core types used throughout the domain layer
///
/// This module defines the fundamental types like HabitId, the derived
/// statistics structs, and the Theme preference that are used by the habit
/// entity, the analytics engine, and the stores.

use serde::{Deserialize, Serialize};

/// Unique identifier for a habit
///
/// This is a wrapper around the creation instant in Unix milliseconds to
/// provide type safety - you can't accidentally pass an arbitrary integer
/// where a habit ID is expected. Ids are assigned at creation and never
/// change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub i64);

impl HabitId {
    /// Derive a habit ID from the current time
    pub fn now() -> Self {
        Self(chrono::Utc::now().timestamp_millis())
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derived per-habit statistics
///
/// Never stored: always recomputed from a habit's completion set (and cached
/// by the analytics engine for up to 60 seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    /// Longest run of consecutive-day completions in the habit's history
    pub streak: u32,
    /// Percentage of eligible days completed over the trailing 14-day window
    pub completion_rate: u8,
}

/// Derived aggregate statistics over the whole habit collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStats {
    /// Number of habits in the collection
    pub total_habits: usize,
    /// Habits completed on today's local calendar day
    pub completed_today: usize,
    /// Completion percentage across all habits over the last 14 days
    pub overall_completion: u8,
}

/// Process-wide UI theme preference
///
/// Lifecycle is independent from the habit collection; persisted under its
/// own key by the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}
