/// Public library interface for the habit tracker core
///
/// This crate is the state-management and statistics subsystem of a
/// local-first habit tracker: the habit entity and its calendar bookkeeping,
/// the streak/completion-rate engine with its time-bounded cache, the
/// observable collection store, and the JSON persistence layer a UI shell
/// drives.

// Internal modules
mod analytics;
mod domain;
mod export;
mod storage;
mod store;

// Re-export public modules and types
pub use analytics::{
    app_stats_on, calculate_streak, completion_rate_on, AnalyticsEngine, COMPLETION_WINDOW_DAYS,
};
pub use domain::{dates, AppStats, DomainError, Habit, HabitId, HabitStats, Theme};
pub use export::{build_export, export_file_name, export_json, ExportData, EXPORT_VERSION};
pub use storage::{HabitStorage, JsonFileStorage, MemoryStorage, StorageError};
pub use store::{HabitStore, SubscriptionId, ThemeStore};
