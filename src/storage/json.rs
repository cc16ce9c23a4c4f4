/// JSON-file implementation of the habit storage interface
///
/// Keeps a two-key key-value layout: one document for the habit collection
/// (`habits.json`) and one for the theme preference (`theme.json`), both
/// living in a single storage directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Habit, Theme};
use crate::storage::{HabitStorage, StorageError};

const HABITS_FILE: &str = "habits.json";
const THEME_FILE: &str = "theme.json";

/// File-backed storage keeping each document as pretty-printed JSON
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Create a storage instance rooted at `dir`, creating it if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        tracing::info!("JSON storage initialized at: {:?}", dir);

        Ok(Self { dir })
    }

    /// Pick a default storage directory with a fallback strategy
    ///
    /// Tries the user's home directory, then the platform data and config
    /// directories, then the current working directory, keeping the first
    /// one that is actually writable.
    pub fn default_dir() -> Result<PathBuf, StorageError> {
        let candidates = [
            dirs::home_dir().map(|p| p.join(".habit-tracker")),
            dirs::data_dir().map(|p| p.join("habit-tracker")),
            dirs::config_dir().map(|p| p.join("habit-tracker")),
            std::env::current_dir().ok().map(|p| p.join(".habit-tracker")),
        ];

        for candidate in candidates.iter().flatten() {
            if fs::create_dir_all(candidate).is_ok() {
                let probe = candidate.join(".write-probe");
                if fs::write(&probe, b"probe").is_ok() {
                    let _ = fs::remove_file(&probe);
                    return Ok(candidate.clone());
                }
            }
        }

        Err(StorageError::NoLocation)
    }

    /// Serialize `value` and atomically replace the document at `path`
    ///
    /// Writes go through a sibling temp file and a rename, so an interrupted
    /// write leaves the previous document intact.
    fn write_document<T: serde::Serialize>(&self, path: &Path, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(value)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn habits_path(&self) -> PathBuf {
        self.dir.join(HABITS_FILE)
    }

    fn theme_path(&self) -> PathBuf {
        self.dir.join(THEME_FILE)
    }
}

impl HabitStorage for JsonFileStorage {
    fn save_habits(&self, habits: &[Habit]) -> Result<(), StorageError> {
        self.write_document(&self.habits_path(), &habits)
    }

    fn load_habits(&self) -> Result<Vec<Habit>, StorageError> {
        let path = self.habits_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.write_document(&self.theme_path(), &theme)
    }

    fn load_theme(&self) -> Result<Theme, StorageError> {
        let path = self.theme_path();
        if !path.exists() {
            return Ok(Theme::default());
        }

        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
