/// Export document building
///
/// Serializes the current habit collection into a versioned, downloadable
/// JSON document. Pure serialization: offering the document to the user (file
/// dialogs, downloads) is the UI shell's job, and no core logic depends on
/// this module.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{dates, Habit};

/// Version stamp written into every export document
pub const EXPORT_VERSION: &str = "1.0";

/// The exported document shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportData {
    pub habits: Vec<Habit>,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// Build an export document for the given collection
pub fn build_export(habits: &[Habit]) -> ExportData {
    ExportData {
        habits: habits.to_vec(),
        export_date: Utc::now(),
        version: EXPORT_VERSION.to_string(),
    }
}

/// Render an export document as pretty-printed JSON
pub fn export_json(habits: &[Habit]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&build_export(habits))
}

/// Suggested file name for an export taken on `day`
pub fn export_file_name(day: NaiveDate) -> String {
    format!("habits-{}.json", dates::format_date(day))
}
