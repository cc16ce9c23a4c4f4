/// End-to-end scenarios over the collection store and file-backed storage
use habit_tracker_core::*;

use tempfile::TempDir;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("habit_tracker_core=debug")
        .with_test_writer()
        .try_init();
}

#[test]
fn test_add_toggle_stats_delete_scenario() {
    init_logging();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = JsonFileStorage::new(dir.path()).expect("Failed to create storage");
    let mut store = HabitStore::new(Box::new(storage));

    // Add: collection has one habit, persisted.
    store.add("Read");
    assert_eq!(store.habits().len(), 1);
    let id = store.habits()[0].id;

    // Toggle for today: exactly one completed date.
    let today = dates::today();
    store.toggle(id, today);
    assert_eq!(store.habits()[0].completed_dates, vec![today]);

    // Stats: one-day streak; created today, so 1 possible and 1 completed
    // day in the window.
    let stats = store.habit_stats(id).expect("habit exists");
    assert_eq!(stats.streak, 1);
    assert_eq!(stats.completion_rate, 100);

    let app = store.app_stats();
    assert_eq!(app.total_habits, 1);
    assert_eq!(app.completed_today, 1);
    assert_eq!(app.overall_completion, 100);

    // Delete: collection empty, persisted again with the empty list.
    store.delete(id);
    assert!(store.habits().is_empty());
    assert!(store.habit_stats(id).is_none());

    let reread = JsonFileStorage::new(dir.path()).unwrap();
    assert!(reread.load_habits().unwrap().is_empty());
}

#[test]
fn test_state_survives_store_restart() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let today = dates::today();

    {
        let storage = JsonFileStorage::new(dir.path()).unwrap();
        let mut store = HabitStore::new(Box::new(storage));
        store.add("Meditate");
        store.toggle(store.habits()[0].id, today);
    }

    let storage = JsonFileStorage::new(dir.path()).unwrap();
    let mut store = HabitStore::new(Box::new(storage));
    store.init();

    assert_eq!(store.habits().len(), 1);
    assert_eq!(store.habits()[0].name, "Meditate");
    assert!(store.habits()[0].is_completed_on(today));
}

#[test]
fn test_corrupt_habits_document_degrades_to_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("habits.json"), "{ definitely not json").unwrap();

    let storage = JsonFileStorage::new(dir.path()).unwrap();
    let mut store = HabitStore::new(Box::new(storage));
    store.init();

    assert!(store.habits().is_empty());

    // The store keeps working and overwrites the corrupt document.
    store.add("Read");
    let reread = JsonFileStorage::new(dir.path()).unwrap();
    assert_eq!(reread.load_habits().unwrap().len(), 1);
}

#[test]
fn test_theme_survives_restart() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let storage = JsonFileStorage::new(dir.path()).unwrap();
        let mut themes = ThemeStore::new(Box::new(storage));
        themes.init();
        themes.toggle();
    }

    let storage = JsonFileStorage::new(dir.path()).unwrap();
    let mut themes = ThemeStore::new(Box::new(storage));
    themes.init();

    assert_eq!(themes.theme(), Theme::Dark);
}

#[test]
fn test_export_matches_persisted_collection() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = JsonFileStorage::new(dir.path()).unwrap();
    let mut store = HabitStore::new(Box::new(storage));

    store.add("Read");
    store.add("Run");

    let json = export_json(store.habits()).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(doc["version"], "1.0");
    assert_eq!(doc["habits"].as_array().unwrap().len(), 2);
    assert_eq!(doc["habits"][1]["name"], "Run");
}
