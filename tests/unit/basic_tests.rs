/// Basic unit tests exercising the public API
use habit_tracker_core::*;

use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn habit_with_dates(id: i64, days: &[NaiveDate]) -> Habit {
    Habit::from_existing(
        HabitId(id),
        format!("habit-{id}"),
        days.to_vec(),
        "2020-01-01T12:00:00Z".parse().unwrap(),
    )
}

#[test]
fn test_habit_creation() {
    let habit = Habit::new("Morning Run");

    assert!(habit.is_ok());
    let habit = habit.unwrap();
    assert_eq!(habit.name, "Morning Run");
    assert!(habit.completed_dates.is_empty());
}

#[test]
fn test_empty_name_is_rejected() {
    assert!(matches!(
        Habit::new("  "),
        Err(DomainError::InvalidHabitName(_))
    ));
}

#[test]
fn test_streak_properties() {
    assert_eq!(calculate_streak(&habit_with_dates(1, &[])), 0);
    assert_eq!(calculate_streak(&habit_with_dates(2, &[date(2024, 1, 1)])), 1);

    let run = habit_with_dates(
        3,
        &[date(2024, 1, 1), date(2024, 1, 2), date(2024, 1, 3)],
    );
    assert_eq!(calculate_streak(&run), 3);

    let with_gap = run.toggle_completion(date(2024, 1, 10));
    assert_eq!(calculate_streak(&with_gap), 3);
}

#[test]
fn test_completion_rate_bounds() {
    let today = date(2024, 6, 30);
    let window = dates::last_n_days_ending(today, COMPLETION_WINDOW_DAYS);

    for n in 0..=window.len() {
        let habit = habit_with_dates(1, &window[..n]);
        let rate = completion_rate_on(&habit, today);
        assert!(rate <= 100);
    }

    let all = habit_with_dates(1, &window);
    assert_eq!(completion_rate_on(&all, today), 100);
}

#[test]
fn test_toggle_twice_restores_original_set() {
    let habit = habit_with_dates(1, &[date(2024, 1, 1)]);
    let round_tripped = habit
        .toggle_completion(date(2024, 1, 5))
        .toggle_completion(date(2024, 1, 5));

    let mut before = habit.completed_dates.clone();
    let mut after = round_tripped.completed_dates.clone();
    before.sort();
    after.sort();
    assert_eq!(before, after);
}

#[test]
fn test_format_date_round_trips() {
    for d in [date(2024, 2, 29), date(1999, 12, 31), date(2024, 1, 5)] {
        let canonical = dates::format_date(d);
        let reparsed = dates::parse_canonical(&canonical).unwrap();
        assert_eq!(dates::format_date(reparsed), canonical);
    }
}

#[test]
fn test_app_stats_on_empty_collection() {
    let stats = app_stats_on(&[], date(2024, 6, 30));
    assert_eq!(
        stats,
        AppStats {
            total_habits: 0,
            completed_today: 0,
            overall_completion: 0,
        }
    );
}

#[test]
fn test_analytics_engine_creation() {
    let mut engine = AnalyticsEngine::new();
    let habit = habit_with_dates(1, &[date(2024, 1, 1), date(2024, 1, 2)]);

    let stats = engine.get_stats(&habit);
    assert_eq!(stats.streak, 2);

    // Same completion set, same cached value.
    assert_eq!(engine.get_stats(&habit), stats);
}

#[test]
fn test_storage_trait_object() {
    let storage = MemoryStorage::new();
    let _: &dyn HabitStorage = &storage;
}

#[test]
fn test_export_document() {
    let habit = habit_with_dates(1, &[date(2024, 1, 2)]);
    let doc = build_export(std::slice::from_ref(&habit));

    assert_eq!(doc.version, EXPORT_VERSION);
    assert_eq!(doc.habits, vec![habit]);
    assert_eq!(
        export_file_name(date(2024, 1, 2)),
        "habits-2024-01-02.json"
    );
}
