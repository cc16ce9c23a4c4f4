/// Analytics engine for habit statistics
///
/// This module computes per-habit statistics (streak, completion rate) and
/// collection-wide aggregates, and memoizes the per-habit results in a
/// time-bounded cache keyed by habit id. The engine owns no write path: the
/// collection store is responsible for calling [`AnalyticsEngine::invalidate`]
/// whenever a habit's completion set changes or the habit is deleted.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Local, NaiveDate};

use crate::domain::{dates, AppStats, Habit, HabitId, HabitStats};

/// Trailing window, in days, for completion-rate calculations
pub const COMPLETION_WINDOW_DAYS: u32 = 14;

/// How long a cached stats entry stays fresh
fn cache_ttl() -> Duration {
    Duration::seconds(60)
}

/// Clock used by the engine for "now" and "today"
///
/// Production engines use `Local::now`; tests inject a fixed or stepped clock
/// to pin the 14-day window and the cache TTL.
type Clock = Box<dyn Fn() -> DateTime<Local>>;

/// A memoized stats computation for one habit
struct CacheEntry {
    stats: HabitStats,
    last_computed_at: DateTime<Local>,
    fingerprint: String,
}

/// Longest run of consecutive calendar days in the habit's completion set
///
/// This is the longest streak ever achieved, not the current streak ending
/// today: a habit completed Mon-Wed three weeks ago and never since still
/// reports 3. Gaps of any length other than exactly one day reset the run.
pub fn calculate_streak(habit: &Habit) -> u32 {
    if habit.completed_dates.is_empty() {
        return 0;
    }

    let mut sorted = habit.completed_dates.clone();
    sorted.sort();

    if sorted.len() == 1 {
        return 1;
    }

    let mut max_streak = 1u32;
    let mut current_streak = 1u32;

    for pair in sorted.windows(2) {
        let days_diff = (pair[1] - pair[0]).num_days();

        if days_diff == 1 {
            current_streak += 1;
            max_streak = max_streak.max(current_streak);
        } else {
            current_streak = 1;
        }
    }

    max_streak
}

/// Completion rate over the `COMPLETION_WINDOW_DAYS` days ending at `today`
///
/// Days before the habit's creation day are not counted as possible. Returns
/// a rounded percentage in 0..=100, and 0 when no day in the window is
/// possible.
pub fn completion_rate_on(habit: &Habit, today: NaiveDate) -> u8 {
    let created = habit.creation_day();

    let mut possible_days = 0u32;
    let mut completed_days = 0u32;

    for day in dates::last_n_days_ending(today, COMPLETION_WINDOW_DAYS) {
        if day >= created {
            possible_days += 1;
            if habit.is_completed_on(day) {
                completed_days += 1;
            }
        }
    }

    if possible_days == 0 {
        return 0;
    }

    ((completed_days as f64 / possible_days as f64) * 100.0).round() as u8
}

/// Aggregate statistics over the whole collection as of `today`
pub fn app_stats_on(habits: &[Habit], today: NaiveDate) -> AppStats {
    let completed_today = habits
        .iter()
        .filter(|habit| habit.is_completed_on(today))
        .count();

    let mut total_possible = 0u32;
    let mut total_completed = 0u32;

    for habit in habits {
        let created = habit.creation_day();
        for day in dates::last_n_days_ending(today, COMPLETION_WINDOW_DAYS) {
            if day >= created {
                total_possible += 1;
                if habit.is_completed_on(day) {
                    total_completed += 1;
                }
            }
        }
    }

    let overall_completion = if total_possible == 0 {
        0
    } else {
        ((total_completed as f64 / total_possible as f64) * 100.0).round() as u8
    };

    AppStats {
        total_habits: habits.len(),
        completed_today,
        overall_completion,
    }
}

/// Content fingerprint of a habit's completion set
///
/// Sorted and joined so that append order does not matter: two habits with
/// the same set of days always fingerprint identically.
fn fingerprint(habit: &Habit) -> String {
    let mut sorted = habit.completed_dates.clone();
    sorted.sort();
    sorted
        .iter()
        .map(|d| dates::format_date(*d))
        .collect::<Vec<_>>()
        .join(",")
}

/// Analytics engine with a time-bounded memoization cache
///
/// Cached entries are reused only while the habit's completion-set
/// fingerprint is unchanged and the entry is younger than 60 seconds; either
/// condition failing triggers a recomputation that replaces the entry.
pub struct AnalyticsEngine {
    cache: HashMap<HabitId, CacheEntry>,
    clock: Clock,
}

impl AnalyticsEngine {
    /// Create a new analytics engine using the system clock
    pub fn new() -> Self {
        Self::with_clock(Box::new(Local::now))
    }

    /// Create an engine with an injected clock (used by tests)
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            cache: HashMap::new(),
            clock,
        }
    }

    /// Completion rate for `habit` as of the engine's current day
    pub fn calculate_completion_rate(&self, habit: &Habit) -> u8 {
        completion_rate_on(habit, (self.clock)().date_naive())
    }

    /// Stats for a habit, served from cache when still valid
    ///
    /// A cache hit requires a matching fingerprint and an entry younger than
    /// 60 seconds; anything else recomputes, replaces the entry, and emits a
    /// diagnostic log line.
    pub fn get_stats(&mut self, habit: &Habit) -> HabitStats {
        let now = (self.clock)();
        let current_fingerprint = fingerprint(habit);

        if let Some(entry) = self.cache.get(&habit.id) {
            if entry.fingerprint == current_fingerprint
                && now.signed_duration_since(entry.last_computed_at) < cache_ttl()
            {
                return entry.stats;
            }
        }

        let stats = HabitStats {
            streak: calculate_streak(habit),
            completion_rate: completion_rate_on(habit, now.date_naive()),
        };

        tracing::debug!(
            habit = %habit.name,
            streak = stats.streak,
            rate = stats.completion_rate,
            "computed habit stats"
        );

        self.cache.insert(
            habit.id,
            CacheEntry {
                stats,
                last_computed_at: now,
                fingerprint: current_fingerprint,
            },
        );

        stats
    }

    /// Evict the cache entry for one habit
    pub fn invalidate(&mut self, habit_id: HabitId) {
        self.cache.remove(&habit_id);
    }

    /// Evict every cache entry
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Aggregate statistics for the collection as of the engine's current day
    ///
    /// Aggregates are cheap enough that they bypass the cache entirely.
    pub fn calculate_app_stats(&self, habits: &[Habit]) -> AppStats {
        app_stats_on(habits, (self.clock)().date_naive())
    }
}

impl Default for AnalyticsEngine {
    fn default() -> Self {
        Self::new()
    }
}
