/// Stateful stores owning the habit collection and the theme preference
///
/// `HabitStore` is the single writer in the system: every mutation updates
/// the in-memory collection, evicts the affected stats cache entry, persists
/// the full collection best-effort, and notifies subscribers synchronously in
/// subscription order. Storage failures never surface to callers; the
/// in-memory state remains the source of truth for the session.

use chrono::NaiveDate;

use crate::analytics::AnalyticsEngine;
use crate::domain::{AppStats, Habit, HabitId, HabitStats, Theme};
use crate::storage::HabitStorage;

/// Handle returned by `subscribe`, used to unsubscribe later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type HabitSubscriber = Box<dyn FnMut(&[Habit])>;
type ThemeSubscriber = Box<dyn FnMut(Theme)>;

/// The stateful owner of the habit collection
pub struct HabitStore {
    habits: Vec<Habit>,
    storage: Box<dyn HabitStorage>,
    analytics: AnalyticsEngine,
    subscribers: Vec<(SubscriptionId, HabitSubscriber)>,
    next_subscription: u64,
}

impl HabitStore {
    /// Create an empty store backed by `storage`
    ///
    /// The collection stays empty until [`HabitStore::init`] loads the
    /// persisted state.
    pub fn new(storage: Box<dyn HabitStorage>) -> Self {
        Self::with_analytics(storage, AnalyticsEngine::new())
    }

    /// Create a store with a caller-supplied analytics engine
    ///
    /// Used by tests that need an engine with an injected clock.
    pub fn with_analytics(storage: Box<dyn HabitStorage>, analytics: AnalyticsEngine) -> Self {
        Self {
            habits: Vec::new(),
            storage,
            analytics,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replace the current state with the persisted collection
    ///
    /// A failed or corrupt load degrades to an empty collection; the error is
    /// logged and not surfaced.
    pub fn init(&mut self) {
        self.habits = match self.storage.load_habits() {
            Ok(habits) => {
                tracing::info!("loaded {} habits", habits.len());
                habits
            }
            Err(err) => {
                tracing::warn!("failed to load habits, starting empty: {err}");
                Vec::new()
            }
        };
        self.publish();
    }

    /// The current habit collection, in insertion order
    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    /// Create a habit and append it to the collection
    ///
    /// No-op when the trimmed name is empty: callers are expected to validate
    /// first, but the store re-checks defensively.
    pub fn add(&mut self, name: &str) {
        if name.trim().is_empty() {
            return;
        }

        let Ok(mut habit) = Habit::new(name) else {
            return;
        };

        // Two adds within one millisecond would collide on the
        // timestamp-derived id; bump past the newest existing id so ids stay
        // strictly monotonic within the collection.
        if let Some(max_id) = self.habits.iter().map(|h| h.id).max() {
            if habit.id <= max_id {
                habit.id = HabitId(max_id.0 + 1);
            }
        }

        tracing::info!(habit = %habit.name, id = %habit.id, "adding habit");
        self.habits.push(habit);
        self.persist();
        self.publish();
    }

    /// Remove the habit with the given id
    ///
    /// No-op (not an error) when no habit matches. Evicts the habit's stats
    /// cache entry.
    pub fn delete(&mut self, id: HabitId) {
        let before = self.habits.len();
        self.habits.retain(|habit| habit.id != id);

        if self.habits.len() == before {
            return;
        }

        tracing::info!(id = %id, "deleting habit");
        self.analytics.invalidate(id);
        self.persist();
        self.publish();
    }

    /// Toggle completion of one habit for a calendar day
    ///
    /// No-op when no habit matches. Other habits are untouched; the matching
    /// habit's stats cache entry is evicted.
    pub fn toggle(&mut self, id: HabitId, date: NaiveDate) {
        let Some(position) = self.habits.iter().position(|habit| habit.id == id) else {
            return;
        };

        tracing::debug!(id = %id, date = %date, "toggling habit completion");
        self.habits[position] = self.habits[position].toggle_completion(date);
        self.analytics.invalidate(id);
        self.persist();
        self.publish();
    }

    /// Replace the collection with an empty one
    ///
    /// Stats cache entries are intentionally left in place: any habit added
    /// afterwards gets a fresh id, so stale entries are unreachable.
    pub fn reset(&mut self) {
        self.habits.clear();
        self.persist();
        self.publish();
    }

    /// Subscribe to collection changes
    ///
    /// The callback receives the current state immediately, then the full
    /// collection after every subsequent change. Delivery is synchronous, in
    /// subscription order.
    pub fn subscribe(&mut self, callback: impl FnMut(&[Habit]) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));

        let (_, subscriber) = self.subscribers.last_mut().expect("just pushed");
        subscriber(&self.habits);

        id
    }

    /// Stop delivering changes to a subscriber
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    /// Stats for one habit, served through the engine's cache
    ///
    /// `None` when no habit matches the id.
    pub fn habit_stats(&mut self, id: HabitId) -> Option<HabitStats> {
        let habit = self.habits.iter().find(|habit| habit.id == id)?;
        Some(self.analytics.get_stats(habit))
    }

    /// Aggregate statistics over the whole collection
    pub fn app_stats(&self) -> AppStats {
        self.analytics.calculate_app_stats(&self.habits)
    }

    /// Persist the full collection, swallowing failures
    fn persist(&self) {
        if let Err(err) = self.storage.save_habits(&self.habits) {
            tracing::warn!("failed to persist habits: {err}");
        }
    }

    /// Notify all subscribers of the current state, in subscription order
    fn publish(&mut self) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(&self.habits);
        }
    }
}

/// The stateful owner of the theme preference
pub struct ThemeStore {
    theme: Theme,
    storage: Box<dyn HabitStorage>,
    subscribers: Vec<(SubscriptionId, ThemeSubscriber)>,
    next_subscription: u64,
}

impl ThemeStore {
    pub fn new(storage: Box<dyn HabitStorage>) -> Self {
        Self {
            theme: Theme::default(),
            storage,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Load the persisted theme, defaulting to light
    pub fn init(&mut self) {
        self.theme = match self.storage.load_theme() {
            Ok(theme) => theme,
            Err(err) => {
                tracing::warn!("failed to load theme, using default: {err}");
                Theme::default()
            }
        };
        self.publish();
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flip between light and dark
    pub fn toggle(&mut self) {
        self.set(self.theme.toggled());
    }

    /// Set the theme, persist best-effort, and notify subscribers
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        if let Err(err) = self.storage.save_theme(theme) {
            tracing::warn!("failed to persist theme: {err}");
        }
        self.publish();
    }

    /// Subscribe to theme changes; current value delivered immediately
    pub fn subscribe(&mut self, callback: impl FnMut(Theme) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));

        let (_, subscriber) = self.subscribers.last_mut().expect("just pushed");
        subscriber(self.theme);

        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
    }

    fn publish(&mut self) {
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(self.theme);
        }
    }
}
