//! The application facade.
//!
//! `GameLife` owns the [`GameState`] and a [`StateStore`]. Every mutating
//! command runs to completion, leaves the state consistent and then takes
//! exactly one snapshot through the store. Save failures are logged and
//! swallowed; the in-memory state stays authoritative.

use crate::error::{StorageError, ValidationError};
use crate::habit::{Habit, HabitDraft, HabitPatch, HabitStore, ToggleOutcome};
use crate::progression::{AchievementProgress, AttributeStore, Reward, RewardEngine, RewardOutcome};
use crate::state::GameState;
use crate::storage::StateStore;
use crate::timeline::TimelineSettings;

pub struct GameLife<S: StateStore> {
    state: GameState,
    store: S,
}

impl<S: StateStore> GameLife<S> {
    /// Load the saved state, falling back to the first-run state when
    /// nothing was saved or the blob is unreadable.
    pub fn open(store: S) -> Self {
        Self::open_with_defaults(store, TimelineSettings::default())
    }

    /// Like [`GameLife::open`], with the timeline range used for a first run.
    pub fn open_with_defaults(store: S, timeline: TimelineSettings) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => {
                tracing::debug!("no saved state, starting fresh");
                GameState::seeded(timeline)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load saved state, starting fresh");
                GameState::seeded(timeline)
            }
        };
        Self { state, store }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn attributes(&self) -> &AttributeStore {
        &self.state.attributes
    }

    pub fn habits(&self) -> &HabitStore {
        &self.state.habits
    }

    pub fn timeline_settings(&self) -> &TimelineSettings {
        &self.state.timeline_settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Badge progress for every attribute, in display order.
    pub fn achievements(&self) -> Vec<AchievementProgress> {
        self.state
            .attributes
            .iter()
            .map(AchievementProgress::for_attribute)
            .collect()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.state) {
            tracing::warn!(error = %e, "failed to save state");
        }
    }

    /// Write the current state out, reporting failure to the caller.
    ///
    /// # Errors
    /// Returns the store's error if the snapshot cannot be written.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.store.save(&self.state)
    }

    pub fn add_habit(&mut self, draft: HabitDraft) -> Habit {
        let habit = self.state.habits.add(draft).clone();
        self.persist();
        habit
    }

    pub fn update_habit(&mut self, id: &str, patch: HabitPatch) -> bool {
        let updated = self.state.habits.update(id, patch);
        if updated {
            self.persist();
        }
        updated
    }

    /// Delete a habit. Any confirmation prompt belongs to the caller.
    pub fn delete_habit(&mut self, id: &str) -> Option<Habit> {
        let removed = self.state.habits.remove(id);
        if removed.is_some() {
            self.persist();
        }
        removed
    }

    /// Flip a habit between pending and done, applying its rewards on
    /// completion. The snapshot is taken once, after every reward entry.
    pub fn toggle_complete(&mut self, id: &str) -> Option<ToggleOutcome> {
        let outcome = self
            .state
            .habits
            .toggle_complete(id, &mut self.state.attributes)?;
        self.persist();
        Some(outcome)
    }

    /// Apply an ad-hoc reward list, outside any habit.
    pub fn award(&mut self, rewards: &[Reward]) -> RewardOutcome {
        let outcome = RewardEngine::apply(&mut self.state.attributes, rewards);
        self.persist();
        outcome
    }

    pub fn reorder(&mut self, from_id: &str, to_id: &str, insert_after: bool) -> bool {
        let moved = self.state.habits.reorder(from_id, to_id, insert_after);
        if moved {
            self.persist();
        }
        moved
    }

    /// Move a habit to the time under a timeline drop at `fraction` of the
    /// visible extent. Returns the new `HH:MM` slot.
    pub fn set_time_slot(&mut self, id: &str, fraction: f64) -> Option<String> {
        let slot = self
            .state
            .habits
            .set_time_slot(id, fraction, &self.state.timeline_settings)?;
        self.persist();
        Some(slot)
    }

    /// Change the visible timeline range.
    ///
    /// # Errors
    /// Returns a validation error if either bound is not `HH:MM` or the
    /// range runs backwards. The state is left unchanged in that case.
    pub fn set_timeline(&mut self, start: &str, end: &str) -> Result<(), ValidationError> {
        self.state.timeline_settings = TimelineSettings::new(start, end)?;
        self.persist();
        Ok(())
    }

    /// Discard all progress and habits and return to the first-run state,
    /// keeping the current timeline range.
    pub fn reset(&mut self) {
        self.state = GameState::seeded(self.state.timeline_settings.clone());
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::AttributeName;
    use crate::storage::MemoryStore;

    #[test]
    fn open_without_saved_state_uses_seed() {
        let store = MemoryStore::new();
        let app = GameLife::open(&store);
        assert_eq!(app.habits().len(), 3);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn open_with_malformed_blob_falls_back() {
        let store = MemoryStore::with_blob("definitely not json");
        let app = GameLife::open(&store);
        assert_eq!(app.state(), &GameState::default());
    }

    #[test]
    fn first_run_uses_configured_timeline() {
        let timeline = TimelineSettings::new("08:00", "20:00").unwrap();
        let app = GameLife::open_with_defaults(MemoryStore::new(), timeline.clone());
        assert_eq!(app.timeline_settings(), &timeline);
    }

    #[test]
    fn noop_commands_do_not_save() {
        let store = MemoryStore::new();
        let mut app = GameLife::open(&store);
        assert!(!app.reorder("id_seed001", "id_seed001", true));
        assert!(!app.update_habit("id_missing", HabitPatch::default()));
        assert!(app.delete_habit("id_missing").is_none());
        assert!(app.toggle_complete("id_missing").is_none());
        assert!(app.set_time_slot("id_missing", 0.5).is_none());
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn invalid_timeline_is_rejected_without_saving() {
        let store = MemoryStore::new();
        let mut app = GameLife::open(&store);
        assert!(app.set_timeline("22:00", "07:00").is_err());
        assert_eq!(app.timeline_settings(), &TimelineSettings::default());
        assert_eq!(store.save_count(), 0);

        app.set_timeline("07:00", "22:00").unwrap();
        assert_eq!(app.timeline_settings().hours(), 16);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn reset_restores_seed_and_keeps_timeline() {
        let store = MemoryStore::new();
        let mut app = GameLife::open(&store);
        app.set_timeline("07:00", "22:00").unwrap();
        app.award(&[Reward::new("体力", 40)]);
        app.add_habit(HabitDraft::new("extra"));
        app.reset();
        assert_eq!(app.habits().len(), 3);
        assert_eq!(app.attributes().get(AttributeName::Vitality).unwrap().level, 1);
        assert_eq!(app.timeline_settings().start, "07:00");
    }

    #[test]
    fn achievements_cover_every_attribute() {
        let mut app = GameLife::open(MemoryStore::new());
        app.award(&[Reward::new("智力", 5000)]);
        let achievements = app.achievements();
        assert_eq!(achievements.len(), 5);
        let intellect = &achievements[1];
        assert_eq!(intellect.attribute, AttributeName::Intellect);
        assert!(!intellect.achieved.is_empty());
    }
}
