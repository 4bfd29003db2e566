//! The habit collection: ordering, completion and time-slot placement.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::reorder::{apply_move, plan_move};
use super::{Habit, HabitDraft, HabitPatch, HabitStatus};
use crate::progression::{AttributeStore, RewardEngine, RewardOutcome};
use crate::timeline::{parse_time_slot, time_slot_at, TimelineSettings, DEFAULT_TIME_SLOT};

const ID_PREFIX: &str = "id_";
const ID_LEN: usize = 7;

/// Result of toggling a habit's completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Pending -> done; rewards were applied.
    Completed(RewardOutcome),
    /// Done -> pending; nothing was reversed.
    Reopened,
}

/// Owns every habit. Insertion order is kept and breaks priority ties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitStore {
    habits: Vec<Habit>,
}

impl HabitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Habit> {
        self.habits.iter_mut().find(|h| h.id == id)
    }

    /// Habits in display order: ascending priority, stable on ties.
    pub fn sorted(&self) -> Vec<&Habit> {
        let mut sorted: Vec<&Habit> = self.habits.iter().collect();
        sorted.sort_by_key(|h| h.priority);
        sorted
    }

    /// Habits by ascending time slot for the timeline list. Unparseable
    /// slots sort last.
    pub fn by_time_slot(&self) -> Vec<&Habit> {
        let mut sorted: Vec<&Habit> = self.habits.iter().collect();
        sorted.sort_by_key(|h| parse_time_slot(&h.time_slot).unwrap_or((i64::MAX, i64::MAX)));
        sorted
    }

    fn next_priority(&self) -> i64 {
        self.habits.iter().map(|h| h.priority).max().unwrap_or(0) + 1
    }

    fn generate_id(&self) -> String {
        loop {
            let uuid = Uuid::new_v4().simple().to_string();
            let id = format!("{ID_PREFIX}{}", &uuid[..ID_LEN]);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Append a new pending habit at the end of the display order.
    pub fn add(&mut self, draft: HabitDraft) -> &Habit {
        let habit = Habit {
            id: self.generate_id(),
            title: draft.title,
            rewards: draft.rewards,
            priority: self.next_priority(),
            status: HabitStatus::Pending,
            repeat: draft.repeat,
            time_slot: draft.time_slot,
        };
        tracing::debug!(id = %habit.id, priority = habit.priority, "habit added");
        let index = self.habits.len();
        self.habits.push(habit);
        &self.habits[index]
    }

    /// Shallow-merge `patch` into the habit. Returns `false` if no habit has `id`.
    pub fn update(&mut self, id: &str, patch: HabitPatch) -> bool {
        let Some(habit) = self.get_mut(id) else {
            return false;
        };
        if let Some(title) = patch.title {
            habit.title = title;
        }
        if let Some(rewards) = patch.rewards {
            habit.rewards = rewards;
        }
        if let Some(repeat) = patch.repeat {
            habit.repeat = repeat;
        }
        if let Some(time_slot) = patch.time_slot {
            habit.time_slot = time_slot;
        }
        true
    }

    /// Remove a habit. Remaining priorities keep their gaps.
    pub fn remove(&mut self, id: &str) -> Option<Habit> {
        let index = self.habits.iter().position(|h| h.id == id)?;
        Some(self.habits.remove(index))
    }

    /// Flip completion. Completing applies the habit's rewards; un-checking
    /// does not take them back.
    pub fn toggle_complete(
        &mut self,
        id: &str,
        attributes: &mut AttributeStore,
    ) -> Option<ToggleOutcome> {
        let habit = self.get_mut(id)?;
        match habit.status {
            HabitStatus::Done => {
                habit.status = HabitStatus::Pending;
                Some(ToggleOutcome::Reopened)
            }
            HabitStatus::Pending => {
                let outcome = RewardEngine::apply(attributes, &habit.rewards);
                habit.status = HabitStatus::Done;
                Some(ToggleOutcome::Completed(outcome))
            }
        }
    }

    /// Move `from_id` before or after `to_id` and renumber every priority
    /// to `1..=N` in the new order. Returns `false` without touching
    /// anything on a self-drop or unknown id.
    pub fn reorder(&mut self, from_id: &str, to_id: &str, insert_after: bool) -> bool {
        let order: Vec<&str> = self.sorted().into_iter().map(|h| h.id.as_str()).collect();
        let Some(mv) = plan_move(&order, &from_id, &to_id, insert_after) else {
            return false;
        };

        let mut sorted = std::mem::take(&mut self.habits);
        sorted.sort_by_key(|h| h.priority);
        apply_move(&mut sorted, mv);
        for (i, habit) in sorted.iter_mut().enumerate() {
            habit.priority = i as i64 + 1;
        }
        self.habits = sorted;
        tracing::debug!(from_id, to_id, insert_after, "habits reordered");
        true
    }

    /// Place a habit at `fraction` of the visible timeline. Priority is
    /// untouched. Returns the new slot, or `None` for an unknown id.
    pub fn set_time_slot(
        &mut self,
        id: &str,
        fraction: f64,
        settings: &TimelineSettings,
    ) -> Option<String> {
        let slot = time_slot_at(fraction, settings);
        let habit = self.get_mut(id)?;
        habit.time_slot = slot.clone();
        Some(slot)
    }

    /// Fill empty time slots left by older saves.
    pub fn normalize(&mut self) {
        for habit in &mut self.habits {
            if habit.time_slot.trim().is_empty() {
                habit.time_slot = DEFAULT_TIME_SLOT.to_string();
            }
        }
    }

    pub(crate) fn from_habits(habits: Vec<Habit>) -> Self {
        Self { habits }
    }
}
