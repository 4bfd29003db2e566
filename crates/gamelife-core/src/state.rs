//! The application state object and its load-time normalization.

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::habit::{Habit, HabitStatus, HabitStore, Repeat};
use crate::progression::{AttributeStore, Reward};
use crate::timeline::TimelineSettings;

/// Everything the application persists, as one blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(default)]
    pub attributes: AttributeStore,
    #[serde(default)]
    pub habits: HabitStore,
    #[serde(default)]
    pub timeline_settings: TimelineSettings,
}

impl Default for GameState {
    fn default() -> Self {
        Self::seeded(TimelineSettings::default())
    }
}

fn seed_habit(id: &str, title: &str, rewards: Vec<Reward>, priority: i64, slot: &str) -> Habit {
    Habit {
        id: id.to_string(),
        title: title.to_string(),
        rewards,
        priority,
        status: HabitStatus::Pending,
        repeat: Repeat::Daily,
        time_slot: slot.to_string(),
    }
}

impl GameState {
    /// First-run state: fresh attributes and three sample habits.
    pub fn seeded(timeline_settings: TimelineSettings) -> Self {
        let habits = vec![
            seed_habit("id_seed001", "跑步 30 分钟", vec![Reward::new("体力", 3)], 1, "07:00"),
            seed_habit(
                "id_seed002",
                "阅读 20 页",
                vec![Reward::new("智力", 2), Reward::new("自律", 1)],
                2,
                "20:00",
            ),
            seed_habit("id_seed003", "小提琴练习", vec![Reward::new("创造力", 2)], 3, "19:00"),
        ];
        Self {
            attributes: AttributeStore::new(),
            habits: HabitStore::from_habits(habits),
            timeline_settings,
        }
    }

    /// Parse a persisted blob and normalize it.
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        let mut state: GameState = serde_json::from_str(json).map_err(StorageError::Malformed)?;
        state.normalize();
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        serde_json::to_string_pretty(self).map_err(StorageError::Serialize)
    }

    /// Recompute derived attribute fields and fill defaults missing from
    /// older saves. Stored `exp_required` values are never trusted.
    pub fn normalize(&mut self) {
        self.attributes.normalize();
        self.habits.normalize();
    }
}
