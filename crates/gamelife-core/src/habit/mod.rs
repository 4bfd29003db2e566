//! Habit types and the ordered habit collection.
//!
//! A habit's `status` follows a two-state machine:
//!
//! ```text
//!   PENDING ──(complete: rewards applied)──> DONE
//!   PENDING <──(un-check: nothing reversed)── DONE
//! ```
//!
//! Both transitions are user-triggered. There is no automatic daily reset,
//! and un-checking never takes experience back, so completing the same
//! habit twice awards it twice.

pub mod reorder;
mod store;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::progression::Reward;
use crate::timeline::{self, TimelineSettings, DEFAULT_TIME_SLOT};

pub use store::{HabitStore, ToggleOutcome};

/// Completion state of a habit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitStatus {
    #[default]
    Pending,
    Done,
}

/// How often a habit is meant to recur. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    #[default]
    Daily,
    Weekly,
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Repeat::Daily => f.write_str("daily"),
            Repeat::Weekly => f.write_str("weekly"),
        }
    }
}

impl FromStr for Repeat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Repeat::Daily),
            "weekly" => Ok(Repeat::Weekly),
            other => Err(format!("unknown repeat: {other} (expected daily or weekly)")),
        }
    }
}

fn default_time_slot() -> String {
    DEFAULT_TIME_SLOT.to_string()
}

/// A recurring task with attribute rewards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub rewards: Vec<Reward>,
    /// Display order key; lower comes first.
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub status: HabitStatus,
    #[serde(default)]
    pub repeat: Repeat,
    /// `HH:MM`
    #[serde(default = "default_time_slot")]
    pub time_slot: String,
}

impl Habit {
    pub fn is_done(&self) -> bool {
        self.status == HabitStatus::Done
    }

    /// Top offset of this habit on the timeline, in percent.
    pub fn vertical_position(&self, settings: &TimelineSettings) -> f64 {
        timeline::vertical_position(&self.time_slot, settings)
    }

    /// Space-separated reward labels, e.g. `+2智力 +1自律`.
    pub fn reward_summary(&self) -> String {
        self.rewards
            .iter()
            .map(Reward::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fields supplied by the habit editor when creating a habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitDraft {
    pub title: String,
    pub rewards: Vec<Reward>,
    pub repeat: Repeat,
    pub time_slot: String,
}

impl HabitDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rewards: Vec::new(),
            repeat: Repeat::Daily,
            time_slot: default_time_slot(),
        }
    }

    pub fn reward(mut self, attribute: impl Into<String>, value: i64) -> Self {
        self.rewards.push(Reward::new(attribute, value));
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn time_slot(mut self, slot: impl Into<String>) -> Self {
        self.time_slot = slot.into();
        self
    }
}

/// Editable fields of an existing habit. `None` leaves a field untouched.
///
/// `id` and `priority` are deliberately absent: ordering changes go through
/// [`HabitStore::reorder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitPatch {
    pub title: Option<String>,
    pub rewards: Option<Vec<Reward>>,
    pub repeat: Option<Repeat>,
    pub time_slot: Option<String>,
}

impl HabitPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.rewards.is_none()
            && self.repeat.is_none()
            && self.time_slot.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn habit_json_uses_persisted_field_names() {
        let habit = Habit {
            id: "id_abc1234".into(),
            title: "跑步 30 分钟".into(),
            rewards: vec![Reward::new("体力", 3)],
            priority: 1,
            status: HabitStatus::Pending,
            repeat: Repeat::Daily,
            time_slot: "07:00".into(),
        };
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json["timeSlot"], "07:00");
        assert_eq!(json["status"], "pending");
        assert_eq!(json["repeat"], "daily");
        assert_eq!(json["rewards"][0]["attribute"], "体力");
    }

    #[test]
    fn missing_fields_take_defaults() {
        let habit: Habit = serde_json::from_str(r#"{"id":"id_x","title":"冥想"}"#).unwrap();
        assert_eq!(habit.time_slot, "09:00");
        assert_eq!(habit.priority, 0);
        assert_eq!(habit.status, HabitStatus::Pending);
        assert!(habit.rewards.is_empty());
    }

    #[test]
    fn reward_summary_joins_labels() {
        let draft = HabitDraft::new("阅读").reward("智力", 2).reward("自律", 1);
        let habit = Habit {
            id: "id_r".into(),
            title: draft.title,
            rewards: draft.rewards,
            priority: 1,
            status: HabitStatus::Done,
            repeat: draft.repeat,
            time_slot: draft.time_slot,
        };
        assert_eq!(habit.reward_summary(), "+2智力 +1自律");
        assert!(habit.is_done());
    }

    #[test]
    fn repeat_parses_case_insensitively() {
        assert_eq!("Weekly".parse::<Repeat>(), Ok(Repeat::Weekly));
        assert!("monthly".parse::<Repeat>().is_err());
    }
}
