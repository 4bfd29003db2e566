//! Reward application across attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::AttributeStore;
use crate::events::LevelEvent;

/// Lowest reward value the habit editor offers.
pub const MIN_REWARD: i64 = -5;
/// Highest reward value the habit editor offers.
pub const MAX_REWARD: i64 = 5;

/// A single `{attribute, value}` entry of a habit's reward list.
///
/// The attribute is kept as its stored name so that habits referencing an
/// attribute outside the fixed set still load and round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    pub attribute: String,
    #[serde(default)]
    pub value: i64,
}

impl Reward {
    pub fn new(attribute: impl Into<String>, value: i64) -> Self {
        Self {
            attribute: attribute.into(),
            value,
        }
    }
}

impl fmt::Display for Reward {
    /// `+3体力`, `-2幸福感`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value >= 0 { "+" } else { "" };
        write!(f, "{sign}{}{}", self.value, self.attribute)
    }
}

/// Level changes produced by one reward application, split by direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardOutcome {
    pub level_ups: Vec<LevelEvent>,
    pub level_downs: Vec<LevelEvent>,
}

impl RewardOutcome {
    pub fn is_empty(&self) -> bool {
        self.level_ups.is_empty() && self.level_downs.is_empty()
    }

    /// Level-ups first, then level-downs, each in emission order.
    pub fn events(&self) -> impl Iterator<Item = &LevelEvent> {
        self.level_ups.iter().chain(self.level_downs.iter())
    }
}

/// Translates a reward list into attribute mutations.
pub struct RewardEngine;

impl RewardEngine {
    /// Apply every reward in list order.
    ///
    /// Entries are applied one at a time, so an attribute listed twice
    /// re-evaluates its thresholds after each entry. Persisting the result
    /// is left to the caller, which snapshots once per call.
    pub fn apply(attributes: &mut AttributeStore, rewards: &[Reward]) -> RewardOutcome {
        let mut outcome = RewardOutcome::default();
        for reward in rewards {
            for event in attributes.apply_delta(&reward.attribute, reward.value) {
                if event.is_level_up() {
                    outcome.level_ups.push(event);
                } else {
                    outcome.level_downs.push(event);
                }
            }
        }
        outcome
    }
}
