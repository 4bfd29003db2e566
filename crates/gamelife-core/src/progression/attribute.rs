//! Attribute store and the level transition loops.

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{exp_required, Attribute, AttributeName};
use crate::events::LevelEvent;

/// Reward values are scaled by this factor before they reach experience.
const REWARD_MULTIPLIER: f64 = 1.2;

/// Experience change produced by a raw reward value. Saturates at the
/// `i64` bounds.
pub fn scaled_change(raw_value: i64) -> i64 {
    (raw_value as f64 * REWARD_MULTIPLIER).round() as i64
}

/// Owns the five attribute records, keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeStore {
    attributes: BTreeMap<AttributeName, Attribute>,
}

impl Default for AttributeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Saved maps may carry keys outside the fixed set; those are dropped
/// rather than failing the whole state.
impl<'de> Deserialize<'de> for AttributeStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let mut attributes = BTreeMap::new();
        for (key, value) in raw {
            let Some(name) = AttributeName::from_display(&key) else {
                tracing::warn!(attribute = %key, "dropping unknown attribute from saved state");
                continue;
            };
            let attr: Attribute = serde_json::from_value(value).map_err(D::Error::custom)?;
            attributes.insert(name, attr);
        }
        Ok(Self { attributes })
    }
}

impl AttributeStore {
    /// Every attribute at level 1 with no experience.
    pub fn new() -> Self {
        Self {
            attributes: AttributeName::ALL
                .into_iter()
                .map(|name| (name, Attribute::new(name)))
                .collect(),
        }
    }

    pub fn get(&self, name: AttributeName) -> Option<&Attribute> {
        self.attributes.get(&name)
    }

    /// Attributes in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.values()
    }

    /// Apply a reward by exact display name. Anything else, aliases
    /// included, is ignored and produces no events.
    pub fn apply_delta(&mut self, attribute: &str, raw_value: i64) -> Vec<LevelEvent> {
        match AttributeName::from_display(attribute) {
            Some(name) => self.apply(name, raw_value),
            None => {
                tracing::debug!(attribute, "ignoring reward for unknown attribute");
                Vec::new()
            }
        }
    }

    /// Apply a raw reward value to one attribute and resolve every level
    /// threshold it crosses. Returns the crossings in emission order.
    pub fn apply(&mut self, name: AttributeName, raw_value: i64) -> Vec<LevelEvent> {
        let Some(attr) = self.attributes.get_mut(&name) else {
            return Vec::new();
        };

        let mut events = Vec::new();
        attr.exp = attr.exp.saturating_add(scaled_change(raw_value));

        while attr.exp >= attr.exp_required {
            attr.exp -= attr.exp_required;
            attr.level += 1;
            attr.exp_required = exp_required(attr.level);
            events.push(LevelEvent::LevelUp {
                attribute: name,
                level: attr.level,
            });
        }

        while attr.exp < 0 && attr.level > 1 {
            attr.level -= 1;
            attr.exp_required = exp_required(attr.level);
            attr.exp = attr.exp.saturating_add(attr.exp_required);
            events.push(LevelEvent::LevelDown {
                attribute: name,
                level: attr.level,
            });
        }

        // Level 1 is the floor; leftover penalty is forfeited.
        if attr.exp < 0 {
            attr.exp = 0;
        }

        for event in &events {
            tracing::info!(attribute = %name, level = event.level(), up = event.is_level_up(), "level changed");
        }
        events
    }

    /// Repair a freshly loaded store: add missing attributes, floor levels
    /// at 1 and recompute every `exp_required` from its level.
    pub fn normalize(&mut self) {
        for name in AttributeName::ALL {
            let attr = self
                .attributes
                .entry(name)
                .or_insert_with(|| Attribute::new(name));
            attr.name = name;
            attr.level = attr.level.max(1);
            attr.exp_required = exp_required(attr.level);
        }
    }
}
