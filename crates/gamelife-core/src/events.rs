use serde::{Deserialize, Serialize};

use crate::progression::AttributeName;

/// Every level threshold crossing produces an Event.
/// The UI layer turns these into toasts; the core never renders them itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LevelEvent {
    LevelUp {
        attribute: AttributeName,
        level: u32,
    },
    /// Emitted once per level lost while a penalty drains experience.
    LevelDown {
        attribute: AttributeName,
        level: u32,
    },
}

impl LevelEvent {
    pub fn attribute(&self) -> AttributeName {
        match self {
            LevelEvent::LevelUp { attribute, .. } | LevelEvent::LevelDown { attribute, .. } => {
                *attribute
            }
        }
    }

    /// The level the attribute landed on after this crossing.
    pub fn level(&self) -> u32 {
        match self {
            LevelEvent::LevelUp { level, .. } | LevelEvent::LevelDown { level, .. } => *level,
        }
    }

    pub fn is_level_up(&self) -> bool {
        matches!(self, LevelEvent::LevelUp { .. })
    }

    /// Toast text, e.g. `体力 提升至 Lv2` or `体力 降至 Lv1`.
    pub fn message(&self) -> String {
        match self {
            LevelEvent::LevelUp { attribute, level } => format!("{attribute} 提升至 Lv{level}"),
            LevelEvent::LevelDown { attribute, level } => format!("{attribute} 降至 Lv{level}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_toast_wording() {
        let up = LevelEvent::LevelUp {
            attribute: AttributeName::Vitality,
            level: 2,
        };
        let down = LevelEvent::LevelDown {
            attribute: AttributeName::Happiness,
            level: 3,
        };
        assert_eq!(up.message(), "体力 提升至 Lv2");
        assert_eq!(down.message(), "幸福感 降至 Lv3");
        assert!(up.is_level_up());
        assert!(!down.is_level_up());
    }

    #[test]
    fn event_serializes_with_type_tag() {
        let up = LevelEvent::LevelUp {
            attribute: AttributeName::Intellect,
            level: 4,
        };
        let json = serde_json::to_value(up).unwrap();
        assert_eq!(json["type"], "LevelUp");
        assert_eq!(json["attribute"], "智力");
        assert_eq!(json["level"], 4);
    }
}
