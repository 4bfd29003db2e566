//! Achievement badges unlocked by attribute level.

use serde::Serialize;

use super::{Attribute, AttributeName};

/// A badge tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub level: u32,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Badge tiers, ascending by level.
pub const ACHIEVEMENTS: [Achievement; 5] = [
    Achievement { level: 5, title: "初学者", icon: "🌱" },
    Achievement { level: 10, title: "熟练者", icon: "🌿" },
    Achievement { level: 15, title: "专家", icon: "🌳" },
    Achievement { level: 20, title: "大师", icon: "⭐" },
    Achievement { level: 30, title: "传奇", icon: "👑" },
];

/// Badges earned by one attribute and the next one to unlock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AchievementProgress {
    pub attribute: AttributeName,
    pub achieved: Vec<Achievement>,
    pub next: Option<Achievement>,
}

impl AchievementProgress {
    pub fn for_attribute(attr: &Attribute) -> Self {
        Self {
            attribute: attr.name,
            achieved: ACHIEVEMENTS
                .iter()
                .filter(|ach| attr.level >= ach.level)
                .copied()
                .collect(),
            next: ACHIEVEMENTS.iter().find(|ach| attr.level < ach.level).copied(),
        }
    }

    /// `"<achieved>/<total>"`
    pub fn summary(&self) -> String {
        format!("{}/{}", self.achieved.len(), ACHIEVEMENTS.len())
    }

    /// Earned icons followed by a lock for the next tier.
    pub fn badges(&self) -> String {
        let mut badges: String = self.achieved.iter().map(|ach| ach.icon).collect();
        if self.next.is_some() || badges.is_empty() {
            badges.push('🔒');
        }
        badges
    }
}
