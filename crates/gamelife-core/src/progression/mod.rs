//! Attribute progression: the experience curve, the five fixed attributes,
//! reward application and achievement tiers.
//!
//! ## Leveling
//!
//! ```text
//! exp_required(level) = round(20 * level^1.5)
//!
//!   Lv1 ──(exp >= 20)──> Lv2 ──(exp >= 57)──> Lv3 ...
//!   Lv1 <──(exp < 0)──── Lv2 <──(exp < 0)──── Lv3 ...
//! ```
//!
//! Level 1 is the floor: a penalty at level 1 clamps experience to zero.

pub mod achievement;
pub mod attribute;
pub mod reward;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use achievement::{Achievement, AchievementProgress, ACHIEVEMENTS};
pub use attribute::AttributeStore;
pub use reward::{Reward, RewardEngine, RewardOutcome};

/// Base experience of the leveling curve.
const EXP_BASE: f64 = 20.0;
/// Exponent of the leveling curve.
const EXP_EXPONENT: f64 = 1.5;

/// Experience needed to advance past `level`.
///
/// Always recomputed from the level, never read back from storage.
pub fn exp_required(level: u32) -> i64 {
    (EXP_BASE * f64::from(level).powf(EXP_EXPONENT)).round() as i64
}

/// One of the five fixed character attributes.
///
/// Serialized by display name, which is also the key of the persisted
/// attribute map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeName {
    #[serde(rename = "体力")]
    Vitality,
    #[serde(rename = "智力")]
    Intellect,
    #[serde(rename = "自律")]
    Discipline,
    #[serde(rename = "创造力")]
    Creativity,
    #[serde(rename = "幸福感")]
    Happiness,
}

impl AttributeName {
    /// All attributes in display order.
    pub const ALL: [AttributeName; 5] = [
        AttributeName::Vitality,
        AttributeName::Intellect,
        AttributeName::Discipline,
        AttributeName::Creativity,
        AttributeName::Happiness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeName::Vitality => "体力",
            AttributeName::Intellect => "智力",
            AttributeName::Discipline => "自律",
            AttributeName::Creativity => "创造力",
            AttributeName::Happiness => "幸福感",
        }
    }

    /// English alias accepted on the command line.
    pub fn alias(&self) -> &'static str {
        match self {
            AttributeName::Vitality => "vitality",
            AttributeName::Intellect => "intellect",
            AttributeName::Discipline => "discipline",
            AttributeName::Creativity => "creativity",
            AttributeName::Happiness => "happiness",
        }
    }

    /// Exact display-name match, as used for reward and saved-state keys.
    pub fn from_display(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.as_str() == name)
    }

    /// Resolve a display name or alias. Unknown names yield `None`.
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|attr| attr.as_str() == name || attr.alias().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("unknown attribute: {s}"))
    }
}

/// Level and experience of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: AttributeName,
    pub level: u32,
    /// Progress toward the next level, in `[0, exp_required)` between calls.
    pub exp: i64,
    pub exp_required: i64,
}

impl Attribute {
    /// Fresh attribute at level 1 with no experience.
    pub fn new(name: AttributeName) -> Self {
        Self {
            name,
            level: 1,
            exp: 0,
            exp_required: exp_required(1),
        }
    }

    /// Progress bar fill, `0..=100`.
    pub fn progress_percent(&self) -> u32 {
        if self.exp_required <= 0 {
            return 0;
        }
        let percent = (self.exp as f64 / self.exp_required as f64 * 100.0).round();
        percent.clamp(0.0, 100.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exp_curve_known_values() {
        assert_eq!(exp_required(1), 20);
        assert_eq!(exp_required(2), 57);
        assert_eq!(exp_required(3), 104);
        assert_eq!(exp_required(4), 160);
        assert_eq!(exp_required(10), 632);
    }

    #[test]
    fn exp_curve_strictly_increasing() {
        for level in 1..500 {
            assert!(exp_required(level + 1) > exp_required(level), "level {level}");
        }
    }

    #[test]
    fn lookup_accepts_display_names_and_aliases() {
        assert_eq!(AttributeName::lookup("体力"), Some(AttributeName::Vitality));
        assert_eq!(AttributeName::lookup("Creativity"), Some(AttributeName::Creativity));
        assert_eq!(AttributeName::lookup(" 幸福感 "), Some(AttributeName::Happiness));
        assert_eq!(AttributeName::lookup("魅力"), None);
        assert!("strength".parse::<AttributeName>().is_err());
    }

    #[test]
    fn from_display_is_exact() {
        assert_eq!(AttributeName::from_display("智力"), Some(AttributeName::Intellect));
        assert_eq!(AttributeName::from_display("intellect"), None);
        assert_eq!(AttributeName::from_display(" 智力"), None);
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&AttributeName::Discipline).unwrap();
        assert_eq!(json, "\"自律\"");
        let parsed: AttributeName = serde_json::from_str("\"创造力\"").unwrap();
        assert_eq!(parsed, AttributeName::Creativity);
    }

    #[test]
    fn progress_percent_is_capped() {
        let mut attr = Attribute::new(AttributeName::Vitality);
        assert_eq!(attr.progress_percent(), 0);
        attr.exp = 5;
        assert_eq!(attr.progress_percent(), 25);
        attr.exp = 40;
        assert_eq!(attr.progress_percent(), 100);
    }
}
