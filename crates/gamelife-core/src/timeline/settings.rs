//! Visible hour range of the timeline.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const DEFAULT_START: &str = "06:00";
pub const DEFAULT_END: &str = "23:00";

const DEFAULT_START_HOUR: i64 = 6;
const DEFAULT_END_HOUR: i64 = 23;

/// Bounds of the timeline, both inclusive at hour granularity.
///
/// Minutes are ignored: `06:30`–`22:10` shows hours 6 through 22.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSettings {
    pub start: String,
    pub end: String,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            start: DEFAULT_START.to_string(),
            end: DEFAULT_END.to_string(),
        }
    }
}

/// One hour line of the ruler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RulerMark {
    /// `HH:00`
    pub label: String,
    /// Offset from the top of the timeline, `0..100`.
    pub top_percent: f64,
}

fn leading_hour(value: &str) -> Option<i64> {
    value.split(':').next()?.trim().parse().ok()
}

fn parse_clock(field: &str, value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| ValidationError::InvalidTime {
        field: field.to_string(),
        value: value.to_string(),
    })
}

impl TimelineSettings {
    /// Build validated settings. Both bounds must be `HH:MM` and `start <= end`.
    pub fn new(start: &str, end: &str) -> Result<Self, ValidationError> {
        let start_time = parse_clock("start", start)?;
        let end_time = parse_clock("end", end)?;
        if start_time > end_time {
            return Err(ValidationError::InvalidTimeRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self {
            start: start_time.format("%H:%M").to_string(),
            end: end_time.format("%H:%M").to_string(),
        })
    }

    /// First visible hour. Unparseable bounds fall back to the default.
    pub fn start_hour(&self) -> i64 {
        leading_hour(&self.start).unwrap_or(DEFAULT_START_HOUR)
    }

    /// Last visible hour.
    pub fn end_hour(&self) -> i64 {
        leading_hour(&self.end).unwrap_or(DEFAULT_END_HOUR)
    }

    /// Number of visible hours, never less than one.
    pub fn hours(&self) -> i64 {
        (self.end_hour() - self.start_hour() + 1).max(1)
    }

    /// Total visible minutes.
    pub fn total_minutes(&self) -> i64 {
        self.hours() * 60
    }

    /// One mark per visible hour, evenly spaced from the top.
    pub fn ruler(&self) -> Vec<RulerMark> {
        let hours = self.hours();
        (0..hours)
            .map(|i| RulerMark {
                label: format!("{:02}:00", self.start_hour() + i),
                top_percent: i as f64 / hours as f64 * 100.0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_spans_eighteen_hours() {
        let settings = TimelineSettings::default();
        assert_eq!(settings.start_hour(), 6);
        assert_eq!(settings.end_hour(), 23);
        assert_eq!(settings.hours(), 18);
        assert_eq!(settings.total_minutes(), 1080);
    }

    #[test]
    fn new_validates_and_normalizes() {
        let settings = TimelineSettings::new(" 08:00", "20:30").unwrap();
        assert_eq!(settings.start, "08:00");
        assert_eq!(settings.end, "20:30");
        assert_eq!(settings.hours(), 13);

        assert!(matches!(
            TimelineSettings::new("21:00", "07:00"),
            Err(ValidationError::InvalidTimeRange { .. })
        ));
        assert!(matches!(
            TimelineSettings::new("25:00", "26:00"),
            Err(ValidationError::InvalidTime { .. })
        ));
        assert!(TimelineSettings::new("09:00", "09:00").is_ok());
    }

    #[test]
    fn malformed_bounds_fall_back_to_defaults() {
        let settings = TimelineSettings {
            start: "soon".into(),
            end: String::new(),
        };
        assert_eq!(settings.start_hour(), 6);
        assert_eq!(settings.end_hour(), 23);
    }

    #[test]
    fn backwards_range_still_has_one_hour() {
        let settings = TimelineSettings {
            start: "20:00".into(),
            end: "08:00".into(),
        };
        assert_eq!(settings.hours(), 1);
    }

    #[test]
    fn ruler_marks_every_hour() {
        let settings = TimelineSettings::new("06:00", "09:00").unwrap();
        let ruler = settings.ruler();
        let labels: Vec<_> = ruler.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["06:00", "07:00", "08:00", "09:00"]);
        assert_eq!(ruler[0].top_percent, 0.0);
        assert_eq!(ruler[2].top_percent, 50.0);
    }
}
