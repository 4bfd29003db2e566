//! Conversions between timeline positions and `HH:MM` time slots.

use super::TimelineSettings;

/// Slot assigned to habits that were stored without one.
pub const DEFAULT_TIME_SLOT: &str = "09:00";

/// Elements are kept this far from the bottom edge so they stay on-screen.
const MAX_TOP_PERCENT: f64 = 95.0;

/// Split `HH:MM` into hour and minute.
///
/// The hour is not capped at 23: a drop on the very bottom edge of a
/// timeline ending at 23:00 produces `24:00`, and that slot must still
/// round-trip.
pub fn parse_time_slot(slot: &str) -> Option<(i64, i64)> {
    let (hour, minute) = slot.trim().split_once(':')?;
    Some((hour.parse().ok()?, minute.parse().ok()?))
}

pub fn format_time_slot(hour: i64, minute: i64) -> String {
    format!("{hour:02}:{minute:02}")
}

/// Time slot for a drop at `fraction` of the visible vertical extent.
///
/// `fraction` is clamped to `[0, 1]`; minutes are truncated, not rounded.
pub fn time_slot_at(fraction: f64, settings: &TimelineSettings) -> String {
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let total_minutes = fraction * settings.hours() as f64 * 60.0;
    let hour = (total_minutes / 60.0).floor() as i64 + settings.start_hour();
    let minute = (total_minutes % 60.0).floor() as i64;
    format_time_slot(hour, minute)
}

/// Top offset in percent for a slot, clamped to `[0, 95]`.
///
/// Slots that do not parse are drawn at the top.
pub fn vertical_position(slot: &str, settings: &TimelineSettings) -> f64 {
    let Some((hour, minute)) = parse_time_slot(slot) else {
        return 0.0;
    };
    let minutes = (hour - settings.start_hour()) * 60 + minute;
    let percent = minutes as f64 / settings.total_minutes() as f64 * 100.0;
    percent.clamp(0.0, MAX_TOP_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midpoint_of_default_range_is_three_pm() {
        let settings = TimelineSettings::default();
        assert_eq!(time_slot_at(0.5, &settings), "15:00");
    }

    #[test]
    fn minutes_are_truncated() {
        let settings = TimelineSettings::default();
        assert_eq!(time_slot_at(0.0, &settings), "06:00");
        assert_eq!(time_slot_at(0.25, &settings), "10:30");
        assert_eq!(time_slot_at(0.1, &settings), "07:48");
    }

    #[test]
    fn bottom_edge_lands_past_the_last_hour() {
        let settings = TimelineSettings::default();
        assert_eq!(time_slot_at(1.0, &settings), "24:00");
        assert_eq!(time_slot_at(7.5, &settings), "24:00");
        assert_eq!(time_slot_at(-0.3, &settings), "06:00");
        assert_eq!(time_slot_at(f64::NAN, &settings), "06:00");
    }

    #[test]
    fn position_is_inverse_of_drop() {
        let settings = TimelineSettings::default();
        assert_eq!(vertical_position("15:00", &settings), 50.0);
        assert_eq!(vertical_position("06:00", &settings), 0.0);
        let slot = time_slot_at(0.25, &settings);
        assert_eq!(vertical_position(&slot, &settings), 25.0);
    }

    #[test]
    fn position_is_clamped_on_screen() {
        let settings = TimelineSettings::default();
        assert_eq!(vertical_position("05:00", &settings), 0.0);
        assert_eq!(vertical_position("23:30", &settings), 95.0);
        assert_eq!(vertical_position("24:00", &settings), 95.0);
        assert_eq!(vertical_position("whenever", &settings), 0.0);
    }

    #[test]
    fn parse_and_format() {
        assert_eq!(parse_time_slot("07:05"), Some((7, 5)));
        assert_eq!(parse_time_slot("24:00"), Some((24, 0)));
        assert_eq!(parse_time_slot("7"), None);
        assert_eq!(format_time_slot(7, 5), "07:05");
    }
}
