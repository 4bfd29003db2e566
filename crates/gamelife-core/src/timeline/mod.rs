//! Timeline view support.
//!
//! This module provides:
//! - The visible hour range of the timeline and its hour ruler
//! - Mapping a drop position (fraction of the visible extent) to an `HH:MM` slot
//! - The inverse mapping from a slot to a vertical position for rendering

mod settings;
mod slot;

pub use settings::{RulerMark, TimelineSettings, DEFAULT_END, DEFAULT_START};
pub use slot::{
    format_time_slot, parse_time_slot, time_slot_at, vertical_position, DEFAULT_TIME_SLOT,
};
