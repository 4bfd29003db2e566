//! Timeline commands for CLI.

use clap::Subcommand;
use gamelife_core::Config;
use serde::Serialize;

use super::{open_app, parse_clock, CliResult};

#[derive(Subcommand)]
pub enum TimelineAction {
    /// Show the visible range, hour ruler and habits by time
    Show {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Change the visible range
    Set {
        /// First visible hour (HH:MM)
        start: String,
        /// Last visible hour (HH:MM)
        end: String,
    },
}

#[derive(Serialize)]
struct TimelineEntry<'a> {
    id: &'a str,
    title: &'a str,
    time_slot: &'a str,
    top_percent: f64,
    done: bool,
}

pub fn run(action: TimelineAction) -> CliResult {
    let config = Config::load_or_default();
    let mut app = open_app(&config)?;

    match action {
        TimelineAction::Show { json } => {
            let settings = app.timeline_settings();
            let entries: Vec<TimelineEntry> = app
                .habits()
                .by_time_slot()
                .into_iter()
                .map(|habit| TimelineEntry {
                    id: &habit.id,
                    title: &habit.title,
                    time_slot: &habit.time_slot,
                    top_percent: habit.vertical_position(settings),
                    done: habit.is_done(),
                })
                .collect();

            if json {
                let value = serde_json::json!({
                    "settings": settings,
                    "ruler": settings.ruler(),
                    "habits": entries,
                });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("{} - {} ({} hours)", settings.start, settings.end, settings.hours());
            for entry in &entries {
                let mark = if entry.done { "✓" } else { "○" };
                println!(
                    "{}  {:>5.1}%  {mark}  {}  [{}]",
                    entry.time_slot, entry.top_percent, entry.title, entry.id
                );
            }
        }
        TimelineAction::Set { start, end } => {
            app.set_timeline(&parse_clock(&start)?, &parse_clock(&end)?)?;
            let settings = app.timeline_settings();
            println!("timeline set to {} - {}", settings.start, settings.end);
        }
    }
    Ok(())
}
