//! Subcommand implementations. Each module exposes an action enum and a
//! `run` function, like `habit::run(HabitAction)`.

pub mod attr;
pub mod config;
pub mod habit;
pub mod timeline;

use gamelife_core::{Config, GameLife, JsonFileStore, LevelEvent};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Open the game state from the data directory, seeding a first run with
/// the configured timeline range.
pub fn open_app(config: &Config) -> Result<GameLife<JsonFileStore>, Box<dyn std::error::Error>> {
    let store = JsonFileStore::open_default()?;
    tracing::debug!(path = %store.path().display(), "opening game state");
    Ok(GameLife::open_with_defaults(store, config.timeline_settings()))
}

/// Print level-up and level-down notifications, one per line.
pub fn print_level_events<'a>(events: impl IntoIterator<Item = &'a LevelEvent>) {
    for event in events {
        if event.is_level_up() {
            println!("🎉 {}", event.message());
        } else {
            println!("{}", event.message());
        }
    }
}

/// Validate an `HH:MM` time and return it zero-padded.
pub fn parse_clock(value: &str) -> Result<String, String> {
    chrono::NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|_| format!("invalid time '{value}' (expected HH:MM)"))
}
