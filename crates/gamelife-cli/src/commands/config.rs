//! Config commands for CLI.
//!
//! Keys are dotted paths into `config.toml`, e.g. `ui.confirm_delete` or
//! `timeline.default_start`. The timeline defaults only seed a fresh game
//! state; use `timeline set` to change the range of an existing one.

use clap::Subcommand;
use gamelife_core::Config;

use super::CliResult;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one config value
    Get {
        /// Config key (e.g. "ui.confirm_delete", "timeline.default_start")
        key: String,
    },
    /// Change one config value and save it
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// Print the whole config as JSON
    List,
    /// Restore the default config
    Reset,
}

pub fn run(action: ConfigAction) -> CliResult {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config
                .get(&key)
                .ok_or_else(|| format!("unknown key: {key}"))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            match config.get(&key) {
                Some(saved) => println!("{key} = {saved}"),
                None => println!("ok"),
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults (existing game state keeps its timeline)");
        }
    }
    Ok(())
}
