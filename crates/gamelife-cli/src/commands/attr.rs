//! Attribute and achievement commands for CLI.

use clap::Subcommand;
use gamelife_core::{AchievementProgress, Config};

use super::{open_app, CliResult};

#[derive(Subcommand)]
pub enum AttrAction {
    /// Show level and experience of every attribute
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show achievement badges per attribute
    Achievements {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: AttrAction) -> CliResult {
    let config = Config::load_or_default();
    let app = open_app(&config)?;

    match action {
        AttrAction::List { json } => {
            if json {
                let attrs: Vec<_> = app.attributes().iter().collect();
                println!("{}", serde_json::to_string_pretty(&attrs)?);
                return Ok(());
            }
            for attr in app.attributes().iter() {
                let mut line = format!(
                    "{}  Lv{}  {}/{} ({}%)",
                    attr.name,
                    attr.level,
                    attr.exp,
                    attr.exp_required,
                    attr.progress_percent()
                );
                if config.ui.show_achievements {
                    let progress = AchievementProgress::for_attribute(attr);
                    line.push_str(&format!("  {}", progress.badges()));
                }
                println!("{line}");
            }
        }
        AttrAction::Achievements { json } => {
            let achievements = app.achievements();
            if json {
                println!("{}", serde_json::to_string_pretty(&achievements)?);
                return Ok(());
            }
            for progress in &achievements {
                let next = progress
                    .next
                    .map(|ach| format!("下一级: {} (Lv{})", ach.title, ach.level))
                    .unwrap_or_default();
                println!(
                    "{}  {}  {} 成就  {next}",
                    progress.attribute,
                    progress.badges(),
                    progress.summary()
                );
            }
        }
    }
    Ok(())
}
