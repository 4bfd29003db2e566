//! Habit management commands for CLI.

use clap::Subcommand;
use gamelife_core::progression::reward::{MAX_REWARD, MIN_REWARD};
use gamelife_core::{
    AttributeName, Config, Habit, HabitDraft, HabitPatch, Repeat, Reward, ToggleOutcome,
};
use std::collections::BTreeMap;

use super::{open_app, parse_clock, print_level_events, CliResult};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit at the end of the list
    Add {
        /// Habit title
        title: String,
        /// Reward as ATTRIBUTE=VALUE, repeatable (e.g. --reward 体力=3 --reward discipline=-1)
        #[arg(long = "reward", value_name = "ATTR=VALUE")]
        rewards: Vec<String>,
        /// Repeat: daily or weekly
        #[arg(long, default_value = "daily")]
        repeat: Repeat,
        /// Time slot (HH:MM)
        #[arg(long, default_value = "09:00")]
        time: String,
    },
    /// List habits in priority order
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one habit as JSON
    Show {
        /// Habit ID
        id: String,
    },
    /// Edit a habit
    Edit {
        /// Habit ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// Replace the reward list (ATTRIBUTE=VALUE, repeatable)
        #[arg(long = "reward", value_name = "ATTR=VALUE")]
        rewards: Vec<String>,
        /// Remove every reward
        #[arg(long, conflicts_with = "rewards")]
        clear_rewards: bool,
        /// New repeat
        #[arg(long)]
        repeat: Option<Repeat>,
        /// New time slot (HH:MM)
        #[arg(long)]
        time: Option<String>,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: String,
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },
    /// Toggle completion; completing applies the habit's rewards
    Done {
        /// Habit ID
        id: String,
    },
    /// Move a habit before (or after) another one
    Reorder {
        /// Habit being moved
        from: String,
        /// Habit it is dropped on
        to: String,
        /// Insert after the target instead of before it
        #[arg(long)]
        after: bool,
    },
    /// Place a habit on the timeline by drop position
    Slot {
        /// Habit ID
        id: String,
        /// Drop position as a fraction of the visible timeline (0.0 - 1.0)
        fraction: f64,
    },
}

/// Parse editor-style rewards. One value per attribute (the last one wins),
/// clamped to the editor range; zero values are dropped. The result follows
/// attribute display order.
fn parse_rewards(specs: &[String]) -> Result<Vec<Reward>, String> {
    let mut values: BTreeMap<AttributeName, i64> = BTreeMap::new();
    for spec in specs {
        let (name, value) = spec
            .split_once('=')
            .ok_or_else(|| format!("invalid reward '{spec}' (expected ATTRIBUTE=VALUE)"))?;
        let attribute: AttributeName = name.parse()?;
        let value: i64 = value
            .trim()
            .parse()
            .map_err(|_| format!("invalid reward value in '{spec}'"))?;
        values.insert(attribute, value.clamp(MIN_REWARD, MAX_REWARD));
    }
    Ok(values
        .into_iter()
        .filter(|(_, value)| *value != 0)
        .map(|(attribute, value)| Reward::new(attribute.as_str(), value))
        .collect())
}

fn print_row(habit: &Habit) {
    let mark = if habit.is_done() { "✓" } else { "○" };
    println!(
        "{:>3}  {mark}  {}  {:<24} {}  [{}]",
        habit.priority,
        habit.time_slot,
        habit.title,
        habit.reward_summary(),
        habit.id
    );
}

pub fn run(action: HabitAction) -> CliResult {
    let config = Config::load_or_default();
    let mut app = open_app(&config)?;

    match action {
        HabitAction::Add {
            title,
            rewards,
            repeat,
            time,
        } => {
            let title = title.trim().to_string();
            if title.is_empty() {
                return Err("habit title must not be empty".into());
            }
            let rewards = parse_rewards(&rewards)?;
            if rewards.is_empty() {
                eprintln!("note: no rewards set for this habit");
            }
            let draft = HabitDraft {
                title,
                rewards,
                repeat,
                time_slot: parse_clock(&time)?,
            };
            let habit = app.add_habit(draft);
            println!("Habit created: {}", habit.id);
            println!("{}", serde_json::to_string_pretty(&habit)?);
        }
        HabitAction::List { json } => {
            let habits = app.habits().sorted();
            if json {
                println!("{}", serde_json::to_string_pretty(&habits)?);
            } else if habits.is_empty() {
                println!("No habits yet. Use 'habit add' to create one.");
            } else {
                for habit in habits {
                    print_row(habit);
                }
            }
        }
        HabitAction::Show { id } => match app.habits().get(&id) {
            Some(habit) => println!("{}", serde_json::to_string_pretty(habit)?),
            None => return Err(format!("habit not found: {id}").into()),
        },
        HabitAction::Edit {
            id,
            title,
            rewards,
            clear_rewards,
            repeat,
            time,
        } => {
            let title = title.map(|t| t.trim().to_string());
            if title.as_deref() == Some("") {
                return Err("habit title must not be empty".into());
            }
            let rewards = if clear_rewards {
                Some(Vec::new())
            } else if rewards.is_empty() {
                None
            } else {
                Some(parse_rewards(&rewards)?)
            };
            let patch = HabitPatch {
                title,
                rewards,
                repeat,
                time_slot: time.as_deref().map(parse_clock).transpose()?,
            };
            if patch.is_empty() {
                return Err("nothing to change".into());
            }
            if !app.update_habit(&id, patch) {
                return Err(format!("habit not found: {id}").into());
            }
            println!("Habit updated: {id}");
        }
        HabitAction::Delete { id, yes } => {
            if config.ui.confirm_delete && !yes {
                return Err(format!("deleting {id} needs confirmation; re-run with --yes").into());
            }
            match app.delete_habit(&id) {
                Some(habit) => println!("Habit deleted: {} ({})", habit.title, habit.id),
                None => return Err(format!("habit not found: {id}").into()),
            }
        }
        HabitAction::Done { id } => {
            let title = app
                .habits()
                .get(&id)
                .map(|h| h.title.clone())
                .ok_or_else(|| format!("habit not found: {id}"))?;
            match app.toggle_complete(&id) {
                Some(ToggleOutcome::Completed(outcome)) => {
                    println!("完成：{title}");
                    print_level_events(outcome.events());
                }
                Some(ToggleOutcome::Reopened) => println!("已取消完成：{title}"),
                None => return Err(format!("habit not found: {id}").into()),
            }
        }
        HabitAction::Reorder { from, to, after } => {
            if app.reorder(&from, &to, after) {
                println!("已更新任务优先级");
            } else {
                println!("nothing to reorder");
            }
        }
        HabitAction::Slot { id, fraction } => match app.set_time_slot(&id, fraction) {
            Some(slot) => println!("已更新时间至 {slot}"),
            None => return Err(format!("habit not found: {id}").into()),
        },
    }
    Ok(())
}
