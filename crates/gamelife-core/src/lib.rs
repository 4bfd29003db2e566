//! # GameLife Core Library
//!
//! This library provides the core logic for GameLife, a habit tracker that
//! turns routine completion into experience for five character attributes.
//! It follows a CLI-first philosophy where all operations are available via
//! a standalone CLI binary, and any graphical front end is a thin layer over
//! the same core library.
//!
//! ## Architecture
//!
//! - **Progression**: the experience curve and the level-up / level-down
//!   state machine of each attribute, driven by habit rewards
//! - **Habits**: the ordered habit collection, completion toggling, and the
//!   drag-and-drop reorder algorithm
//! - **Timeline**: mapping between timeline drop positions and `HH:MM` slots
//! - **Storage**: JSON state snapshots and TOML-based configuration
//!
//! ## Key Components
//!
//! - [`GameLife`]: Facade that owns the state and snapshots it after every command
//! - [`AttributeStore`]: Attribute records and level transitions
//! - [`HabitStore`]: Habit ordering and time-slot assignment
//! - [`RewardEngine`]: Applies a habit's reward list
//! - [`StateStore`]: Persistence collaborator trait

pub mod app;
pub mod error;
pub mod events;
pub mod habit;
pub mod progression;
pub mod state;
pub mod storage;
pub mod timeline;

pub use app::GameLife;
pub use error::{ConfigError, StorageError, ValidationError};
pub use events::LevelEvent;
pub use habit::{Habit, HabitDraft, HabitPatch, HabitStatus, HabitStore, Repeat, ToggleOutcome};
pub use progression::{
    exp_required, AchievementProgress, Attribute, AttributeName, AttributeStore, Reward,
    RewardEngine, RewardOutcome,
};
pub use state::GameState;
pub use storage::{Config, JsonFileStore, MemoryStore, StateStore};
pub use timeline::TimelineSettings;
