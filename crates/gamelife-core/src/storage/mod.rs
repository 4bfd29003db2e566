mod config;
mod state_store;

pub use config::{Config, TimelineConfig, UiConfig};
pub use state_store::{JsonFileStore, MemoryStore, StateStore, STATE_FILE};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/gamelife[-dev]/` based on GAMELIFE_ENV.
///
/// Set GAMELIFE_ENV=dev to use development data directory.
/// GAMELIFE_DATA_DIR overrides the location entirely.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("GAMELIFE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("GAMELIFE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("gamelife-dev")
            } else {
                base_dir.join("gamelife")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::Io {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
