//! Persistence of the game state blob.
//!
//! The blob lives at `<data_dir>/game_life_v1_data_v1.json`. The version
//! is part of the file name, so an incompatible layout gets a new file
//! rather than a migration.

use std::cell::{Cell, RefCell};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::StorageError;
use crate::state::GameState;

/// Versioned file name of the persisted blob.
pub const STATE_FILE: &str = "game_life_v1_data_v1.json";

/// Key-value style persistence for [`GameState`].
pub trait StateStore {
    /// Load the saved state. `Ok(None)` means nothing has been saved yet.
    ///
    /// # Errors
    /// Returns an error if the blob exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<GameState>, StorageError>;

    /// Snapshot the whole state.
    ///
    /// # Errors
    /// Returns an error if the state cannot be serialized or written.
    fn save(&self, state: &GameState) -> Result<(), StorageError>;
}

/// Stores the state as pretty-printed JSON in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location in the data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be created.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(data_dir()?.join(STATE_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<Option<GameState>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        GameState::from_json(&content).map(Some)
    }

    fn save(&self, state: &GameState) -> Result<(), StorageError> {
        let content = state.to_json()?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))
    }
}

/// In-memory store that keeps the serialized blob and counts saves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
    saves: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a raw blob, as if a previous session had written it.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
            saves: Cell::new(0),
        }
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<GameState>, StorageError> {
        match self.blob.borrow().as_deref() {
            Some(blob) => GameState::from_json(blob).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, state: &GameState) -> Result<(), StorageError> {
        *self.blob.borrow_mut() = Some(state.to_json()?);
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

impl<S: StateStore + ?Sized> StateStore for &S {
    fn load(&self) -> Result<Option<GameState>, StorageError> {
        (**self).load()
    }

    fn save(&self, state: &GameState) -> Result<(), StorageError> {
        (**self).save(state)
    }
}
