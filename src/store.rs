//! Settings store - the persisted settings/high-score blob
//!
//! The engine itself never touches storage; the host hands it a key-value
//! collaborator and this module serializes one flat JSON record through it.
//! Load failures (missing key, corrupt JSON) fall back to defaults so a bad
//! blob can never break gameplay; save failures come back as errors for the
//! host to log and ignore.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{DEFAULT_ARR_MS, DEFAULT_DAS_MS, LOCK_DELAY_MS};

/// Storage key for the settings record
pub const SETTINGS_KEY: &str = "blockfall-settings";

/// Flat key-value storage collaborator (platform storage, a file, a test map)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The persisted settings record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Best score across sessions.
    pub high_score: u32,
    /// Lock-delay override in milliseconds.
    pub lock_delay_ms: u64,
    /// Host-side input repeat timings.
    pub das_ms: u32,
    pub arr_ms: u32,
    /// Display toggles consumed by the host renderer.
    pub show_ghost: bool,
    pub show_grid_lines: bool,
    pub enable_haptics: bool,
    pub ascii_mode: bool,
    pub show_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_score: 0,
            lock_delay_ms: LOCK_DELAY_MS,
            das_ms: DEFAULT_DAS_MS,
            arr_ms: DEFAULT_ARR_MS,
            show_ghost: true,
            show_grid_lines: true,
            enable_haptics: true,
            ascii_mode: true,
            show_hints: true,
        }
    }
}

impl Settings {
    /// Load from the store, falling back to defaults on any failure.
    pub fn load_from(store: &dyn KeyValueStore) -> Self {
        store
            .get(SETTINGS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Persist to the store. The caller decides what to do with a failure;
    /// per the engine's contract it should be logged and ignored.
    pub fn persist_to(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let raw = serde_json::to_string(self).context("serialize settings record")?;
        store
            .set(SETTINGS_KEY, &raw)
            .context("write settings record")
    }

    /// Fold a finished session's best score into the record.
    pub fn record_high_score(&mut self, score: u32) {
        self.high_score = self.high_score.max(score);
    }
}

/// In-memory store for tests and ephemeral hosts
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
