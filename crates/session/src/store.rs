//! Persistent key-value storage
//!
//! Three independent records are kept: remembered presets, saved layouts and
//! the default layout id. Records are written whole; the last writer wins.

use crate::{Result, SessionError};
use label_core::{FormState, RememberedLabels};
use label_template::{parse_saved_layouts, saved_layouts_to_json, LayoutLibrary, SavedLayout};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const REMEMBERED_LABELS_KEY: &str = "plywoodAppRememberedLabels";
pub const SAVED_LAYOUTS_KEY: &str = "plywoodAppSavedLayouts";
pub const DEFAULT_LAYOUT_ID_KEY: &str = "plywoodAppDefaultLayoutId";

/// String-keyed storage of string records
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    fn remove(&mut self, key: &str) -> Result<()>;
}

/// In-memory store, for tests and throwaway sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.records.remove(key);
        Ok(())
    }
}

/// One file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(SessionError::Store(format!("{}: {}", path.display(), e))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| SessionError::Store(format!("{}: {}", self.dir.display(), e)))?;
        let path = self.path_for(key);
        fs::write(&path, value)
            .map_err(|e| SessionError::Store(format!("{}: {}", path.display(), e)))
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Store(format!("{}: {}", path.display(), e))),
        }
    }
}

/// Snapshot of everything the session persists
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersistedState {
    pub presets: RememberedLabels,
    pub layouts: Vec<SavedLayout>,
    pub default_layout_id: Option<String>,
}

impl PersistedState {
    /// Load each record independently
    ///
    /// A record that cannot be read or parsed is logged and treated as absent.
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let presets = read_record(store, REMEMBERED_LABELS_KEY)
            .and_then(|text| match serde_json::from_str::<Vec<FormState>>(&text) {
                Ok(entries) => Some(RememberedLabels::from_entries(entries)),
                Err(e) => {
                    warn!(key = REMEMBERED_LABELS_KEY, error = %e, "ignoring unreadable record");
                    None
                }
            })
            .unwrap_or_default();

        let layouts = read_record(store, SAVED_LAYOUTS_KEY)
            .and_then(|text| match parse_saved_layouts(&text) {
                Ok(layouts) => Some(layouts),
                Err(e) => {
                    warn!(key = SAVED_LAYOUTS_KEY, error = %e, "ignoring unreadable record");
                    None
                }
            })
            .unwrap_or_default();

        let default_layout_id =
            read_record(store, DEFAULT_LAYOUT_ID_KEY).filter(|id| !id.is_empty());

        debug!(
            presets = presets.len(),
            layouts = layouts.len(),
            default = ?default_layout_id,
            "loaded persisted state"
        );

        Self {
            presets,
            layouts,
            default_layout_id,
        }
    }

    /// Split into the preset set and the layout library
    pub fn into_parts(self) -> (RememberedLabels, LayoutLibrary) {
        (
            self.presets,
            LayoutLibrary::new(self.layouts, self.default_layout_id),
        )
    }
}

fn read_record<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "failed to read record");
            None
        }
    }
}

/// Write the remembered presets record
pub fn save_presets<S: KeyValueStore>(store: &mut S, presets: &RememberedLabels) -> Result<()> {
    let json = serde_json::to_string(presets).map_err(|e| SessionError::Store(e.to_string()))?;
    store.set(REMEMBERED_LABELS_KEY, &json)
}

/// Write the saved layouts and default id records
pub fn save_layouts<S: KeyValueStore>(store: &mut S, library: &LayoutLibrary) -> Result<()> {
    let json = saved_layouts_to_json(library.layouts())?;
    store.set(SAVED_LAYOUTS_KEY, &json)?;

    // The id is stored raw, not as JSON.
    match library.default_id() {
        Some(id) => store.set(DEFAULT_LAYOUT_ID_KEY, id),
        None => store.remove(DEFAULT_LAYOUT_ID_KEY),
    }
}
