//! Durable key-value storage.
//!
//! Values are kept as text in a single JSON object on disk, one entry per key.
//! Scalars are stored as given; structured values are stored as their JSON
//! text. Every write rewrites the file. Failures are logged and swallowed so
//! a broken disk never takes the dashboard down.

mod error;

pub use error::StorageError;

use log::*;
use serde::{de::DeserializeOwned, Serialize};
use std::{collections::BTreeMap, fs, path::PathBuf};

/// Names of the persisted values.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKey {
    Timezone,
    CurrentTask,
    CompletedTasks,
    Motivations,
}

impl StorageKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Timezone => "timezone",
            StorageKey::CurrentTask => "currentTask",
            StorageKey::CompletedTasks => "completedTasks",
            StorageKey::Motivations => "motivations",
        }
    }
}

/// Key-value store backed by one JSON file, or by nothing at all when
/// created with [`Store::in_memory`].
///
#[derive(Debug, Default)]
pub struct Store {
    path: Option<PathBuf>,
    entries: BTreeMap<String, String>,
}

impl Store {
    /// Open the store at `path`. A missing file is an empty store; an
    /// unreadable or corrupt one is logged and treated as empty.
    ///
    pub fn open(path: PathBuf) -> Store {
        let entries = match Store::read_entries(&path) {
            Ok(entries) => entries,
            Err(e) => {
                error!("{}", e);
                BTreeMap::new()
            }
        };
        debug!(
            "Opened storage at {} with {} entries.",
            path.display(),
            entries.len()
        );
        Store {
            path: Some(path),
            entries,
        }
    }

    /// Return a store that never touches the disk.
    ///
    pub fn in_memory() -> Store {
        Store::default()
    }

    /// Return the raw text stored under `key`.
    ///
    pub fn get_text(&self, key: StorageKey) -> Option<String> {
        self.entries.get(key.as_str()).cloned()
    }

    /// Parse the text stored under `key` as JSON. Absent keys and parse
    /// failures both yield `None`; the latter is logged.
    ///
    pub fn get_json<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = self.entries.get(key.as_str())?;
        match serde_json::from_str::<T>(raw) {
            Ok(value) => Some(value),
            Err(source) => {
                let e = StorageError::Deserialize {
                    key: key.as_str().to_owned(),
                    source,
                };
                warn!("{}", e);
                None
            }
        }
    }

    /// Store a scalar as-is.
    ///
    pub fn set_text(&mut self, key: StorageKey, value: &str) {
        self.entries
            .insert(key.as_str().to_owned(), value.to_owned());
        self.persist();
    }

    /// Store a structured value as JSON text.
    ///
    pub fn set_json<T: Serialize>(&mut self, key: StorageKey, value: &T) {
        match serde_json::to_string(value) {
            Ok(text) => {
                self.entries.insert(key.as_str().to_owned(), text);
                self.persist();
            }
            Err(source) => {
                let e = StorageError::Serialize {
                    key: key.as_str().to_owned(),
                    source,
                };
                error!("{}", e);
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.write_entries() {
            error!("{}", e);
        }
    }

    fn read_entries(path: &PathBuf) -> Result<BTreeMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
            path: path.clone(),
            source,
        })
    }

    fn write_entries(&self) -> Result<(), StorageError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|source| {
                StorageError::Encode {
                    path: path.clone(),
                    source,
                }
            })?;
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }
        fs::write(path, content).map_err(|source| StorageError::Write {
            path: path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_is_stored_as_is() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        let mut store = Store::open(path.clone());
        store.set_text(StorageKey::Timezone, "America/Chicago");

        let reopened = Store::open(path.clone());
        assert_eq!(
            reopened.get_text(StorageKey::Timezone).as_deref(),
            Some("America/Chicago")
        );
        let raw: BTreeMap<String, String> = serde_json::from_str(&fs::read_to_string(path)?)?;
        assert_eq!(raw["timezone"], "America/Chicago");
        Ok(())
    }

    #[test]
    fn structured_value_is_stored_as_json_text() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        let mut store = Store::open(path.clone());
        let motivations = vec!["one".to_string(), "two".to_string()];
        store.set_json(StorageKey::Motivations, &motivations);

        let raw: BTreeMap<String, String> = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(raw["motivations"], r#"["one","two"]"#);

        let reopened = Store::open(path);
        assert_eq!(
            reopened.get_json::<Vec<String>>(StorageKey::Motivations),
            Some(motivations)
        );
        Ok(())
    }

    #[test]
    fn corrupt_value_yields_none() {
        let mut store = Store::in_memory();
        store.set_text(StorageKey::Motivations, "[not json");
        assert_eq!(store.get_json::<Vec<String>>(StorageKey::Motivations), None);
    }

    #[test]
    fn absent_key_yields_none() {
        let store = Store::in_memory();
        assert_eq!(store.get_text(StorageKey::Timezone), None);
        assert_eq!(store.get_json::<Vec<String>>(StorageKey::CompletedTasks), None);
    }

    #[test]
    fn corrupt_file_opens_empty_and_is_overwritten() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "this is not json")?;

        let mut store = Store::open(path.clone());
        assert_eq!(store.get_text(StorageKey::Timezone), None);

        store.set_text(StorageKey::Timezone, "Europe/Oslo");
        let reopened = Store::open(path);
        assert_eq!(
            reopened.get_text(StorageKey::Timezone).as_deref(),
            Some("Europe/Oslo")
        );
        Ok(())
    }

    #[test]
    fn write_failure_is_swallowed() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        // A directory where the file should be makes every write fail.
        let path = dir.path().join("storage.json");
        fs::create_dir(&path)?;

        let mut store = Store::open(path);
        store.set_text(StorageKey::Timezone, "Asia/Tokyo");
        assert_eq!(
            store.get_text(StorageKey::Timezone).as_deref(),
            Some("Asia/Tokyo")
        );
        Ok(())
    }

    #[test]
    fn corrupt_file_error_names_the_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("storage.json");
        fs::write(&path, "[1, 2")?;

        match Store::read_entries(&path) {
            Err(StorageError::Corrupt { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected a corrupt-file error, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn key_names() {
        assert_eq!(StorageKey::CurrentTask.as_str(), "currentTask");
        assert_eq!(StorageKey::CompletedTasks.as_str(), "completedTasks");
    }
}
