//! Client preferences. The only persisted value is the remembered username,
//! written after a successful login with "remember me" checked and removed
//! after a successful login without it.

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

pub const REMEMBERED_USERNAME_KEY: &str = "rememberedUsername";

/// Key/value storage backing [`Preferences`].
pub trait PreferenceStore: Send + Sync {
    /// # Errors
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    /// Returns an error if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        (**self).remove(key)
    }
}

/// In-process store, used by tests and when no file is configured.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default)]
    preferences: BTreeMap<String, String>,
}

/// JSON document on disk; every write rewrites the whole file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Result<PreferenceFile, AppError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(PreferenceFile::default()),
            Err(err) => {
                return Err(AppError::Storage(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )))
            }
        };
        if contents.trim().is_empty() {
            return Ok(PreferenceFile::default());
        }
        serde_json::from_str(&contents).map_err(|err| {
            AppError::Serialization(format!("invalid {}: {err}", self.path.display()))
        })
    }

    fn write(&self, file: &PreferenceFile) -> Result<(), AppError> {
        let contents = serde_json::to_string_pretty(file)
            .map_err(|err| AppError::Serialization(err.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|err| {
            AppError::Storage(format!("failed to write {}: {err}", self.path.display()))
        })
    }

    fn update(&self, apply: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<(), AppError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut file = self.read()?;
        apply(&mut file.preferences);
        self.write(&file)
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read()?.preferences.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.update(|preferences| {
            preferences.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.update(|preferences| {
            preferences.remove(key);
        })
    }
}

/// Preferences service handed to the login form.
#[derive(Debug)]
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn remembered_username(&self) -> Result<Option<String>, AppError> {
        Ok(self
            .store
            .get(REMEMBERED_USERNAME_KEY)?
            .filter(|username| !username.is_empty()))
    }

    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn remember_username(&self, username: &str) -> Result<(), AppError> {
        debug!(username, "remembering username");
        self.store.set(REMEMBERED_USERNAME_KEY, username)
    }

    /// # Errors
    /// Returns an error if the store cannot be written.
    pub fn forget_username(&self) -> Result<(), AppError> {
        debug!("forgetting remembered username");
        self.store.remove(REMEMBERED_USERNAME_KEY)
    }
}
