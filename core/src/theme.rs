use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::IntoDeserializer;
use serde::Deserialize;

pub const THEME_STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Anything other than `"dark"` reads as light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|raw| {
            let deserializer: StrDeserializer<'_, ValueError> = raw.into_deserializer();
            Self::deserialize(deserializer).ok()
        })
        .unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

/// Minimal string key-value store the theme is persisted in.
pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable,
    WriteRejected { key: String, reason: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "preference storage is unavailable"),
            StorageError::WriteRejected { key, reason } => {
                write!(f, "failed to write preference '{key}': {reason}")
            }
        }
    }
}

impl std::error::Error for StorageError {}

pub fn initial_theme<S: PreferenceStorage + ?Sized>(storage: &S) -> ThemePreference {
    ThemePreference::from_stored(storage.read(THEME_STORAGE_KEY).as_deref())
}

pub fn persist_theme<S: PreferenceStorage + ?Sized>(
    storage: &S,
    theme: ThemePreference,
) -> Result<(), StorageError> {
    storage.write(THEME_STORAGE_KEY, theme.as_str())
}

/// In-process storage for non-browser targets and tests.
#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn clear(&self) {
        self.values.borrow_mut().clear();
    }
}

impl PreferenceStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
