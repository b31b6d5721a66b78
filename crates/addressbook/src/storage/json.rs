//! JSON-file backed storage for address books and preferences.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::{AddressBook, UserPrefs};

/// Read a JSON file.
///
/// Returns `Ok(None)` when the file does not exist, and
/// [`Error::DataLoading`] when it exists but cannot be read or parsed.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No data file at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(Error::data_loading(path, e.to_string())),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| Error::data_loading(path, e.to_string()))
}

/// Write a value as pretty-printed JSON, creating parent directories.
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| Error::DataSaving {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Saved {}", path.display());
    Ok(())
}

/// Address book stored as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonAddressBookStorage {
    path: PathBuf,
}

impl JsonAddressBookStorage {
    /// Create storage for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the address book file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the address book, or `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLoading`] if the file is unreadable or corrupt.
    pub fn read(&self) -> Result<Option<AddressBook>> {
        read_json(&self.path)
    }

    /// Save the address book.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be written.
    pub fn save(&self, address_book: &AddressBook) -> Result<()> {
        write_json(&self.path, address_book)
    }
}

/// User preferences stored as a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonUserPrefsStorage {
    path: PathBuf,
}

impl JsonUserPrefsStorage {
    /// Create storage for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the preferences file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the preferences, or `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLoading`] if the file is unreadable or corrupt.
    pub fn read(&self) -> Result<Option<UserPrefs>> {
        read_json(&self.path)
    }

    /// Save the preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or its directory cannot be written.
    pub fn save(&self, prefs: &UserPrefs) -> Result<()> {
        write_json(&self.path, prefs)
    }
}
