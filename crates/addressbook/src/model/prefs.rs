//! User preferences.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Preferences persisted alongside an address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPrefs {
    /// Address book file these preferences point at.
    address_book_file_path: PathBuf,
}

impl UserPrefs {
    /// Create preferences pointing at the given address book file.
    #[must_use]
    pub fn new(address_book_file_path: impl Into<PathBuf>) -> Self {
        Self {
            address_book_file_path: address_book_file_path.into(),
        }
    }

    /// The address book file these preferences point at.
    #[must_use]
    pub fn address_book_file_path(&self) -> &Path {
        &self.address_book_file_path
    }

    /// Point the preferences at another address book file.
    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) {
        self.address_book_file_path = path.into();
    }
}
