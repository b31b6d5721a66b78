//! Storage layer for addressbook.
//!
//! This module provides JSON-file persistence for address books and user
//! preferences, and the [`DataLayout`] that maps users to their files.

mod json;
mod layout;

use std::path::Path;

use crate::error::Result;
use crate::model::{AddressBook, UserPrefs};

pub use json::{JsonAddressBookStorage, JsonUserPrefsStorage};
pub use layout::DataLayout;

/// The storage currently bound to the active model.
///
/// Pairs an address book file with the preferences file that points at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    address_book: JsonAddressBookStorage,
    user_prefs: JsonUserPrefsStorage,
}

impl Storage {
    /// Bind the given address book and preferences storages.
    #[must_use]
    pub fn new(address_book: JsonAddressBookStorage, user_prefs: JsonUserPrefsStorage) -> Self {
        Self {
            address_book,
            user_prefs,
        }
    }

    /// Path to the address book file.
    #[must_use]
    pub fn address_book_file_path(&self) -> &Path {
        self.address_book.path()
    }

    /// Path to the preferences file.
    #[must_use]
    pub fn user_prefs_file_path(&self) -> &Path {
        self.user_prefs.path()
    }

    /// Read the address book, or `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is unreadable or corrupt.
    pub fn read_address_book(&self) -> Result<Option<AddressBook>> {
        self.address_book.read()
    }

    /// Save the address book.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_address_book(&self, address_book: &AddressBook) -> Result<()> {
        self.address_book.save(address_book)
    }

    /// Save the preferences.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_user_prefs(&self, prefs: &UserPrefs) -> Result<()> {
        self.user_prefs.save(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let storage = Storage::new(
            JsonAddressBookStorage::new("data/bobAddressBook.json"),
            JsonUserPrefsStorage::new("data/bob.json"),
        );
        assert_eq!(
            storage.address_book_file_path(),
            Path::new("data/bobAddressBook.json")
        );
        assert_eq!(storage.user_prefs_file_path(), Path::new("data/bob.json"));
    }

    #[test]
    fn test_round_trip_through_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(
            JsonAddressBookStorage::new(dir.path().join("ab.json")),
            JsonUserPrefsStorage::new(dir.path().join("prefs.json")),
        );

        assert!(storage.read_address_book().unwrap().is_none());

        let prefs = UserPrefs::new(dir.path().join("ab.json"));
        storage.save_user_prefs(&prefs).unwrap();
        storage.save_address_book(&AddressBook::new()).unwrap();

        let prefs_storage = JsonUserPrefsStorage::new(storage.user_prefs_file_path());
        assert_eq!(prefs_storage.read().unwrap(), Some(prefs));
        assert_eq!(storage.read_address_book().unwrap(), Some(AddressBook::new()));
    }
}
