//! Where each user's files live.

use std::path::{Path, PathBuf};

use crate::account::Username;

/// On-disk layout of address books and preferences.
///
/// Per-user file names are derived from a [`Username`], which is already
/// validated to be a safe path component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLayout {
    data_dir: PathBuf,
    shared_preferences_file: PathBuf,
    default_address_book_file: PathBuf,
}

impl DataLayout {
    /// Describe a layout rooted at `data_dir`.
    #[must_use]
    pub fn new(
        data_dir: impl Into<PathBuf>,
        shared_preferences_file: impl Into<PathBuf>,
        default_address_book_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            data_dir: data_dir.into(),
            shared_preferences_file: shared_preferences_file.into(),
            default_address_book_file: default_address_book_file.into(),
        }
    }

    /// Directory holding per-user files.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Preferences file used while nobody is logged in.
    #[must_use]
    pub fn shared_preferences_file(&self) -> &Path {
        &self.shared_preferences_file
    }

    /// Address book used while nobody is logged in and the shared
    /// preferences do not name one.
    #[must_use]
    pub fn default_address_book_file(&self) -> &Path {
        &self.default_address_book_file
    }

    /// `<data_dir>/<username>AddressBook.json`
    #[must_use]
    pub fn user_address_book_file(&self, username: &Username) -> PathBuf {
        self.data_dir.join(format!("{username}AddressBook.json"))
    }

    /// `<data_dir>/<username>.json`
    #[must_use]
    pub fn user_preferences_file(&self, username: &Username) -> PathBuf {
        self.data_dir.join(format!("{username}.json"))
    }
}

impl Default for DataLayout {
    fn default() -> Self {
        Self::new(
            "data",
            "preferences.json",
            Path::new("data").join("addressbook.json"),
        )
    }
}
