//! In-memory model: the active address book and its preferences.

mod address_book;
mod person;
mod prefs;
pub mod sample;

use std::path::Path;

use crate::error::Result;

pub use address_book::AddressBook;
pub use person::Person;
pub use prefs::UserPrefs;

/// The address book and preferences currently being worked on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    address_book: AddressBook,
    user_prefs: UserPrefs,
}

impl Model {
    /// Create a model from loaded data.
    #[must_use]
    pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        Self {
            address_book,
            user_prefs,
        }
    }

    /// The active address book.
    #[must_use]
    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    /// The active preferences.
    #[must_use]
    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    /// Address book file named by the active preferences.
    #[must_use]
    pub fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    /// Whether a person with the same id is present.
    #[must_use]
    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.contains(person)
    }

    /// Add a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already taken.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        self.address_book.add_person(person)
    }

    /// Delete a person, returning the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if the person is absent.
    pub fn delete_person(&mut self, person: &Person) -> Result<Person> {
        self.address_book.remove_person(person)
    }

    /// Replace `target` with `edited`.
    ///
    /// # Errors
    ///
    /// Returns an error if `target` is absent or the new id collides.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        self.address_book.set_person(target, edited)
    }

    /// Replace the whole address book, returning the previous one.
    pub fn set_address_book(&mut self, address_book: AddressBook) -> AddressBook {
        std::mem::replace(&mut self.address_book, address_book)
    }
}
