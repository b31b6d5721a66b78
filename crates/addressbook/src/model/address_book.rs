//! The address book collection.

use serde::{Deserialize, Serialize};

use super::Person;
use crate::error::{Error, Result};

/// An ordered collection of people with unique ids.
///
/// Deserializing rejects data holding the same id twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SerializedAddressBook")]
pub struct AddressBook {
    persons: Vec<Person>,
}

/// On-disk shape of an [`AddressBook`], before ids are checked.
#[derive(Debug, Deserialize)]
struct SerializedAddressBook {
    #[serde(default)]
    persons: Vec<Person>,
}

impl TryFrom<SerializedAddressBook> for AddressBook {
    type Error = Error;

    fn try_from(raw: SerializedAddressBook) -> Result<Self> {
        let mut book = Self::new();
        for person in raw.persons {
            book.add_person(person)?;
        }
        Ok(book)
    }
}

impl AddressBook {
    /// Create an empty address book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All persons in insertion order.
    #[must_use]
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    /// Number of persons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Whether the address book is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Whether a person with the same id is present.
    #[must_use]
    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Look up a person by id.
    #[must_use]
    pub fn find_by_id(&self, id: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.id == id)
    }

    /// Append a person.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicatePerson`] if the id is already taken.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        if self.contains(&person) {
            return Err(Error::DuplicatePerson { id: person.id });
        }
        self.persons.push(person);
        Ok(())
    }

    /// Remove the person with the same id as `person`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if no such person exists.
    pub fn remove_person(&mut self, person: &Person) -> Result<Person> {
        let index = self
            .persons
            .iter()
            .position(|p| p.is_same_person(person))
            .ok_or_else(|| Error::person_not_found(&person.id))?;
        Ok(self.persons.remove(index))
    }

    /// Replace `target` with `edited`, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if `target` is absent, or
    /// [`Error::DuplicatePerson`] if `edited` changes the id to one that
    /// belongs to someone else.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        let index = self
            .persons
            .iter()
            .position(|p| p.is_same_person(target))
            .ok_or_else(|| Error::person_not_found(&target.id))?;

        if !target.is_same_person(&edited) && self.contains(&edited) {
            return Err(Error::DuplicatePerson { id: edited.id });
        }

        self.persons[index] = edited;
        Ok(())
    }

    /// Remove every person.
    pub fn clear(&mut self) {
        self.persons.clear();
    }
}

impl FromIterator<Person> for AddressBook {
    /// Collect persons, keeping the first of any duplicate ids.
    fn from_iter<I: IntoIterator<Item = Person>>(iter: I) -> Self {
        let mut book = Self::new();
        for person in iter {
            if !book.contains(&person) {
                book.persons.push(person);
            }
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alex() -> Person {
        Person::new("Alex Yeoh", "alex123", "87438807", ["HR"])
    }

    fn bernice() -> Person {
        Person::new("Bernice Yu", "bernice123", "99272758", ["IT"])
    }

    #[test]
    fn test_add_and_find() {
        let mut book = AddressBook::new();
        book.add_person(alex()).unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.find_by_id("alex123"), Some(&alex()));
        assert!(book.find_by_id("nobody").is_none());
    }

    #[test]
    fn test_add_duplicate_id() {
        let mut book = AddressBook::new();
        book.add_person(alex()).unwrap();

        let mut twin = bernice();
        twin.id = "alex123".to_string();
        assert!(matches!(
            book.add_person(twin),
            Err(Error::DuplicatePerson { .. })
        ));
    }

    #[test]
    fn test_remove_person() {
        let mut book: AddressBook = [alex(), bernice()].into_iter().collect();

        let removed = book.remove_person(&alex()).unwrap();
        assert_eq!(removed, alex());
        assert_eq!(book.persons(), &[bernice()]);

        assert!(matches!(
            book.remove_person(&alex()),
            Err(Error::PersonNotFound { .. })
        ));
    }

    #[test]
    fn test_set_person_keeps_position() {
        let mut book: AddressBook = [alex(), bernice()].into_iter().collect();

        let mut edited = alex();
        edited.phone = "11111111".to_string();
        book.set_person(&alex(), edited.clone()).unwrap();

        assert_eq!(book.persons()[0], edited);
    }

    #[test]
    fn test_set_person_rejects_id_collision() {
        let mut book: AddressBook = [alex(), bernice()].into_iter().collect();

        let mut edited = alex();
        edited.id = "bernice123".to_string();
        assert!(book.set_person(&alex(), edited).is_err());
        assert_eq!(book.persons()[0], alex());
    }

    #[test]
    fn test_clear() {
        let mut book: AddressBook = [alex(), bernice()].into_iter().collect();
        book.clear();
        assert!(book.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let book: AddressBook = [alex()].into_iter().collect();
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["persons"][0]["id"], "alex123");

        let empty: AddressBook = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = r#"{"persons": [
            {"name": "A", "id": "x", "phone": "1", "tags": []},
            {"name": "B", "id": "x", "phone": "2", "tags": []}
        ]}"#;
        let err = serde_json::from_str::<AddressBook>(json).unwrap_err();
        assert!(err.to_string().contains("'x' already exists"));
    }
}
