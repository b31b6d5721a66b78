//! Contact records.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A contact in the address book.
///
/// `id` identifies the person; two records with the same id refer to the
/// same contact even if other fields differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Display name.
    pub name: String,
    /// Unique identifier within an address book.
    pub id: String,
    /// Phone number.
    pub phone: String,
    /// Free-form tags.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl Person {
    /// Create a person with the given tags.
    #[must_use]
    pub fn new<I, T>(
        name: impl Into<String>,
        id: impl Into<String>,
        phone: impl Into<String>,
        tags: I,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            id: id.into(),
            phone: phone.into(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `other` refers to the same contact.
    #[must_use]
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.id == other.id
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) Phone: {}", self.name, self.id, self.phone)?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
            write!(f, " Tags: [{}]", tags.join(", "))?;
        }
        Ok(())
    }
}
