//! Sample contacts for a freshly created address book.

use super::{AddressBook, Person};

/// The persons a new address book is populated with.
fn sample_persons() -> Vec<Person> {
    vec![
        Person::new("Alex Yeoh", "alex123", "87438807", ["HR"]),
        Person::new("Bernice Yu", "bernice123", "99272758", ["RnD", "IT"]),
        Person::new("Charlotte Oliveiro", "charlotte123", "93210283", ["sales"]),
        Person::new("David Li", "david123", "91031282", ["finance"]),
        Person::new("Irfan Ibrahim", "irfan123", "92492021", ["operations"]),
        Person::new("Roy Balakrishnan", "roy123", "92624417", ["sales", "marketing"]),
    ]
}

/// An address book holding the sample persons.
#[must_use]
pub fn sample_address_book() -> AddressBook {
    sample_persons().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ids_are_unique() {
        assert_eq!(sample_address_book().len(), sample_persons().len());
    }
}
