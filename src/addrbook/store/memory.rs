use super::BookStore;
use crate::book::AddressBook;
use crate::error::Result;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Holds the serialized document so saves go through the same JSON path as
/// the file store.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<String>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_book(book: &AddressBook) -> Result<Self> {
        Ok(Self {
            document: Some(book.to_json()?),
            saves: 0,
        })
    }

    /// Number of times [`BookStore::save`] has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl BookStore for InMemoryStore {
    fn load(&self) -> Result<AddressBook> {
        match &self.document {
            Some(doc) => AddressBook::from_json(doc),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&mut self, book: &AddressBook) -> Result<()> {
        self.document = Some(book.to_json()?);
        self.saves += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::fields::Name;
    use crate::model::Record;

    pub struct StoreFixture {
        pub book: AddressBook,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
            }
        }

        pub fn with_contact(mut self, name: &str, phones: &[&str]) -> Self {
            let mut record = Record::new(Name::parse(name).unwrap());
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            self.book.add_record(record);
            self
        }

        pub fn with_birthday(mut self, name: &str, birthday: &str) -> Self {
            self.book
                .find_mut(name)
                .unwrap()
                .set_birthday(birthday)
                .unwrap();
            self
        }

        pub fn store(&self) -> InMemoryStore {
            InMemoryStore::with_book(&self.book).unwrap()
        }
    }
}
