//! # API Facade
//!
//! [`AddressBookApi`] owns the in-memory [`AddressBook`] and the [`BookStore`]
//! it came from. Every UI goes through it.
//!
//! It dispatches to `commands/*.rs`, and after any command that changed a
//! record it writes the book back to the store when autosave is on. It does
//! no formatting and no terminal I/O; callers get a [`CmdResult`].
//!
//! Generic over the store:
//! - Production: `AddressBookApi<FileStore>`
//! - Testing: `AddressBookApi<InMemoryStore>`

use crate::book::AddressBook;
use crate::commands;
use crate::error::Result;
use crate::store::BookStore;
use chrono::{Local, NaiveDate};
use tracing::{debug, info, warn};

pub struct AddressBookApi<S: BookStore> {
    book: AddressBook,
    store: S,
    autosave: bool,
}

impl<S: BookStore> AddressBookApi<S> {
    /// Loads the book from `store`.
    pub fn open(store: S, autosave: bool) -> Result<Self> {
        let book = store.load()?;
        info!(
            store = %store.describe(),
            records = book.len(),
            "address book opened"
        );
        Ok(Self {
            book,
            store,
            autosave,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_contact(
        &mut self,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> Result<CmdResult> {
        let result = commands::add::run(&mut self.book, name, phone, birthday)?;
        self.persist(result)
    }

    pub fn change_phone(&mut self, name: &str, old: Option<&str>, new: &str) -> Result<CmdResult> {
        let result = commands::change::run(&mut self.book, name, old, new)?;
        self.persist(result)
    }

    pub fn remove_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = commands::remove::run(&mut self.book, name, phone)?;
        self.persist(result)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.book, name)?;
        self.persist(result)
    }

    pub fn set_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        let result = commands::birthday::set(&mut self.book, name, date)?;
        self.persist(result)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        commands::birthday::show(&self.book, name)
    }

    pub fn days_to_birthday(&self, name: &str) -> Result<CmdResult> {
        self.days_to_birthday_from(name, Local::now().date_naive())
    }

    pub fn days_to_birthday_from(&self, name: &str, today: NaiveDate) -> Result<CmdResult> {
        commands::birthday::days(&self.book, name, today)
    }

    pub fn phone(&self, name: &str) -> Result<CmdResult> {
        commands::phone::run(&self.book, name)
    }

    pub fn search(&self, query: &str) -> Result<CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn show_all(&self, page_size: usize) -> Result<CmdResult> {
        commands::show_all::run(&self.book, page_size)
    }

    /// Writes the book regardless of autosave.
    pub fn save(&mut self) -> Result<CmdResult> {
        self.store.save(&self.book)?;
        Ok(CmdResult::default().with_message(CmdMessage::success(format!(
            "Saved {} records to {}",
            self.book.len(),
            self.store.describe()
        ))))
    }

    /// Autosaves after a mutation. A failed save does not undo the command:
    /// the change stays in memory and the result carries an error message.
    fn persist(&mut self, result: CmdResult) -> Result<CmdResult> {
        if !(self.autosave && result.is_mutation()) {
            return Ok(result);
        }
        debug!(changed = result.affected_records.len(), "autosaving");
        match self.store.save(&self.book) {
            Ok(()) => Ok(result),
            Err(e) => {
                warn!(error = %e, store = %self.store.describe(), "autosave failed");
                Ok(result.with_message(CmdMessage::error(format!(
                    "Store error: {}; change kept in memory until the next save",
                    e
                ))))
            }
        }
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::io;

    fn api() -> AddressBookApi<InMemoryStore> {
        AddressBookApi::open(InMemoryStore::new(), true).unwrap()
    }

    /// Loads empty, refuses every save.
    struct ReadOnlyStore;

    impl BookStore for ReadOnlyStore {
        fn load(&self) -> Result<AddressBook> {
            Ok(AddressBook::new())
        }

        fn save(&mut self, _book: &AddressBook) -> Result<()> {
            Err(BookError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }

        fn describe(&self) -> String {
            "read-only".to_string()
        }
    }

    #[test]
    fn opens_existing_store() {
        let store = StoreFixture::new()
            .with_contact("alice", &["0123456789"])
            .store();
        let api = AddressBookApi::open(store, true).unwrap();
        assert_eq!(api.book().len(), 1);
    }

    #[test]
    fn autosaves_mutations() {
        let mut api = api();
        api.add_contact("alice", "0123456789", None).unwrap();
        api.change_phone("alice", None, "1111111111").unwrap();
        assert_eq!(api.store().save_count(), 2);

        assert!(api.store().document().unwrap().contains("1111111111"));
        let reloaded = api.store().load().unwrap();
        assert_eq!(
            reloaded.find("alice").unwrap().phones()[0].as_str(),
            "1111111111"
        );
    }

    #[test]
    fn reads_do_not_save() {
        let mut api = api();
        api.add_contact("alice", "0123456789", None).unwrap();
        api.phone("alice").unwrap();
        api.search("ali").unwrap();
        api.show_all(10).unwrap();
        api.delete_contact("nobody").unwrap();
        assert_eq!(api.store().save_count(), 1);
    }

    #[test]
    fn failed_commands_do_not_save() {
        let mut api = api();
        assert!(api.add_contact("alice", "bad", None).is_err());
        assert_eq!(api.store().save_count(), 0);
    }

    #[test]
    fn autosave_off_requires_explicit_save() {
        let mut api = AddressBookApi::open(InMemoryStore::new(), false).unwrap();
        api.add_contact("alice", "0123456789", None).unwrap();
        assert_eq!(api.store().save_count(), 0);

        let result = api.save().unwrap();
        assert_eq!(api.store().save_count(), 1);
        assert!(result.messages[0].content.starts_with("Saved 1 records"));
    }

    #[test]
    fn failed_autosave_keeps_change_and_reports_it() {
        let mut api = AddressBookApi::open(ReadOnlyStore, true).unwrap();
        let result = api.add_contact("alice", "0123456789", None).unwrap();

        assert!(api.book().find("alice").is_some());
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Success));
        let last = result.messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Error);
        assert!(last.content.starts_with("Store error:"));
        assert!(last
            .content
            .ends_with("change kept in memory until the next save"));
    }

    #[test]
    fn explicit_save_still_fails_on_broken_store() {
        let mut api = AddressBookApi::open(ReadOnlyStore, false).unwrap();
        api.add_contact("alice", "0123456789", None).unwrap();
        assert!(matches!(api.save(), Err(BookError::Io(_))));
    }

    #[test]
    fn days_to_birthday_uses_given_day() {
        let mut api = api();
        api.add_contact("alice", "0123456789", Some("1990-12-25"))
            .unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 12, 20).unwrap();
        let result = api.days_to_birthday_from("alice", today).unwrap();
        assert_eq!(result.messages[0].content, "5 days until alice's birthday");
    }
}
