use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use crate::fields::Phone;

/// Replaces a contact's phone.
///
/// With `old` given, the first phone equal to it is replaced. Without it, the
/// contact's first phone is replaced, or `new` is added if there is none.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    old: Option<&str>,
    new: &str,
) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let target = match old {
        Some(old) => Some(old.to_string()),
        None => record.phones().first().map(Phone::to_string),
    };

    let message = match target {
        Some(old) => {
            record.edit_phone(&old, new)?;
            format!("Changed {} phone {} to {}", name, old, new)
        }
        None => {
            record.add_phone(new)?;
            format!("Added phone {} to {}", new, name)
        }
    };

    let changed = record.clone();
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(message))
        .with_affected_records(vec![changed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    fn phones(book: &AddressBook, name: &str) -> Vec<String> {
        book.find(name)
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    #[test]
    fn replaces_first_phone_by_default() {
        let mut book = StoreFixture::new()
            .with_contact("alice", &["1111111111", "2222222222"])
            .book;
        run(&mut book, "alice", None, "9999999999").unwrap();
        assert_eq!(phones(&book, "alice"), ["9999999999", "2222222222"]);
    }

    #[test]
    fn replaces_named_phone() {
        let mut book = StoreFixture::new()
            .with_contact("alice", &["1111111111", "2222222222"])
            .book;
        run(&mut book, "alice", Some("2222222222"), "9999999999").unwrap();
        assert_eq!(phones(&book, "alice"), ["1111111111", "9999999999"]);
    }

    #[test]
    fn adds_when_contact_has_no_phones() {
        let mut book = StoreFixture::new().with_contact("alice", &[]).book;
        run(&mut book, "alice", None, "9999999999").unwrap();
        assert_eq!(phones(&book, "alice"), ["9999999999"]);
    }

    #[test]
    fn unknown_contact() {
        let mut book = AddressBook::new();
        assert!(matches!(
            run(&mut book, "bob", None, "9999999999"),
            Err(BookError::ContactNotFound(_))
        ));
    }

    #[test]
    fn unknown_phone() {
        let mut book = StoreFixture::new()
            .with_contact("alice", &["1111111111"])
            .book;
        assert!(matches!(
            run(&mut book, "alice", Some("2222222222"), "9999999999"),
            Err(BookError::PhoneNotFound { .. })
        ));
    }
}
