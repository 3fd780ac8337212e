use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};

pub fn run(book: &mut AddressBook, name: &str, phone: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    let removed = record.remove_phone(phone)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Removed phone {} from {}",
            removed, name
        )))
        .with_affected_records(vec![record.clone()]))
}
