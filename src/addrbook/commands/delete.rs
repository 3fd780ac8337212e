use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

/// Deletes a contact. A missing name is reported, not raised.
pub fn run(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    let result = match book.delete(name) {
        Some(record) => CmdResult::default()
            .with_message(CmdMessage::success(format!("Deleted record {}", name)))
            .with_affected_records(vec![record]),
        None => CmdResult::default()
            .with_message(CmdMessage::warning(format!("No record found for {}", name))),
    };
    Ok(result)
}
