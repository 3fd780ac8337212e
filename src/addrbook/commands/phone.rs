use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};

pub fn run(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let mut result = CmdResult::default().with_listed_records(vec![record.clone()]);
    if record.phones().is_empty() {
        result.add_message(CmdMessage::info(format!("{} has no phones yet", name)));
    }
    Ok(result)
}
