use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    let matches: Vec<_> = book.search(query).into_iter().cloned().collect();
    if matches.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No matching records found.")));
    }
    Ok(CmdResult::default().with_listed_records(matches))
}
