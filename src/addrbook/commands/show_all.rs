use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;

pub fn run(book: &AddressBook, page_size: usize) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("Address book is empty.")));
    }

    let pages = book
        .pages(page_size)
        .map(|page| page.into_iter().cloned().collect::<Vec<_>>())
        .collect();
    Ok(CmdResult::default().with_pages(pages))
}
