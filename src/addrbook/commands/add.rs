use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::fields::{Birthday, Name};
use crate::model::Record;

/// Adds a contact, or appends the phone to an existing one.
///
/// Every value is validated before the book is touched.
pub fn run(
    book: &mut AddressBook,
    name: &str,
    phone: &str,
    birthday: Option<&str>,
) -> Result<CmdResult> {
    let name = Name::parse(name)?;
    let mut incoming = Record::new(name.clone());
    incoming.add_phone(phone)?;
    if let Some(date) = birthday {
        incoming = incoming.with_birthday(Birthday::parse(date)?);
    }

    let existed = book.find(name.as_str()).cloned();
    book.add_record(incoming);

    let mut result = CmdResult::default();
    match existed {
        Some(previous) => {
            result.add_message(CmdMessage::success(format!(
                "Added phone {} to {}",
                phone, name
            )));
            if let (Some(kept), Some(given)) = (previous.birthday(), birthday) {
                if kept.to_string() != given {
                    result.add_message(CmdMessage::warning(format!(
                        "Kept existing birthday {} for {}",
                        kept, name
                    )));
                }
            }
        }
        None => {
            result.add_message(CmdMessage::success(format!(
                "Added record {}, phone {}",
                name, phone
            )));
        }
    }

    let stored = book.find(name.as_str()).cloned();
    Ok(result.with_affected_records(stored.into_iter().collect()))
}
