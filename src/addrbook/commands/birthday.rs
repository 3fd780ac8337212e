use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookError, Result};
use chrono::NaiveDate;

pub fn set(book: &mut AddressBook, name: &str, date: &str) -> Result<CmdResult> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.set_birthday(date)?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Birthday for {} set to {}",
            name, date
        )))
        .with_affected_records(vec![record.clone()]))
}

pub fn show(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let message = match record.birthday() {
        Some(birthday) => CmdMessage::info(format!("{}: {}", name, birthday)),
        None => CmdMessage::info("Birthday information is not available."),
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn days(book: &AddressBook, name: &str, today: NaiveDate) -> Result<CmdResult> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

    let message = match record.days_to_birthday_from(today) {
        Some(0) => CmdMessage::success(format!("Today is {}'s birthday!", name)),
        Some(1) => CmdMessage::info(format!("1 day until {}'s birthday", name)),
        Some(n) => CmdMessage::info(format!("{} days until {}'s birthday", n, name)),
        None => CmdMessage::info("Birthday information is not available."),
    };
    Ok(CmdResult::default().with_message(message))
}
