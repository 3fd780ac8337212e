use crate::error::{BookError, Result};
use crate::fields::{Birthday, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// One contact.
///
/// The name is fixed at creation and identifies the record inside an
/// [`AddressBook`](crate::book::AddressBook). Phones keep insertion order and
/// may repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<Birthday> {
        self.birthday
    }

    pub fn add_phone(&mut self, value: &str) -> Result<()> {
        let phone = Phone::parse(value)?;
        self.phones.push(phone);
        Ok(())
    }

    pub(crate) fn push_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    pub fn remove_phone(&mut self, value: &str) -> Result<Phone> {
        let pos = self.position_of(value)?;
        Ok(self.phones.remove(pos))
    }

    /// Replaces the first phone equal to `old`, keeping its position.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = Phone::parse(new)?;
        let pos = self.position_of(old)?;
        self.phones[pos] = replacement;
        Ok(())
    }

    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    pub fn set_birthday(&mut self, value: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    pub(crate) fn fill_birthday(&mut self, birthday: Option<Birthday>) {
        if self.birthday.is_none() {
            self.birthday = birthday;
        }
    }

    /// Days until the next birthday, or `None` when it is unknown.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Same as [`days_to_birthday`](Self::days_to_birthday) with an explicit
    /// "today". Returns 0 on the birthday itself.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?;
        let mut next = birthday.in_year(today.year());
        if next < today {
            next = birthday.in_year(today.year() + 1);
        }
        Some((next - today).num_days())
    }

    fn position_of(&self, value: &str) -> Result<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == value)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.to_string(),
                phone: value.to_string(),
            })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}
