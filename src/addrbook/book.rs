use crate::error::{BookError, Result};
use crate::model::Record;
use crate::schema::{StoredBook, StoredRecord};
use std::collections::BTreeMap;

pub const DEFAULT_PAGE_SIZE: usize = 1;

/// All contacts, keyed by name.
///
/// Records iterate in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Inserts `record`, or merges its phones into the record already stored
    /// under the same name. An existing birthday is never overwritten.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().to_string();
        match self.records.get_mut(&key) {
            Some(existing) => {
                for phone in record.phones() {
                    existing.push_phone(phone.clone());
                }
                existing.fill_birthday(record.birthday());
            }
            None => {
                self.records.insert(key, record);
            }
        }
    }

    /// Removes the record for `name`. `None` when there is nothing to remove.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Records whose name contains `query` (case-insensitive) or that have a
    /// phone containing it.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query = query.to_lowercase();
        self.records
            .values()
            .filter(|rec| {
                rec.name().as_str().to_lowercase().contains(&query)
                    || rec.phones().iter().any(|p| p.as_str().contains(&query))
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Batches of `size` records. A size of 0 is treated as 1.
    pub fn pages(&self, size: usize) -> Pages<'_> {
        Pages {
            records: self.records.values().collect(),
            size: size.max(1),
            pos: 0,
        }
    }

    pub fn iter_pages(&self) -> Pages<'_> {
        self.pages(DEFAULT_PAGE_SIZE)
    }

    pub fn to_json(&self) -> Result<String> {
        let doc = StoredBook::new(self.records.values().map(StoredRecord::from).collect());
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let doc = StoredBook::parse(text)?;
        let mut book = Self::new();
        for (i, stored) in doc.records.into_iter().enumerate() {
            let record = Record::try_from(stored)
                .map_err(|e| BookError::CorruptStore(format!("record {}: {}", i, e)))?;
            book.add_record(record);
        }
        Ok(book)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::collections::btree_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

/// Paging iterator returned by [`AddressBook::pages`].
pub struct Pages<'a> {
    records: Vec<&'a Record>,
    size: usize,
    pos: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.records.len() {
            return None;
        }
        let end = (self.pos + self.size).min(self.records.len());
        let page = self.records[self.pos..end].to_vec();
        self.pos = end;
        Some(page)
    }
}
