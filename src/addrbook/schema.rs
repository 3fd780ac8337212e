//! On-disk document format.
//!
//! ```json
//! {
//!   "version": 1,
//!   "records": [
//!     { "name": "alice", "phones": ["0123456789"], "birthday": "1990-07-15" }
//!   ]
//! }
//! ```
//!
//! Fields are plain strings here. Validation happens when converting into a
//! [`Record`].

use crate::error::{BookError, Result};
use crate::fields::{Birthday, Name, Phone};
use crate::model::Record;
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredBook {
    pub version: u32,
    pub records: Vec<StoredRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoredRecord {
    pub name: String,
    #[serde(default)]
    pub phones: Vec<String>,
    #[serde(default)]
    pub birthday: Option<String>,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            name: record.name().to_string(),
            phones: record.phones().iter().map(|p| p.to_string()).collect(),
            birthday: record.birthday().map(|b| b.to_string()),
        }
    }
}

impl TryFrom<StoredRecord> for Record {
    type Error = BookError;

    fn try_from(stored: StoredRecord) -> Result<Self> {
        let mut record = Record::new(Name::parse(&stored.name)?);
        if let Some(birthday) = stored.birthday.as_deref() {
            record = record.with_birthday(Birthday::parse(birthday)?);
        }
        for phone in &stored.phones {
            record.push_phone(Phone::parse(phone)?);
        }
        Ok(record)
    }
}

impl StoredBook {
    pub fn new(records: Vec<StoredRecord>) -> Self {
        Self {
            version: SCHEMA_VERSION,
            records,
        }
    }

    pub fn parse(text: &str) -> Result<Self> {
        let doc: StoredBook = serde_json::from_str(text)
            .map_err(|e| BookError::CorruptStore(format!("invalid JSON: {}", e)))?;
        if doc.version != SCHEMA_VERSION {
            return Err(BookError::CorruptStore(format!(
                "unsupported schema version {} (expected {})",
                doc.version, SCHEMA_VERSION
            )));
        }
        Ok(doc)
    }
}
