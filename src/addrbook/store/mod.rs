//! # Storage Layer
//!
//! The [`BookStore`] trait is the only thing the API knows about persistence.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON document on disk (see [`crate::schema`]).
//!   A missing file loads as an empty book. Saves write a temp file next to
//!   the target and rename it over, so readers never see a half-written store.
//!
//! - [`memory::InMemoryStore`]: keeps the last saved document in memory.
//!   Used by tests.

use crate::book::AddressBook;
use crate::error::Result;

pub mod fs;
pub mod memory;

pub trait BookStore {
    /// Load the whole book. A store that has never been saved yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book with `book`.
    fn save(&mut self, book: &AddressBook) -> Result<()>;

    /// Human-readable location, for messages.
    fn describe(&self) -> String;
}
