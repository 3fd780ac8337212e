//! # Addrbook Architecture
//!
//! Addrbook is a small contact book: names, phone numbers and birthdays, kept
//! in memory and persisted as one JSON document. The interactive prompt lives
//! in the binary; this library holds everything below it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - REPL loop, command parsing, rendering, user tips         │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AddressBook and the store                       │
//! │  - Dispatches to commands, autosaves mutations              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Operates on an AddressBook, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model (fields.rs, model.rs, book.rs) + Storage (store/)    │
//! │  - Validated value types, Record, AddressBook               │
//! │  - BookStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`book`]: The [`book::AddressBook`] map and its paging iterator
//! - [`model`]: [`model::Record`], a single contact
//! - [`fields`]: `Name`, `Phone`, `Birthday` value types
//! - [`schema`]: Versioned JSON document format
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration stored beside the data
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod model;
pub mod schema;
pub mod store;
