//! # Storage Layer
//!
//! The [`DataStore`] trait hides where the address book lives. The model
//! manager loads it once at startup and writes it back after every successful
//! mutation; there are no partial writes.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage
//!   - The whole book is one pretty-printed JSON document, `addressbook.json`
//!   - A missing file loads as an empty book
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Counts saves, so tests can assert that read-only commands never write
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── addressbook.json    # {"persons": [...], "lessons": [...]}
//! └── preferences.json    # font size and highlight, see config.rs
//! ```

use crate::error::Result;
use crate::model::AddressBook;

pub mod fs;
pub mod memory;

/// Abstract interface for address book persistence.
pub trait DataStore {
    /// Load the whole book. A store that was never written yields an empty book.
    fn load(&self) -> Result<AddressBook>;

    /// Replace the stored book.
    fn save(&mut self, book: &AddressBook) -> Result<()>;
}
