//! # lessonbook Architecture
//!
//! lessonbook is an address book and lesson timetable driven by typed command
//! lines such as `add n/John Doe p/98765432 e/johnd@example.com a/Clementi`.
//! It is a library that happens to have a terminal client: nothing below the
//! CLI knows about stdin, stdout or exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, prints messages and lists, sets up logging  │
//! │  - Applies the UiUpdates a command returns                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Logic Facade (api.rs) + Parser (parser/)                   │
//! │  - Text → Command → dispatch                                │
//! │  - History, undo/redo snapshots, user preferences           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per action, returning Result<CmdResult>     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Manager (manager.rs)                                 │
//! │  - Backing book, active predicates, visible lists           │
//! │  - Listing unit and favourites                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore (JSON), InMemoryStore (tests) │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Views
//!
//! The user never looks at the book directly. They look at the *visible*
//! persons or lessons: the records passing the active [`predicates`]. Which
//! list is active, and at what granularity, is the [`listing`] unit. Indexes
//! typed by the user are 1-based positions in the active list
//! (see [`index`]).
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): the bulk of the tests, run against a
//!    `ModelFixture` over an `InMemoryStore`.
//! 2. **Parser** (`parser/`): one test per grammar rule and error kind.
//! 3. **Facade** (`api.rs`): dispatch, history and undo bookkeeping.
//! 4. **CLI** (`tests/`): the binary end to end, against a temporary data dir.
//!
//! ## Module Overview
//!
//! - [`api`]: The logic facade, entry point for all operations
//! - [`parser`]: Command-line text to typed [`commands::Command`]
//! - [`commands`]: One module per action
//! - [`manager`]: Backing book plus the filtered views over it
//! - [`listing`]: Listing units and the lesson refilter
//! - [`predicates`]: Person and lesson filters
//! - [`model`]: Records and their validated fields
//! - [`store`]: Storage abstraction and implementations
//! - [`index`]: 1-based display indexes
//! - [`config`]: User preferences
//! - [`error`]: Error types
//! - `cli`: Terminal client for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod listing;
pub mod manager;
pub mod model;
pub mod parser;
pub mod predicates;
pub mod store;
