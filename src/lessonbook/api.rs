//! # Logic Facade
//!
//! The single entry point for front ends. [`Logic::execute`] takes one raw
//! input line and returns the [`CmdResult`] of running it; the caller decides
//! how to show messages and apply the updates.
//!
//! Beyond dispatch, the facade owns the state that belongs to a session rather
//! than to the records:
//!
//! - the lines entered so far, for `history`
//! - the undo/redo snapshots
//! - the user preferences, saved whenever `customise` succeeds
//!
//! A line that fails to parse or run leaves all of it untouched.
//!
//! ## Generic Over DataStore
//!
//! `Logic<S: DataStore>` runs over a `FileStore` in the binary and an
//! `InMemoryStore` in tests.

use crate::commands::undo::UndoRedoStack;
use crate::commands::{self, Command, UiUpdate};
use crate::config::UserPrefs;
use crate::error::Result;
use crate::manager::ModelManager;
use crate::parser;
use crate::store::DataStore;
use std::path::PathBuf;
use tracing::debug;

pub const MESSAGE_EXIT: &str = "Exiting address book as requested ...";

pub struct Logic<S: DataStore> {
    model: ModelManager<S>,
    prefs: UserPrefs,
    /// Where `prefs` is saved; `None` keeps them in memory only.
    prefs_dir: Option<PathBuf>,
    history: Vec<String>,
    undo_stack: UndoRedoStack,
}

impl<S: DataStore> Logic<S> {
    pub fn new(model: ModelManager<S>, prefs: UserPrefs, prefs_dir: Option<PathBuf>) -> Self {
        Self {
            model,
            prefs,
            prefs_dir,
            history: Vec::new(),
            undo_stack: UndoRedoStack::new(),
        }
    }

    pub fn model(&self) -> &ModelManager<S> {
        &self.model
    }

    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    /// Successfully executed lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn execute(&mut self, line: &str) -> Result<CmdResult> {
        let command = parser::parse_command(line)?;
        let before = command.is_undoable().then(|| self.model.snapshot());

        let result = self.dispatch(command)?;

        if let Some(before) = before {
            self.undo_stack.push(before);
        }
        self.history.push(line.trim().to_string());
        Ok(result)
    }

    fn dispatch(&mut self, command: Command) -> Result<CmdResult> {
        debug!(?command, "dispatch");
        let model = &mut self.model;
        match command {
            Command::AddPerson(person) => commands::add::person(model, person),
            Command::AddLesson(lesson) => commands::add::lesson(model, lesson),
            Command::Edit { index, fields } => commands::edit::run(model, index, &fields),
            Command::Delete(index) => commands::delete::run(model, index),
            Command::Find { field, keywords } => commands::find::run(model, field, &keywords),
            Command::View(index) => commands::view::run(model, index),
            Command::Select(index) => commands::select::run(model, index),
            Command::List(target) => Ok(commands::list::run(model, target)),
            Command::Sort => Ok(commands::sort::run(model)),
            Command::Bookmark(index) => commands::bookmark::run(model, index),
            Command::History => Ok(commands::history::run(&self.history)),
            Command::Undo => commands::undo::undo(model, &mut self.undo_stack),
            Command::Redo => commands::undo::redo(model, &mut self.undo_stack),
            Command::Clear => commands::clear::run(model),
            Command::Exit => Ok(CmdResult::default()
                .with_message(CmdMessage::info(MESSAGE_EXIT))
                .with_update(UiUpdate::Exit)),
            Command::Customise {
                font_size,
                highlight,
            } => {
                let mut prefs = self.prefs.clone();
                let result = commands::customise::run(&mut prefs, font_size, highlight);
                if let Some(dir) = &self.prefs_dir {
                    prefs.save(dir)?;
                }
                self.prefs = prefs;
                Ok(result)
            }
            Command::Help(keyword) => Ok(commands::help::run(keyword)),
        }
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
