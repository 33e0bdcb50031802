//! # Command Layer
//!
//! One module per user-facing action. Every command is a plain function taking
//! the model (and whatever else it needs) and returning `Result<CmdResult>`.
//!
//! A [`CmdResult`] is everything the presentation layer needs to know about an
//! outcome: the messages to show and the [`UiUpdate`]s to apply. Commands never
//! reach into the UI themselves.
//!
//! [`Command`] is the typed, immutable form of one input line, as produced by
//! the parser. Dispatch lives in `api.rs`.

use crate::config::FontSize;
use crate::index::DisplayIndex;
use crate::listing::ListingUnit;
use crate::model::{
    Address, ClassType, Code, Email, Group, Lesson, Location, Name, Person, Phone, Tag, TimeSlot,
};
use std::collections::BTreeSet;

pub mod add;
pub mod bookmark;
pub mod clear;
pub mod customise;
pub mod delete;
pub mod edit;
pub mod find;
pub mod helpers;
pub mod help;
pub mod history;
pub mod list;
pub mod select;
pub mod sort;
pub mod undo;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

/// A change the presentation layer should apply after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiUpdate {
    /// The record store changed; re-render the lists.
    ModelChanged,
    ListingUnitChanged(ListingUnit),
    FontSizeChanged(FontSize),
    HighlightToggled(bool),
    /// Re-list the visible records in sorted order.
    SortRequested(ListingUnit),
    /// Scroll to and highlight this row of the visible list.
    SelectionChanged(DisplayIndex),
    Exit,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    pub updates: Vec<UiUpdate>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_update(mut self, update: UiUpdate) -> Self {
        self.updates.push(update);
        self
    }

    pub fn has_update(&self, update: UiUpdate) -> bool {
        self.updates.contains(&update)
    }
}

/// Which field a `find` searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindField {
    Name,
    Phone,
    Email,
    Address,
    Module,
}

/// What a `list` switches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTarget {
    Unit(ListingUnit),
    /// The favourite lessons.
    Marked,
}

/// Field values supplied to `edit`. Only the `Some` fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditFields {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// `Some(empty)` clears every tag.
    pub tags: Option<BTreeSet<Tag>>,
    pub code: Option<Code>,
    pub class_type: Option<ClassType>,
    pub location: Option<Location>,
    pub group: Option<Group>,
    pub time_slot: Option<TimeSlot>,
}

impl EditFields {
    pub fn has_person_fields(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    pub fn has_lesson_fields(&self) -> bool {
        self.code.is_some()
            || self.class_type.is_some()
            || self.location.is_some()
            || self.group.is_some()
            || self.time_slot.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_person_fields() && !self.has_lesson_fields()
    }
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddPerson(Person),
    AddLesson(Lesson),
    Edit {
        index: DisplayIndex,
        fields: EditFields,
    },
    Delete(DisplayIndex),
    Find {
        field: FindField,
        keywords: Vec<String>,
    },
    View(DisplayIndex),
    Select(DisplayIndex),
    List(ListTarget),
    Sort,
    Bookmark(DisplayIndex),
    History,
    Undo,
    Redo,
    Clear,
    Exit,
    Customise {
        font_size: Option<FontSize>,
        highlight: Option<bool>,
    },
    /// `None` for the overview, otherwise the keyword to explain.
    Help(Option<&'static str>),
}

impl Command {
    /// Commands whose effect `undo` can revert.
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Command::AddPerson(_)
                | Command::AddLesson(_)
                | Command::Edit { .. }
                | Command::Delete(_)
                | Command::Clear
                | Command::Bookmark(_)
        )
    }
}
