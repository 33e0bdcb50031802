//! # Listing Units
//!
//! The listing unit decides which records the user is looking at and at what
//! granularity: one row per person, one row per module, one row per location,
//! and so on. It also decides how the lesson view is recomputed after a
//! mutation.
//!
//! The current and previous unit travel together as a [`ListingContext`]. The
//! model manager owns one; [`refilter_lessons`] reads one. Nothing here is
//! global.

use crate::error::AppError;
use crate::model::{Lesson, RecordKind};
use crate::predicates::LessonPredicate;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingUnit {
    Person,
    Module,
    Location,
    Lesson,
    Address,
    Email,
    Phone,
}

impl ListingUnit {
    /// The kind of record shown while this unit is active.
    pub fn record_kind(self) -> RecordKind {
        match self {
            ListingUnit::Person | ListingUnit::Address | ListingUnit::Email | ListingUnit::Phone => {
                RecordKind::Person
            }
            ListingUnit::Module | ListingUnit::Location | ListingUnit::Lesson => {
                RecordKind::Lesson
            }
        }
    }
}

impl fmt::Display for ListingUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListingUnit::Person => "person",
            ListingUnit::Module => "module",
            ListingUnit::Location => "location",
            ListingUnit::Lesson => "lesson",
            ListingUnit::Address => "address",
            ListingUnit::Email => "email",
            ListingUnit::Phone => "phone",
        };
        f.write_str(name)
    }
}

impl FromStr for ListingUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "person" | "persons" => Ok(ListingUnit::Person),
            "module" | "modules" => Ok(ListingUnit::Module),
            "location" | "locations" => Ok(ListingUnit::Location),
            "lesson" | "lessons" => Ok(ListingUnit::Lesson),
            "address" => Ok(ListingUnit::Address),
            "email" => Ok(ListingUnit::Email),
            "phone" => Ok(ListingUnit::Phone),
            other => Err(AppError::validation(
                "listing unit",
                format!("Unknown listing unit: {}", other),
            )),
        }
    }
}

/// The active listing unit plus the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingContext {
    current: ListingUnit,
    previous: ListingUnit,
}

impl Default for ListingContext {
    /// A fresh session lists one row per module.
    fn default() -> Self {
        Self::new(ListingUnit::Module)
    }
}

impl ListingContext {
    pub fn new(unit: ListingUnit) -> Self {
        Self {
            current: unit,
            previous: unit,
        }
    }

    pub fn current(&self) -> ListingUnit {
        self.current
    }

    pub fn previous(&self) -> ListingUnit {
        self.previous
    }

    /// Makes `unit` current and remembers the unit it replaces.
    pub fn switch_to(&mut self, unit: ListingUnit) {
        self.previous = self.current;
        self.current = unit;
    }
}

/// Chooses the lesson predicate for the current listing unit.
///
/// - `Location`: one lesson per location, over the whole store.
/// - `Module`: one lesson per module code, over the whole store.
/// - anything else: every lesson sharing the code (if the previous unit was
///   `Module`) or the location (otherwise) of the first *visible* lesson.
///   Returns `None` when nothing is visible, leaving the view untouched.
pub fn refilter_lessons(
    all: &[Lesson],
    visible: &[Lesson],
    ctx: &ListingContext,
) -> Option<LessonPredicate> {
    match ctx.current() {
        ListingUnit::Location => Some(LessonPredicate::unique_location(all)),
        ListingUnit::Module => Some(LessonPredicate::unique_code(all)),
        _ => {
            let typical = visible.first()?;
            if ctx.previous() == ListingUnit::Module {
                Some(LessonPredicate::FixedCode(typical.code.clone()))
            } else {
                Some(LessonPredicate::FixedLocation(typical.location.clone()))
            }
        }
    }
}
