//! # Model Manager
//!
//! Owns everything the commands read and write:
//!
//! - the backing [`AddressBook`] and the [`DataStore`] it is persisted to
//! - one active predicate per record kind, and the visible lists they produce
//! - the favourites set
//! - the [`ListingContext`]
//!
//! ## Invariants
//!
//! - The visible lists are always exactly the records of the book that pass
//!   the active predicates, in book order. They are recomputed synchronously
//!   after every predicate change and every mutation.
//! - A mutation is committed only after the store accepted it. If `save`
//!   fails, the in-memory book is left as it was.
//! - A one-person-per-value view is rebuilt from the book after every
//!   mutation, so it never holds records that are gone.
//! - While a lesson unit is active, every mutation re-runs the listing-unit
//!   refilter, unless the lesson view is the full list or the favourites.

use crate::error::{AppError, Result};
use crate::listing::{refilter_lessons, ListingContext, ListingUnit};
use crate::model::{AddressBook, Lesson, Person, RecordKind};
use crate::predicates::{LessonPredicate, PersonPredicate};
use crate::store::DataStore;
use std::collections::HashSet;
use tracing::{debug, info};

pub const MESSAGE_DUPLICATE_FAVOURITE: &str = "This lesson is already in the favourite list";

/// State restored by undo and redo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    book: AddressBook,
    favourites: HashSet<Lesson>,
}

pub struct ModelManager<S: DataStore> {
    store: S,
    book: AddressBook,
    person_filter: PersonPredicate,
    lesson_filter: LessonPredicate,
    visible_persons: Vec<Person>,
    visible_lessons: Vec<Lesson>,
    favourites: HashSet<Lesson>,
    listing: ListingContext,
}

impl<S: DataStore> ModelManager<S> {
    /// Loads the book from `store` and lists one lesson per module.
    pub fn open(store: S) -> Result<Self> {
        let book = store.load()?;
        debug!(
            persons = book.persons().len(),
            lessons = book.lessons().len(),
            "initializing model"
        );
        let lesson_filter = LessonPredicate::unique_code(book.lessons());
        let mut manager = Self {
            store,
            book,
            person_filter: PersonPredicate::All,
            lesson_filter,
            visible_persons: Vec::new(),
            visible_lessons: Vec::new(),
            favourites: HashSet::new(),
            listing: ListingContext::default(),
        };
        manager.refresh();
        Ok(manager)
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn listing(&self) -> ListingContext {
        self.listing
    }

    pub fn visible_persons(&self) -> &[Person] {
        &self.visible_persons
    }

    pub fn visible_lessons(&self) -> &[Lesson] {
        &self.visible_lessons
    }

    pub fn person_filter(&self) -> &PersonPredicate {
        &self.person_filter
    }

    pub fn lesson_filter(&self) -> &LessonPredicate {
        &self.lesson_filter
    }

    pub fn favourites(&self) -> &HashSet<Lesson> {
        &self.favourites
    }

    /// The kind of record the current listing unit shows.
    pub fn active_kind(&self) -> RecordKind {
        self.listing.current().record_kind()
    }

    /// Length of the list the user is currently looking at.
    pub fn active_len(&self) -> usize {
        match self.active_kind() {
            RecordKind::Person => self.visible_persons.len(),
            RecordKind::Lesson => self.visible_lessons.len(),
        }
    }

    // --- Filtering ---

    pub fn update_person_filter(&mut self, predicate: PersonPredicate) {
        debug!(?predicate, "person filter");
        self.person_filter = predicate;
        self.refresh();
    }

    pub fn update_lesson_filter(&mut self, predicate: LessonPredicate) {
        debug!(?predicate, "lesson filter");
        self.lesson_filter = predicate;
        self.refresh();
    }

    pub fn favourites_predicate(&self) -> LessonPredicate {
        LessonPredicate::Favourites(self.favourites.clone())
    }

    pub fn switch_unit(&mut self, unit: ListingUnit) {
        self.listing.switch_to(unit);
        info!(
            current = %self.listing.current(),
            previous = %self.listing.previous(),
            "listing unit changed"
        );
    }

    /// Recomputes the lesson view for the current listing unit.
    ///
    /// See [`refilter_lessons`]: module and location units rebuild their
    /// uniqueness predicate from the whole store, other units follow the first
    /// visible lesson, and an empty view is left alone.
    pub fn handle_listing_unit(&mut self) {
        if let Some(predicate) =
            refilter_lessons(self.book.lessons(), &self.visible_lessons, &self.listing)
        {
            self.update_lesson_filter(predicate);
        }
    }

    // --- Mutations ---

    pub fn add_person(&mut self, person: Person) -> Result<()> {
        let mut book = self.book.clone();
        book.add_person(person)?;
        self.commit(book)
    }

    pub fn delete_person(&mut self, target: &Person) -> Result<()> {
        let mut book = self.book.clone();
        book.remove_person(target)?;
        self.commit(book)
    }

    pub fn update_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        let mut book = self.book.clone();
        book.update_person(target, edited.clone())?;
        self.commit(book)?;
        if matches!(&self.person_filter, PersonPredicate::ShowSpecified(shown) if shown == target) {
            self.update_person_filter(PersonPredicate::ShowSpecified(edited));
        }
        Ok(())
    }

    pub fn add_lesson(&mut self, lesson: Lesson) -> Result<()> {
        let mut book = self.book.clone();
        book.add_lesson(lesson)?;
        self.commit(book)
    }

    pub fn delete_lesson(&mut self, target: &Lesson) -> Result<()> {
        let mut book = self.book.clone();
        book.remove_lesson(target)?;
        self.commit(book)?;
        if self.favourites.remove(target) {
            self.sync_favourites_view();
        }
        Ok(())
    }

    pub fn update_lesson(&mut self, target: &Lesson, edited: Lesson) -> Result<()> {
        let mut book = self.book.clone();
        book.update_lesson(target, edited.clone())?;
        self.commit(book)?;
        if self.favourites.remove(target) {
            self.favourites.insert(edited);
            self.sync_favourites_view();
        }
        Ok(())
    }

    /// Marks a lesson as a favourite. The book itself is not touched.
    pub fn bookmark_lesson(&mut self, lesson: &Lesson) -> Result<()> {
        if !self.book.lessons().contains(lesson) {
            return Err(AppError::NotFound(
                crate::model::book::MESSAGE_MISSING_LESSON.into(),
            ));
        }
        if !self.favourites.insert(lesson.clone()) {
            return Err(AppError::Duplicate(MESSAGE_DUPLICATE_FAVOURITE.into()));
        }
        info!(%lesson, "bookmarked lesson");
        self.sync_favourites_view();
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        self.commit(AddressBook::new())?;
        self.favourites.clear();
        self.sync_favourites_view();
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            book: self.book.clone(),
            favourites: self.favourites.clone(),
        }
    }

    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        self.commit(snapshot.book)?;
        self.favourites = snapshot.favourites;
        self.sync_favourites_view();
        Ok(())
    }

    // --- Internals ---

    fn commit(&mut self, book: AddressBook) -> Result<()> {
        self.store.save(&book)?;
        self.book = book;
        info!(
            persons = self.book.persons().len(),
            lessons = self.book.lessons().len(),
            "address book changed"
        );
        if let PersonPredicate::Unique { field, .. } = self.person_filter {
            self.person_filter = PersonPredicate::unique_by(field, self.book.persons());
        }
        self.refresh();
        if self.active_kind() == RecordKind::Lesson
            && !matches!(
                self.lesson_filter,
                LessonPredicate::All | LessonPredicate::Favourites(_)
            )
        {
            self.handle_listing_unit();
        }
        Ok(())
    }

    /// Keeps a favourites view in step with the favourites set.
    fn sync_favourites_view(&mut self) {
        if matches!(self.lesson_filter, LessonPredicate::Favourites(_)) {
            self.update_lesson_filter(self.favourites_predicate());
        }
    }

    fn refresh(&mut self) {
        self.visible_persons = self
            .book
            .persons()
            .iter()
            .filter(|p| self.person_filter.test(p))
            .cloned()
            .collect();
        self.visible_lessons = self
            .book
            .lessons()
            .iter()
            .filter(|l| self.lesson_filter.test(l))
            .cloned()
            .collect();
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::book::fixtures::typical_book;
    use crate::store::memory::InMemoryStore;

    /// Builds a manager over an in-memory store.
    pub struct ModelFixture {
        book: AddressBook,
        unit: Option<ListingUnit>,
    }

    impl Default for ModelFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl ModelFixture {
        pub fn new() -> Self {
            Self {
                book: AddressBook::new(),
                unit: None,
            }
        }

        pub fn typical() -> Self {
            Self {
                book: typical_book(),
                unit: None,
            }
        }

        pub fn with_person(mut self, person: Person) -> Self {
            self.book.add_person(person).unwrap();
            self
        }

        pub fn with_lesson(mut self, lesson: Lesson) -> Self {
            self.book.add_lesson(lesson).unwrap();
            self
        }

        /// Switches to `unit` after opening, showing every record of its kind.
        pub fn listing(mut self, unit: ListingUnit) -> Self {
            self.unit = Some(unit);
            self
        }

        pub fn build(self) -> ModelManager<InMemoryStore> {
            let mut model = ModelManager::open(InMemoryStore::with_book(self.book)).unwrap();
            if let Some(unit) = self.unit {
                model.switch_unit(unit);
                match unit {
                    ListingUnit::Module | ListingUnit::Location => model.handle_listing_unit(),
                    ListingUnit::Lesson => model.update_lesson_filter(LessonPredicate::All),
                    _ => model.update_person_filter(PersonPredicate::All),
                }
            }
            model
        }
    }
}
