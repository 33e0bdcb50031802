use super::{Lesson, Person};
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};

pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book";
pub const MESSAGE_DUPLICATE_LESSON: &str = "This lesson already exists in the address book";
pub const MESSAGE_MISSING_PERSON: &str = "The target person cannot be missing";
pub const MESSAGE_MISSING_LESSON: &str = "The target lesson cannot be missing";

/// The backing record store. Insertion order is the display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    #[serde(default)]
    persons: Vec<Person>,
    #[serde(default)]
    lessons: Vec<Lesson>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty() && self.lessons.is_empty()
    }

    pub fn add_person(&mut self, person: Person) -> Result<()> {
        if self.persons.contains(&person) {
            return Err(AppError::Duplicate(MESSAGE_DUPLICATE_PERSON.into()));
        }
        self.persons.push(person);
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> Result<Person> {
        let pos = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| AppError::NotFound(MESSAGE_MISSING_PERSON.into()))?;
        Ok(self.persons.remove(pos))
    }

    /// Replaces `target` in place, keeping its position.
    pub fn update_person(&mut self, target: &Person, edited: Person) -> Result<()> {
        let pos = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| AppError::NotFound(MESSAGE_MISSING_PERSON.into()))?;
        if target != &edited && self.persons.contains(&edited) {
            return Err(AppError::Duplicate(MESSAGE_DUPLICATE_PERSON.into()));
        }
        self.persons[pos] = edited;
        Ok(())
    }

    pub fn add_lesson(&mut self, lesson: Lesson) -> Result<()> {
        if self.lessons.contains(&lesson) {
            return Err(AppError::Duplicate(MESSAGE_DUPLICATE_LESSON.into()));
        }
        self.lessons.push(lesson);
        Ok(())
    }

    pub fn remove_lesson(&mut self, target: &Lesson) -> Result<Lesson> {
        let pos = self
            .lessons
            .iter()
            .position(|l| l == target)
            .ok_or_else(|| AppError::NotFound(MESSAGE_MISSING_LESSON.into()))?;
        Ok(self.lessons.remove(pos))
    }

    pub fn update_lesson(&mut self, target: &Lesson, edited: Lesson) -> Result<()> {
        let pos = self
            .lessons
            .iter()
            .position(|l| l == target)
            .ok_or_else(|| AppError::NotFound(MESSAGE_MISSING_LESSON.into()))?;
        if target != &edited && self.lessons.contains(&edited) {
            return Err(AppError::Duplicate(MESSAGE_DUPLICATE_LESSON.into()));
        }
        self.lessons[pos] = edited;
        Ok(())
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    //! Sample records shared by unit tests across the crate.

    use super::*;
    use crate::model::{Address, ClassType, Code, Email, Group, Location, Name, Phone, Tag};

    pub fn person(name: &str, phone: &str, email: &str, address: &str) -> Person {
        Person::new(
            Name::new(name).unwrap(),
            Phone::new(phone).unwrap(),
            Email::new(email).unwrap(),
            Address::new(address).unwrap(),
            Default::default(),
        )
    }

    pub fn tagged(mut person: Person, tags: &[&str]) -> Person {
        person.tags = tags.iter().map(|t| Tag::new(*t).unwrap()).collect();
        person
    }

    pub fn lesson(code: &str, location: &str, group: u32, slot: &str) -> Lesson {
        Lesson::new(
            Code::parse(code).unwrap(),
            ClassType::Tut,
            Location::new(location).unwrap(),
            Group::new(group).unwrap(),
            slot.parse().unwrap(),
        )
    }

    pub fn alice() -> Person {
        tagged(
            person("Alice Pauline", "94351253", "alice@example.com", "123, Jurong West Ave 6"),
            &["friends"],
        )
    }

    pub fn benson() -> Person {
        person("Benson Meier", "98765432", "johnd@example.com", "311, Clementi Ave 2")
    }

    pub fn carl() -> Person {
        person("Carl Kurz", "95352563", "heinz@example.com", "wall street")
    }

    pub fn daniel() -> Person {
        person("Daniel Meier", "87652533", "cornelia@example.com", "wall street")
    }

    /// Two CS1010 lessons, one CS2010 lesson, spread over two locations.
    pub fn typical_lessons() -> Vec<Lesson> {
        vec![
            lesson("CS1010", "COM1-0201", 1, "MON[0800-1000]"),
            lesson("CS1010", "LT19", 2, "TUE[1000-1200]"),
            lesson("CS2010", "COM1-0201", 1, "WED[1400-1600]"),
        ]
    }

    pub fn typical_book() -> AddressBook {
        let mut book = AddressBook::new();
        for p in [alice(), benson(), carl(), daniel()] {
            book.add_person(p).unwrap();
        }
        for l in typical_lessons() {
            book.add_lesson(l).unwrap();
        }
        book
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn rejects_duplicate_person() {
        let mut book = AddressBook::new();
        book.add_person(alice()).unwrap();
        assert!(matches!(
            book.add_person(alice()),
            Err(AppError::Duplicate(_))
        ));
    }

    #[test]
    fn add_then_remove_restores_content() {
        let before = typical_book();
        let mut book = before.clone();
        let extra = person("Elle Meyer", "9482224", "werner@example.com", "michegan ave");
        book.add_person(extra.clone()).unwrap();
        book.remove_person(&extra).unwrap();
        assert_eq!(book, before);

        let extra_lesson = lesson("MA1101R", "LT27", 3, "FRI[1400-1600]");
        book.add_lesson(extra_lesson.clone()).unwrap();
        book.remove_lesson(&extra_lesson).unwrap();
        assert_eq!(book, before);
    }

    #[test]
    fn remove_missing_is_not_found() {
        let mut book = AddressBook::new();
        assert!(matches!(
            book.remove_person(&alice()),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            book.remove_lesson(&typical_lessons()[0]),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn update_keeps_position_and_checks_duplicates() {
        let mut book = typical_book();
        let edited = tagged(benson(), &["owes"]);
        book.update_person(&benson(), edited.clone()).unwrap();
        assert_eq!(book.persons()[1], edited);

        assert!(matches!(
            book.update_person(&edited, alice()),
            Err(AppError::Duplicate(_))
        ));
        // Editing a record into itself is allowed.
        book.update_person(&alice(), alice()).unwrap();
    }

    #[test]
    fn serializes_and_reloads() {
        let book = typical_book();
        let json = serde_json::to_string(&book).unwrap();
        let loaded: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, book);

        let empty: AddressBook = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }
}
