//! # Predicates
//!
//! A predicate is a pure test over one record. Each variant is closed over the
//! parameter it was built with and never changes afterwards, so a predicate
//! can be re-applied to the store any number of times.
//!
//! Uniqueness predicates are the only ones that look at the whole store, and
//! they do so once, at construction: a linear scan keeps the first record seen
//! for each key, and `test` is then plain set membership.

use crate::model::{Address, Code, Email, Lesson, Location, Person, Phone};
use std::collections::HashSet;
use std::hash::Hash;

/// A person field that keyword search and de-duplication can work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonField {
    Name,
    Phone,
    Email,
    Address,
}

impl PersonField {
    fn key(self, person: &Person) -> &str {
        match self {
            PersonField::Name => person.name.as_str(),
            PersonField::Phone => person.phone.as_str(),
            PersonField::Email => person.email.as_str(),
            PersonField::Address => person.address.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonPredicate {
    All,
    /// Any keyword equals a word of the name, ignoring case.
    NameContainsKeywords(Vec<String>),
    /// Any keyword is a substring of the phone number.
    PhoneContainsKeywords(Vec<String>),
    EmailContainsKeywords(Vec<String>),
    AddressContainsKeywords(Vec<String>),
    FixedAddress(Address),
    FixedEmail(Email),
    FixedPhone(Phone),
    ShowSpecified(Person),
    Unique {
        field: PersonField,
        firsts: HashSet<Person>,
    },
}

impl PersonPredicate {
    pub fn unique_by(field: PersonField, all: &[Person]) -> Self {
        PersonPredicate::Unique {
            field,
            firsts: first_per_key(all, |p| field.key(p).to_string()),
        }
    }

    pub fn test(&self, person: &Person) -> bool {
        match self {
            PersonPredicate::All => true,
            PersonPredicate::NameContainsKeywords(keywords) => keywords.iter().any(|kw| {
                let kw = kw.to_lowercase();
                person
                    .name
                    .as_str()
                    .split_whitespace()
                    .any(|word| word.to_lowercase() == kw)
            }),
            PersonPredicate::PhoneContainsKeywords(keywords) => {
                contains_any(person.phone.as_str(), keywords)
            }
            PersonPredicate::EmailContainsKeywords(keywords) => {
                contains_any(person.email.as_str(), keywords)
            }
            PersonPredicate::AddressContainsKeywords(keywords) => {
                contains_any(person.address.as_str(), keywords)
            }
            PersonPredicate::FixedAddress(address) => &person.address == address,
            PersonPredicate::FixedEmail(email) => &person.email == email,
            PersonPredicate::FixedPhone(phone) => &person.phone == phone,
            PersonPredicate::ShowSpecified(target) => person == target,
            PersonPredicate::Unique { firsts, .. } => firsts.contains(person),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonPredicate {
    All,
    /// Any keyword is a case-insensitive substring of the module code.
    CodeContainsKeywords(Vec<String>),
    FixedCode(Code),
    FixedLocation(Location),
    UniqueCode(HashSet<Lesson>),
    UniqueLocation(HashSet<Lesson>),
    ShowSpecified(Lesson),
    Favourites(HashSet<Lesson>),
}

impl LessonPredicate {
    pub fn unique_code(all: &[Lesson]) -> Self {
        LessonPredicate::UniqueCode(first_per_key(all, |l| l.code.clone()))
    }

    pub fn unique_location(all: &[Lesson]) -> Self {
        LessonPredicate::UniqueLocation(first_per_key(all, |l| l.location.clone()))
    }

    pub fn test(&self, lesson: &Lesson) -> bool {
        match self {
            LessonPredicate::All => true,
            LessonPredicate::CodeContainsKeywords(keywords) => {
                let code = lesson.code.as_str().to_lowercase();
                keywords.iter().any(|kw| code.contains(&kw.to_lowercase()))
            }
            LessonPredicate::FixedCode(code) => &lesson.code == code,
            LessonPredicate::FixedLocation(location) => &lesson.location == location,
            LessonPredicate::UniqueCode(firsts)
            | LessonPredicate::UniqueLocation(firsts)
            | LessonPredicate::Favourites(firsts) => firsts.contains(lesson),
            LessonPredicate::ShowSpecified(target) => lesson == target,
        }
    }
}

fn contains_any(value: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| value.contains(kw.as_str()))
}

/// Keeps the first record seen for every distinct key.
fn first_per_key<T, K, F>(records: &[T], key: F) -> HashSet<T>
where
    T: Clone + Eq + Hash,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|&r| seen.insert(key(r)))
        .cloned()
        .collect()
}
