//! # Records
//!
//! Two kinds of records live in the [`AddressBook`]: [`Person`]s and
//! [`Lesson`]s. Both are plain values. Every field is a validated newtype, so
//! a record that exists is a record that passed validation, whether it came
//! from the parser or from `addressbook.json`.

/// Declares a validated string newtype that round-trips through serde as a
/// plain string and re-validates on load.
macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, $field:literal, $check:expr, $message:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const FIELD: &'static str = $field;

            pub fn new(value: impl Into<String>) -> $crate::error::Result<Self> {
                let value = value.into();
                let check: fn(&str) -> bool = $check;
                if check(&value) {
                    Ok(Self(value))
                } else {
                    Err($crate::error::AppError::validation($field, $message))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::error::AppError;

            fn try_from(value: String) -> $crate::error::Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }
    };
}

pub mod book;
pub mod lesson;
pub mod person;

pub use book::AddressBook;
pub use lesson::{ClassType, Code, Group, Lesson, Location, TimeSlot};
pub use person::{Address, Email, Name, Person, Phone, Tag};

/// Which kind of record a list, index, or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Person,
    Lesson,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Person => write!(f, "person"),
            RecordKind::Lesson => write!(f, "lesson"),
        }
    }
}
