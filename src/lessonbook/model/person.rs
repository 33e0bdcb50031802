use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w.+-]+@[\w.-]+$").unwrap());
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").unwrap());

text_field!(
    /// A person's name: alphanumeric words separated by spaces.
    Name,
    "name",
    |s| NAME_RE.is_match(s),
    "Person names should only contain alphanumeric characters and spaces, and it should not be blank"
);

text_field!(
    Phone,
    "phone",
    |s| PHONE_RE.is_match(s),
    "Phone numbers can only contain numbers, and should be at least 3 digits long"
);

text_field!(
    /// `local@domain`, where both parts are non-empty.
    Email,
    "email",
    |s| EMAIL_RE.is_match(s),
    "Person emails should be 2 alphanumeric/period strings separated by '@'"
);

text_field!(
    Address,
    "address",
    |s| s.chars().next().is_some_and(|c| !c.is_whitespace()),
    "Person addresses can take any values, and it should not be blank"
);

text_field!(
    Tag,
    "tag",
    |s| TAG_RE.is_match(s),
    "Tags names should be alphanumeric"
);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {} Tags: ",
            self.name, self.phone, self.email, self.address
        )?;
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
