use crate::error::{AppError, Result};
use chrono::{NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]{2,3}[0-9]{4}[A-Z]?$").unwrap());
static SLOT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+)\[([0-9]{4})-([0-9]{4})\]$").unwrap());

text_field!(
    /// Module code such as `CS2103T`.
    Code,
    "module code",
    |s| CODE_RE.is_match(s),
    "Module code should be 2-3 uppercase letters, then 4 digits, then an optional letter"
);

impl Code {
    /// Upper-cases user input before validating it.
    pub fn parse(input: &str) -> Result<Self> {
        Self::new(input.trim().to_uppercase())
    }
}

text_field!(
    Location,
    "location",
    |s| s.chars().next().is_some_and(|c| !c.is_whitespace()),
    "Location can take any values, and it should not be blank"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClassType {
    Lec,
    Tut,
    Lab,
}

impl ClassType {
    pub const FIELD: &'static str = "class type";
}

impl FromStr for ClassType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lec" => Ok(ClassType::Lec),
            "tut" => Ok(ClassType::Tut),
            "lab" => Ok(ClassType::Lab),
            _ => Err(AppError::validation(
                Self::FIELD,
                "Class type should only be LEC, TUT or LAB",
            )),
        }
    }
}

impl fmt::Display for ClassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassType::Lec => write!(f, "LEC"),
            ClassType::Tut => write!(f, "TUT"),
            ClassType::Lab => write!(f, "LAB"),
        }
    }
}

/// Tutorial or lecture group number, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Group(u32);

impl Group {
    pub const FIELD: &'static str = "group";

    pub fn new(value: u32) -> Result<Self> {
        if value == 0 {
            return Err(AppError::validation(
                Self::FIELD,
                "Group number should be a positive integer",
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl FromStr for Group {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<u32>().map_err(|_| {
            AppError::validation(Self::FIELD, "Group number should be a positive integer")
        })?;
        Self::new(value)
    }
}

impl TryFrom<u32> for Group {
    type Error = AppError;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Group> for u32 {
    fn from(group: Group) -> u32 {
        group.0
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A weekly slot written as `DAY[HHMM-HHMM]`, e.g. `FRI[1400-1600]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    pub day: Weekday,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub const FIELD: &'static str = "time slot";

    fn invalid() -> AppError {
        AppError::validation(
            Self::FIELD,
            "Time slot should look like FRI[1400-1600], with the start before the end",
        )
    }
}

impl FromStr for TimeSlot {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = SLOT_RE.captures(s.trim()).ok_or_else(Self::invalid)?;
        let day = caps[1].parse::<Weekday>().map_err(|_| Self::invalid())?;
        let start = NaiveTime::parse_from_str(&caps[2], "%H%M").map_err(|_| Self::invalid())?;
        let end = NaiveTime::parse_from_str(&caps[3], "%H%M").map_err(|_| Self::invalid())?;
        if start >= end {
            return Err(Self::invalid());
        }
        Ok(Self { day, start, end })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}-{}]",
            self.day.to_string().to_uppercase(),
            self.start.format("%H%M"),
            self.end.format("%H%M")
        )
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> String {
        slot.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lesson {
    pub code: Code,
    pub class_type: ClassType,
    pub location: Location,
    pub group: Group,
    pub time_slot: TimeSlot,
}

impl Lesson {
    pub fn new(
        code: Code,
        class_type: ClassType,
        location: Location,
        group: Group,
        time_slot: TimeSlot,
    ) -> Self {
        Self {
            code,
            class_type,
            location,
            group,
            time_slot,
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} Group: {} Location: {} Time: {}",
            self.code, self.class_type, self.group, self.location, self.time_slot
        )
    }
}
