//! Splits the arguments of a command line into a preamble and `prefix/value`
//! pairs.
//!
//! A prefix only counts when it starts the argument string or follows
//! whitespace, so `ct/` is never mistaken for `t/`, and a `/` inside a value
//! such as `a/Blk 5 Unit 07/12` is left alone.

use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Name,
    Phone,
    Email,
    Address,
    Tag,
    Code,
    ClassType,
    Location,
    Group,
    TimeSlot,
    FontSize,
    Highlight,
}

impl Prefix {
    pub const PERSON: &'static [Prefix] = &[
        Prefix::Name,
        Prefix::Phone,
        Prefix::Email,
        Prefix::Address,
        Prefix::Tag,
    ];

    pub const LESSON: &'static [Prefix] = &[
        Prefix::Code,
        Prefix::ClassType,
        Prefix::Location,
        Prefix::Group,
        Prefix::TimeSlot,
    ];

    pub const PREFERENCES: &'static [Prefix] = &[Prefix::FontSize, Prefix::Highlight];

    pub fn token(self) -> &'static str {
        match self {
            Prefix::Name => "n/",
            Prefix::Phone => "p/",
            Prefix::Email => "e/",
            Prefix::Address => "a/",
            Prefix::Tag => "t/",
            Prefix::Code => "m/",
            Prefix::ClassType => "ct/",
            Prefix::Location => "l/",
            Prefix::Group => "g/",
            Prefix::TimeSlot => "ts/",
            Prefix::FontSize => "fs/",
            Prefix::Highlight => "hl/",
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Values of each prefix, in the order they were given.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Trimmed text before the first prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True if any of `prefixes` was given.
    pub fn any_of(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().any(|p| self.contains(*p))
    }

    /// True if every one of `prefixes` was given.
    pub fn all_of(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().all(|p| self.contains(*p))
    }
}

/// Tokenizes `args`, recognising only the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut starts: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|&prefix| {
            args.match_indices(prefix.token())
                .filter(|(i, _)| {
                    args[..*i]
                        .chars()
                        .next_back()
                        .map_or(true, char::is_whitespace)
                })
                .map(move |(i, _)| (i, prefix))
        })
        .collect();
    starts.sort_by_key(|(i, _)| *i);

    let preamble_end = starts.first().map_or(args.len(), |(i, _)| *i);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (n, &(start, prefix)) in starts.iter().enumerate() {
        let value_start = start + prefix.token().len();
        let value_end = starts.get(n + 1).map_or(args.len(), |(i, _)| *i);
        map.values
            .entry(prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Prefix] = &[
        Prefix::Name,
        Prefix::Phone,
        Prefix::Address,
        Prefix::Tag,
        Prefix::ClassType,
    ];

    #[test]
    fn splits_preamble_and_values() {
        let map = tokenize(" 3 n/Alice Pauline p/123 ", ALL);
        assert_eq!(map.preamble(), "3");
        assert_eq!(map.value(Prefix::Name), Some("Alice Pauline"));
        assert_eq!(map.value(Prefix::Phone), Some("123"));
        assert!(!map.contains(Prefix::Address));
    }

    #[test]
    fn prefix_must_follow_whitespace() {
        let map = tokenize("a/Blk 5 Unit 07/12 ct/tut", ALL);
        assert_eq!(map.value(Prefix::Address), Some("Blk 5 Unit 07/12"));
        assert_eq!(map.value(Prefix::ClassType), Some("tut"));
        assert!(!map.contains(Prefix::Tag));

        let map = tokenize("n/Ann/p/1", ALL);
        assert_eq!(map.value(Prefix::Name), Some("Ann/p/1"));
    }

    #[test]
    fn repeated_prefixes_keep_every_value() {
        let map = tokenize("n/A n/B t/x t/y", ALL);
        assert_eq!(map.value(Prefix::Name), Some("B"));
        assert_eq!(map.all_values(Prefix::Tag), &["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn empty_value_is_kept() {
        let map = tokenize("1 t/", ALL);
        assert_eq!(map.all_values(Prefix::Tag), &[String::new()]);
    }
}
