//! # Display Indexes
//!
//! Users refer to records by their position in the list they are looking at,
//! counting from 1. A [`DisplayIndex`] is only ever that: it says nothing about
//! whether the position exists. Resolution against the visible list happens
//! at execution time, when an out-of-range index becomes an `Index` error.

use std::num::NonZeroUsize;
use std::str::FromStr;

/// A 1-based position in the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(NonZeroUsize);

impl DisplayIndex {
    pub fn from_one_based(n: usize) -> Option<Self> {
        NonZeroUsize::new(n).map(Self)
    }

    pub fn one_based(&self) -> usize {
        self.0.get()
    }

    pub fn zero_based(&self) -> usize {
        self.0.get() - 1
    }

    /// Looks the index up in `items`.
    pub fn get<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.zero_based())
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<NonZeroUsize>()
            .map(DisplayIndex)
            .map_err(|_| format!("Invalid index format: {}", s))
    }
}
