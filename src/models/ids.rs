//! Strongly-typed expense identifier
//!
//! Ids are small positive integers handed out by the ledger. The newtype keeps
//! them from being mixed up with counts and indexes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a single expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// The first id a fresh ledger hands out
    pub const FIRST: ExpenseId = ExpenseId(1);

    /// Create an id from its raw value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw value
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// The id following this one, or `None` once ids run out
    pub const fn checked_next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ExpenseId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "#12" as well as "12"
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        Ok(Self(s.parse()?))
    }
}
