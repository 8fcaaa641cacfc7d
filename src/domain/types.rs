//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive page numbers) so
//! that once a value reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided page number is zero.
    #[error("page must be greater than zero")]
    NonPositivePage,
    /// Provided string is not a decimal integer.
    #[error("invalid page number: {0}")]
    InvalidPage(String),
}

/// One-based page number requested from the news API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page of any result set.
    pub const FIRST: Self = Self(1);

    /// Creates a page number ensuring it is greater than zero.
    pub fn new(value: u32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositivePage)
        }
    }

    /// Returns the raw `u32` backing this page number.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the page number widened for pagination arithmetic.
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl Display for PageNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageNumber {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Negative input is reported as non-positive rather than malformed.
        let negative = s
            .strip_prefix('-')
            .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()));
        if negative {
            return Err(TypeConstraintError::NonPositivePage);
        }

        let value = s
            .parse::<u32>()
            .map_err(|_| TypeConstraintError::InvalidPage(s.to_string()))?;
        Self::new(value)
    }
}
