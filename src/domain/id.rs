//! Person record keys
//!
//! Keys are author-assigned in the record file (e.g. `I42`, `tudor-henry7`).
//! A key is 1-64 characters of ASCII letters, digits, `-`, `_` or `.`,
//! compared case-sensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Person key cannot be empty")]
    Empty,

    #[error("Person key too long (max 64 characters): '{0}'")]
    TooLong(String),

    #[error("Person key contains invalid character '{1}': '{0}'")]
    InvalidCharacter(String, char),
}

/// Key identifying a person record within a tree file
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(String);

impl PersonId {
    /// Creates a key, validating the allowed character set
    pub fn new(key: impl Into<String>) -> Result<Self, IdError> {
        let key = key.into();
        if key.is_empty() {
            return Err(IdError::Empty);
        }
        if key.len() > 64 {
            return Err(IdError::TooLong(key));
        }
        if let Some(bad) = key
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
        {
            return Err(IdError::InvalidCharacter(key, bad));
        }
        Ok(Self(key))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PersonId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for PersonId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}
