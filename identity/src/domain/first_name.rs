//! Given-name value object.

use std::fmt;

use outcome::Outcome;
use serde::{Deserialize, Serialize};

/// Minimum allowed length for a first name.
pub const FIRST_NAME_MIN: usize = 2;
/// Maximum allowed length for a first name.
pub const FIRST_NAME_MAX: usize = 50;

/// Validation errors returned by [`FirstName::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstNameError {
    TooShort { min: usize },
    TooLong { max: usize },
}

impl fmt::Display for FirstNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min } => {
                write!(f, "first name must be at least {min} characters")
            }
            Self::TooLong { max } => {
                write!(f, "first name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for FirstNameError {}

/// A person's validated given name.
///
/// ## Invariants
/// - trimmed of surrounding whitespace;
/// - between [`FIRST_NAME_MIN`] and [`FIRST_NAME_MAX`] characters long.
///
/// # Examples
/// ```
/// use identity::domain::FirstName;
///
/// let name = FirstName::parse("John").unwrap();
/// assert_eq!(name.as_ref(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FirstName(String);

impl FirstName {
    /// Validate and construct a [`FirstName`] from raw input.
    ///
    /// Checks run in declared order and the first failure wins.
    pub fn parse(value: impl Into<String>) -> Outcome<Self, FirstNameError> {
        let value = value.into();
        let trimmed = value.trim();
        let length = trimmed.chars().count();
        if length < FIRST_NAME_MIN {
            return Outcome::Err(FirstNameError::TooShort {
                min: FIRST_NAME_MIN,
            });
        }
        if length > FIRST_NAME_MAX {
            return Outcome::Err(FirstNameError::TooLong {
                max: FIRST_NAME_MAX,
            });
        }
        Outcome::Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for FirstName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<FirstName> for String {
    fn from(value: FirstName) -> Self {
        value.0
    }
}

impl TryFrom<String> for FirstName {
    type Error = FirstNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value).into_result()
    }
}
