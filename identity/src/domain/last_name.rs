//! Family-name value object.

use std::fmt;

use outcome::Outcome;
use serde::{Deserialize, Serialize};

/// Minimum allowed length for a last name.
pub const LAST_NAME_MIN: usize = 2;
/// Maximum allowed length for a last name.
pub const LAST_NAME_MAX: usize = 50;

/// Validation errors returned by [`LastName::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LastNameError {
    TooShort { min: usize },
    TooLong { max: usize },
}

impl fmt::Display for LastNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min } => {
                write!(f, "last name must be at least {min} characters")
            }
            Self::TooLong { max } => {
                write!(f, "last name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for LastNameError {}

/// A person's validated family name, trimmed and length-bounded like
/// [`crate::domain::FirstName`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LastName(String);

impl LastName {
    /// Validate and construct a [`LastName`] from raw input.
    pub fn parse(value: impl Into<String>) -> Outcome<Self, LastNameError> {
        let value = value.into();
        let trimmed = value.trim();
        let length = trimmed.chars().count();
        if length < LAST_NAME_MIN {
            return Outcome::Err(LastNameError::TooShort { min: LAST_NAME_MIN });
        }
        if length > LAST_NAME_MAX {
            return Outcome::Err(LastNameError::TooLong { max: LAST_NAME_MAX });
        }
        Outcome::Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for LastName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LastName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<LastName> for String {
    fn from(value: LastName) -> Self {
        value.0
    }
}

impl TryFrom<String> for LastName {
    type Error = LastNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value).into_result()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("Doe")]
    #[case("Du")]
    #[case(" Lovelace ")]
    fn accepts_names_within_bounds(#[case] input: &str) {
        let name = LastName::parse(input).expect("valid last name");
        assert_eq!(name.as_ref(), input.trim());
    }

    #[rstest]
    fn rejects_too_short_names() {
        let err = LastName::parse("D").unwrap_err();
        assert_eq!(err, LastNameError::TooShort { min: LAST_NAME_MIN });
    }

    #[rstest]
    fn rejects_too_long_names() {
        let err = LastName::parse("a".repeat(LAST_NAME_MAX + 1)).unwrap_err();
        assert_eq!(err, LastNameError::TooLong { max: LAST_NAME_MAX });
    }
}
