//! Password value object.
//!
//! The secret lives in zeroizing storage and never appears in `Debug`
//! output or serialised form; callers needing the raw bytes must go through
//! [`Password::expose`].

use std::fmt;

use outcome::Outcome;
use zeroize::Zeroizing;

/// Minimum allowed length for a password.
pub const PASSWORD_MIN: usize = 8;

/// Validation errors returned by [`Password::parse`], one per policy check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    TooShort { min: usize },
    MustHaveAtLeastOneNumber,
    MustHaveAtLeastOneUpperCaseLetter,
    MustHaveAtLeastOneLowerCaseLetter,
    MustHaveAtLeastOneSpecialCharacter,
}

impl fmt::Display for PasswordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::MustHaveAtLeastOneNumber => {
                write!(f, "password must contain at least one number")
            }
            Self::MustHaveAtLeastOneUpperCaseLetter => {
                write!(f, "password must contain at least one upper case letter")
            }
            Self::MustHaveAtLeastOneLowerCaseLetter => {
                write!(f, "password must contain at least one lower case letter")
            }
            Self::MustHaveAtLeastOneSpecialCharacter => {
                write!(f, "password must contain at least one special character")
            }
        }
    }
}

impl std::error::Error for PasswordError {}

/// A password satisfying the sign-up policy.
///
/// ## Invariants
/// Checked in this order, first failure wins: at least [`PASSWORD_MIN`]
/// characters, at least one digit, one upper case letter, one lower case
/// letter, and one special (non-alphanumeric, non-whitespace) character.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Validate and construct a [`Password`] from raw input.
    pub fn parse(value: impl Into<String>) -> Outcome<Self, PasswordError> {
        let value = Zeroizing::new(value.into());
        if value.chars().count() < PASSWORD_MIN {
            return Outcome::Err(PasswordError::TooShort { min: PASSWORD_MIN });
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            return Outcome::Err(PasswordError::MustHaveAtLeastOneNumber);
        }
        if !value.chars().any(char::is_uppercase) {
            return Outcome::Err(PasswordError::MustHaveAtLeastOneUpperCaseLetter);
        }
        if !value.chars().any(char::is_lowercase) {
            return Outcome::Err(PasswordError::MustHaveAtLeastOneLowerCaseLetter);
        }
        if !value
            .chars()
            .any(|c| !c.is_alphanumeric() && !c.is_whitespace())
        {
            return Outcome::Err(PasswordError::MustHaveAtLeastOneSpecialCharacter);
        }
        Outcome::Ok(Self(value))
    }

    /// Borrow the raw secret.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for Password {}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
