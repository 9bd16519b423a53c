//! Session token value object.

use std::fmt;

use outcome::Outcome;

/// Validation errors returned by [`SessionToken::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTokenError {
    Empty,
}

impl fmt::Display for SessionTokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "session token must not be empty"),
        }
    }
}

impl std::error::Error for SessionTokenError {}

/// An opaque signed token naming an active session.
///
/// Stored exactly as issued; the token has no `Display` impl and only
/// surfaces through [`SessionToken::as_str`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Validate and construct a [`SessionToken`] from an issued string.
    pub fn parse(value: impl Into<String>) -> Outcome<Self, SessionTokenError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Outcome::Err(SessionTokenError::Empty);
        }
        Outcome::Ok(Self(value))
    }

    /// Borrow the token exactly as issued.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for SessionToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn keeps_the_issued_form_exactly() {
        let token = SessionToken::parse("header.payload.signature").expect("valid token");
        assert_eq!(token.as_str(), "header.payload.signature");
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn rejects_blank_tokens(#[case] input: &str) {
        assert_eq!(
            SessionToken::parse(input).unwrap_err(),
            SessionTokenError::Empty
        );
    }
}
