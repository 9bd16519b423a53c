//! Email address value object.

use std::fmt;
use std::sync::OnceLock;

use outcome::Outcome;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One local part, one domain, at least one dot in the domain.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Validation errors returned by [`Email::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    IncorrectFormat,
}

impl fmt::Display for EmailError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncorrectFormat => write!(f, "email address is not in a valid format"),
        }
    }
}

impl std::error::Error for EmailError {}

/// A validated email address.
///
/// ## Invariants
/// - trimmed of surrounding whitespace;
/// - shaped like a mailbox (`local@domain.tld`), with no whitespace or a
///   second `@` inside either part.
///
/// # Examples
/// ```
/// use identity::domain::Email;
///
/// let email = Email::parse("john@doe.com").unwrap();
/// assert_eq!(email.as_ref(), "john@doe.com");
/// assert!(Email::parse("not-an-address").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`] from raw input.
    pub fn parse(value: impl Into<String>) -> Outcome<Self, EmailError> {
        let value = value.into();
        let trimmed = value.trim();
        if !email_regex().is_match(trimmed) {
            return Outcome::Err(EmailError::IncorrectFormat);
        }
        Outcome::Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value).into_result()
    }
}
