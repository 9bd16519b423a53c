//! User role value object.

use std::fmt;

use outcome::Outcome;
use serde::{Deserialize, Serialize};

/// The authorisation level granted to a user.
///
/// # Examples
/// ```
/// use identity::domain::UserRole;
///
/// assert_eq!(UserRole::default(), UserRole::User);
/// assert!(UserRole::Admin.is_admin());
/// assert_eq!(UserRole::Admin.as_str(), "admin");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Ordinary account, the default for new sign-ups.
    #[default]
    User,
    /// Privileged account allowed through admin guards.
    Admin,
}

/// Error returned when parsing an unknown role string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleError {
    UnknownRole { input: String },
}

impl fmt::Display for RoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRole { input } => write!(f, "unknown user role: {input}"),
        }
    }
}

impl std::error::Error for RoleError {}

impl UserRole {
    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Returns `true` for the privileged role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Validate and construct a [`UserRole`] from its string form.
    pub fn parse(value: &str) -> Outcome<Self, RoleError> {
        match value {
            "user" => Outcome::Ok(Self::User),
            "admin" => Outcome::Ok(Self::Admin),
            other => Outcome::Err(RoleError::UnknownRole {
                input: other.to_owned(),
            }),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).into_result()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn default_role_is_user() {
        assert_eq!(UserRole::default(), UserRole::User);
    }

    #[rstest]
    #[case::user("user", UserRole::User)]
    #[case::admin("admin", UserRole::Admin)]
    fn parses_known_roles(#[case] input: &str, #[case] expected: UserRole) {
        assert_eq!(UserRole::parse(input), outcome::Outcome::Ok(expected));
        let parsed: UserRole = input.parse().expect("valid role");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case::unknown("invalidRole")]
    #[case::capitalised("Admin")]
    #[case::empty("")]
    fn rejects_unknown_roles(#[case] input: &str) {
        let err = UserRole::parse(input).unwrap_err();
        assert_eq!(
            err,
            RoleError::UnknownRole {
                input: input.to_owned()
            }
        );
    }

    #[rstest]
    fn as_str_round_trips_through_parse() {
        for role in [UserRole::User, UserRole::Admin] {
            let parsed = UserRole::parse(role.as_str()).expect("round trip");
            assert_eq!(parsed, role);
        }
    }

    #[rstest]
    fn only_admin_passes_the_privilege_check() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }

    #[rstest]
    fn serde_uses_snake_case_strings() {
        let json = serde_json::to_string(&UserRole::Admin).expect("serialise");
        assert_eq!(json, r#""admin""#);
        let role: UserRole = serde_json::from_str(r#""user""#).expect("deserialise");
        assert_eq!(role, UserRole::User);
    }
}
