//! User aggregate and its construction pipeline.

use std::fmt;

use chrono::{DateTime, Utc};
use outcome::{Maybe, Outcome};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Validated;
use super::email::Email;
use super::error::UserValidationError;
use super::first_name::FirstName;
use super::last_name::LastName;
use super::password::Password;
use super::role::UserRole;
use super::session_token::SessionToken;
use super::timestamped::Timestamped;

/// Validation errors returned by [`UserId::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdError {
    Empty,
    Invalid,
}

impl fmt::Display for UserIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "user id must not be empty"),
            Self::Invalid => write!(f, "user id must be a valid UUID"),
        }
    }
}

impl std::error::Error for UserIdError {}

/// Stable user identifier backed by a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validate and construct a [`UserId`] from its textual form.
    pub fn parse(value: impl AsRef<str>) -> Outcome<Self, UserIdError> {
        let raw = value.as_ref();
        if raw.is_empty() {
            return Outcome::Err(UserIdError::Empty);
        }
        match Uuid::parse_str(raw) {
            Ok(uuid) => Outcome::Ok(Self(uuid)),
            Err(_) => Outcome::Err(UserIdError::Invalid),
        }
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw sign-up payload accepted by [`User::create`].
///
/// Carries unvalidated primitives straight from an inbound adapter; the
/// factory is the only place they are turned into value objects.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    /// Optional role name; absent means the standard role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Identity aggregate.
///
/// ## Invariants
/// - every field passed its value object's factory before the aggregate came
///   into existence; there is no unchecked constructor;
/// - `session_token` is `Maybe::None` exactly when no session is active —
///   the single canonical "logged out" state;
/// - `updated_at` never precedes `created_at`.
///
/// # Examples
/// ```
/// use identity::domain::{NewUser, User};
///
/// let user = User::create(NewUser {
///     first_name: "John".to_owned(),
///     last_name: "Doe".to_owned(),
///     email: "john@doe.com".to_owned(),
///     password: "myComplexPassword123!".to_owned(),
///     role: None,
/// })
/// .unwrap();
///
/// assert_eq!(user.email().as_ref(), "john@doe.com");
/// assert!(user.session_token().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    first_name: FirstName,
    last_name: LastName,
    email: Email,
    password: Password,
    role: UserRole,
    session_token: Maybe<SessionToken>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    /// Validate a raw payload and assemble the aggregate.
    ///
    /// Fields are checked in declaration order (first name, last name, email,
    /// password, role); the first violated invariant aborts construction and
    /// later fields are never parsed. Success yields an aggregate with a
    /// fresh identity, no active session, and both instants set to the
    /// construction time.
    pub fn create(payload: NewUser) -> Validated<Self> {
        Self::build(payload).into()
    }

    fn build(payload: NewUser) -> Result<Self, UserValidationError> {
        let first_name = FirstName::parse(payload.first_name).into_result()?;
        let last_name = LastName::parse(payload.last_name).into_result()?;
        let email = Email::parse(payload.email).into_result()?;
        let password = Password::parse(payload.password).into_result()?;
        let role = Maybe::from(payload.role)
            .map(|raw| UserRole::parse(&raw))
            .transpose()
            .into_result()?
            .unwrap_or_default();

        let now = Utc::now();
        Ok(Self {
            id: UserId::random(),
            first_name,
            last_name,
            email,
            password,
            role,
            session_token: Maybe::None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Record the session token issued for this user.
    ///
    /// Never re-validates the aggregate and cannot fail.
    pub fn log_in(&mut self, token: SessionToken) {
        self.session_token = Maybe::Some(token);
        self.touch();
    }

    /// Clear any active session.
    ///
    /// Never re-validates the aggregate and cannot fail.
    pub fn log_out(&mut self) {
        self.session_token = Maybe::None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Stable identifier assigned at construction.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Validated given name.
    #[must_use]
    pub const fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    /// Validated family name.
    #[must_use]
    pub const fn last_name(&self) -> &LastName {
        &self.last_name
    }

    /// Validated email address.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Validated password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Authorisation level.
    #[must_use]
    pub const fn role(&self) -> UserRole {
        self.role
    }

    /// The active session token, if a session is open.
    pub fn session_token(&self) -> Maybe<&SessionToken> {
        self.session_token.as_ref()
    }

    /// Returns `true` when the user holds the privileged role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl Timestamped for User {
    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

#[cfg(test)]
mod tests;
