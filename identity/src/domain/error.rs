//! Aggregate-level validation error.

use thiserror::Error;

use super::email::EmailError;
use super::first_name::FirstNameError;
use super::last_name::LastNameError;
use super::password::PasswordError;
use super::role::RoleError;
use super::user::UserIdError;

/// The first invariant violated while constructing a
/// [`User`](crate::domain::User).
///
/// Each variant wraps the owning value object's error enumeration unchanged,
/// so callers can match on the offending field and on the precise check that
/// failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error(transparent)]
    FirstName(#[from] FirstNameError),
    #[error(transparent)]
    LastName(#[from] LastNameError),
    #[error(transparent)]
    Email(#[from] EmailError),
    #[error(transparent)]
    Password(#[from] PasswordError),
    #[error(transparent)]
    Role(#[from] RoleError),
    #[error(transparent)]
    Id(#[from] UserIdError),
}
