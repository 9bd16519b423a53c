//! Port for user aggregate persistence.

use thiserror::Error;

use crate::domain::user::{User, UserId};

/// Errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserRepositoryError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserRepositoryError {
    /// Helper for connection oriented failures.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Helper for query failures.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for writing and reading user aggregates.
#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    /// Insert or update a user record.
    fn upsert(&self, user: &User) -> Result<(), UserRepositoryError>;

    /// Fetch a user by identifier.
    fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError>;
}

/// Fixture implementation for tests that do not exercise persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUserRepository;

impl UserRepository for FixtureUserRepository {
    fn upsert(&self, _user: &User) -> Result<(), UserRepositoryError> {
        Ok(())
    }

    fn find_by_id(&self, _id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(None)
    }
}
