//! Session domain service.
//!
//! Implements the sign-up, log-in, log-out, resume, and refresh flows over
//! the token issuer and user repository ports, keeping transports out of the
//! domain. Every flow returns an [`Outcome`] whose error names the exact
//! reason the caller must handle.

use std::sync::Arc;

use outcome::{Maybe, Outcome};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::error::UserValidationError;
use super::ports::token_issuer::{TokenClaims, TokenIssuer, TokenKind};
use super::ports::user_repository::{UserRepository, UserRepositoryError};
use super::session_token::SessionToken;
use super::user::{NewUser, User};

/// Failures surfaced by [`SessionService`] flows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The sign-up payload failed domain validation.
    #[error(transparent)]
    Validation(#[from] UserValidationError),
    /// The presented token did not verify.
    #[error("session token did not verify")]
    InvalidToken,
    /// The token verified but does not belong to this user's active session.
    #[error("session token does not match the active session")]
    SessionMismatch,
    /// The caller must hold the admin role.
    #[error("admin role required")]
    Forbidden,
    /// The token subject is not a known user.
    #[error("token subject is not a known user")]
    UnknownUser,
    /// The backing user store failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Require the admin role on verified claims.
///
/// # Examples
/// ```
/// use identity::domain::session_service::ensure_admin;
/// use identity::domain::{NewUser, SessionError, User};
/// use identity::domain::ports::TokenClaims;
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
/// let refused = ensure_admin(&TokenClaims::for_user(&user));
/// assert_eq!(refused.unwrap_err(), SessionError::Forbidden);
/// ```
pub fn ensure_admin(claims: &TokenClaims) -> Outcome<(), SessionError> {
    if claims.role.is_admin() {
        Outcome::Ok(())
    } else {
        warn!(user_id = %claims.sub, "admin action refused");
        Outcome::Err(SessionError::Forbidden)
    }
}

/// Session flows over injected driven ports.
#[derive(Clone)]
pub struct SessionService<I, R> {
    issuer: Arc<I>,
    users: Arc<R>,
}

impl<I, R> SessionService<I, R> {
    /// Create a service with its collaborators.
    pub fn new(issuer: Arc<I>, users: Arc<R>) -> Self {
        Self { issuer, users }
    }
}

impl<I, R> SessionService<I, R>
where
    I: TokenIssuer,
    R: UserRepository,
{
    /// Validate a sign-up payload and persist the new user.
    ///
    /// The store is never touched for an invalid payload.
    pub fn sign_up(&self, payload: NewUser) -> Outcome<User, SessionError> {
        User::create(payload)
            .map_err(SessionError::from)
            .and_then(|user| match self.users.upsert(&user) {
                Ok(()) => {
                    info!(user_id = %user.id(), "user signed up");
                    Outcome::Ok(user)
                }
                Err(err) => Outcome::Err(SessionError::from(err)),
            })
    }

    /// Issue a refresh token and record it as the user's active session.
    pub fn log_in(&self, user: &mut User) -> Outcome<SessionToken, SessionError> {
        let claims = TokenClaims::for_user(user);
        let token = self.issuer.sign(&claims, TokenKind::Refresh);
        user.log_in(token.clone());
        if let Err(err) = self.users.upsert(user) {
            return Outcome::Err(err.into());
        }
        debug!(user_id = %user.id(), "session started");
        Outcome::Ok(token)
    }

    /// Clear the user's active session.
    pub fn log_out(&self, user: &mut User) -> Outcome<(), SessionError> {
        user.log_out();
        match self.users.upsert(user) {
            Ok(()) => {
                debug!(user_id = %user.id(), "session ended");
                Outcome::Ok(())
            }
            Err(err) => Outcome::Err(err.into()),
        }
    }

    /// Resolve the user a verified access token belongs to.
    pub fn resume(&self, token: &SessionToken) -> Outcome<User, SessionError> {
        self.issuer
            .verify(token, TokenKind::Access)
            .ok_or(SessionError::InvalidToken)
            .and_then(|claims| match self.users.find_by_id(&claims.sub) {
                Ok(Some(user)) => Outcome::Ok(user),
                Ok(None) => {
                    warn!(user_id = %claims.sub, "token subject unknown");
                    Outcome::Err(SessionError::UnknownUser)
                }
                Err(err) => Outcome::Err(err.into()),
            })
    }

    /// Rotate the user's active refresh token.
    ///
    /// The presented token must verify, name this user as its subject, and
    /// match the session recorded on the aggregate.
    pub fn refresh(
        &self,
        user: &mut User,
        presented: &SessionToken,
    ) -> Outcome<SessionToken, SessionError> {
        let claims = match self.issuer.verify(presented, TokenKind::Refresh) {
            Maybe::Some(claims) => claims,
            Maybe::None => return Outcome::Err(SessionError::InvalidToken),
        };
        if claims.sub != user.id() {
            warn!(user_id = %user.id(), "refresh token issued to another subject");
            return Outcome::Err(SessionError::SessionMismatch);
        }
        let is_active = user
            .session_token()
            .map(|active| active == presented)
            .unwrap_or(false);
        if !is_active {
            return Outcome::Err(SessionError::SessionMismatch);
        }
        self.log_in(user)
    }
}

#[cfg(test)]
#[path = "session_service_tests.rs"]
mod tests;
