//! Port for signing and verifying session tokens.

use std::fmt;

use outcome::Maybe;
use serde::{Deserialize, Serialize};

use crate::domain::email::Email;
use crate::domain::role::UserRole;
use crate::domain::session_token::SessionToken;
use crate::domain::user::{User, UserId};

/// Which of the two token families a signature belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Short-lived token presented on ordinary requests.
    Access,
    /// Long-lived token exchanged for fresh access tokens.
    Refresh,
}

impl TokenKind {
    /// Returns the stable string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Access => "access_token",
            Self::Refresh => "refresh_token",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Claims carried inside a signed token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    /// Subject: the user the token was issued to.
    pub sub: UserId,
    /// Email address at issue time.
    pub email: Email,
    /// Role at issue time.
    pub role: UserRole,
}

impl TokenClaims {
    /// Claims describing the given user.
    #[must_use]
    pub fn for_user(user: &User) -> Self {
        Self {
            sub: user.id(),
            email: user.email().clone(),
            role: user.role(),
        }
    }
}

/// Port for producing and checking signed session tokens.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Sign the claims into an opaque token of the given kind.
    fn sign(&self, claims: &TokenClaims, kind: TokenKind) -> SessionToken;

    /// Check a presented token.
    ///
    /// `Maybe::None` covers every rejection: a forged or expired signature,
    /// or a token of the wrong kind.
    fn verify(&self, token: &SessionToken, kind: TokenKind) -> Maybe<TokenClaims>;
}
