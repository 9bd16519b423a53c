//! Domain ports defining the edges of the identity core.
//!
//! Ports describe how the domain expects to interact with driven adapters
//! (token signing backends, user stores). Each trait exposes strongly typed
//! errors so adapters map their failures into predictable variants instead
//! of returning `anyhow::Result`. The core schedules nothing; adapters own
//! their own I/O model behind these synchronous seams.

pub mod token_issuer;
pub mod user_repository;

pub use self::token_issuer::{TokenClaims, TokenIssuer, TokenKind};
pub use self::user_repository::{FixtureUserRepository, UserRepository, UserRepositoryError};
