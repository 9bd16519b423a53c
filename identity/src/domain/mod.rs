//! Domain primitives and the user aggregate.
//!
//! Purpose: define the validated value objects and the `User` aggregate that
//! composes them, keep every type immutable outside its declared mutation
//! surface, and document invariants in each type's Rustdoc. Nothing in this
//! module performs I/O; adapters live behind the traits in [`ports`].
//!
//! Public surface:
//! - value objects (`FirstName`, `LastName`, `Email`, `Password`, `UserRole`,
//!   `SessionToken`, `UserId`), each with its own closed error enumeration;
//! - `User` (aggregate) with its `NewUser` payload and `UserValidationError`;
//! - `SessionService` (session flows over the driven ports).

use outcome::Outcome;

pub mod email;
pub mod error;
pub mod first_name;
pub mod last_name;
pub mod password;
pub mod ports;
pub mod role;
pub mod session_service;
pub mod session_token;
pub mod timestamped;
pub mod user;

pub use self::email::{Email, EmailError};
pub use self::error::UserValidationError;
pub use self::first_name::{FIRST_NAME_MAX, FIRST_NAME_MIN, FirstName, FirstNameError};
pub use self::last_name::{LAST_NAME_MAX, LAST_NAME_MIN, LastName, LastNameError};
pub use self::password::{PASSWORD_MIN, Password, PasswordError};
pub use self::role::{RoleError, UserRole};
pub use self::session_service::{SessionError, SessionService, ensure_admin};
pub use self::session_token::{SessionToken, SessionTokenError};
pub use self::timestamped::Timestamped;
pub use self::user::{NewUser, User, UserId, UserIdError};

/// Convenient alias for factory results carrying the first violated
/// invariant.
///
/// # Examples
/// ```
/// use identity::domain::{NewUser, User, Validated};
///
/// fn build(payload: NewUser) -> Validated<User> {
///     User::create(payload)
/// }
/// ```
pub type Validated<T> = Outcome<T, UserValidationError>;
