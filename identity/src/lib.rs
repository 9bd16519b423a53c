//! Identity domain library modules.
//!
//! Everything here is transport agnostic: inbound adapters parse their own
//! payloads into [`domain::NewUser`] and map [`domain::SessionError`] onto
//! whatever envelope their protocol wants.

pub mod domain;

pub use domain::{NewUser, SessionService, User, UserValidationError};
