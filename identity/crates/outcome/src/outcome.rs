//! Success or failure of a computation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::maybe::Maybe;

/// The result of a computation: a success (`Ok`) or a failure (`Err`).
///
/// Exactly one variant is ever active, and a constructed value never changes
/// variant: every combinator returns a new `Outcome` instead of mutating the
/// receiver. Chains built from [`Outcome::and_then`] evaluate strictly left
/// to right and stop at the first failure, which replaces try/catch cascades
/// in construction pipelines.
///
/// # Examples
/// ```
/// use outcome::Outcome;
///
/// fn half(v: i32) -> Outcome<i32, String> {
///     if v % 2 == 0 {
///         Outcome::Ok(v / 2)
///     } else {
///         Outcome::Err(format!("{v} is odd"))
///     }
/// }
///
/// assert_eq!(Outcome::Ok(8).and_then(half).and_then(half), Outcome::Ok(2));
/// assert_eq!(
///     Outcome::Ok(6).and_then(half).and_then(half),
///     Outcome::Err("3 is odd".to_owned()),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "this `Outcome` may be an `Err` variant, which should be handled"]
pub enum Outcome<T, E> {
    /// The computation succeeded with this value.
    Ok(T),
    /// The computation failed with this error.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is a success.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is a failure.
    #[must_use]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Returns `true` if the outcome is a success whose value satisfies the
    /// predicate.
    #[must_use]
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the outcome is a failure whose error satisfies the
    /// predicate.
    #[must_use]
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Self::Ok(_) => false,
            Self::Err(err) => f(err),
        }
    }

    /// Converts to [`Maybe`], keeping the success and discarding the error.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Converts to [`Maybe`], keeping the error and discarding the success.
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(err) => Maybe::Some(err),
        }
    }

    /// Borrows both payloads, leaving the receiver intact.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Applies `f` to a success value; a failure propagates unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Applies `f` to an error; a success propagates unchanged.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => Outcome::Err(f(err)),
        }
    }

    /// Applies `f` to a success value or returns the supplied default.
    pub fn map_or<U>(self, default: U, f: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// Dispatches to exactly one of the two functions; always total.
    pub fn map_or_else<U>(self, on_err: impl FnOnce(E) -> U, on_ok: impl FnOnce(T) -> U) -> U {
        match self {
            Self::Ok(value) => on_ok(value),
            Self::Err(err) => on_err(err),
        }
    }

    /// Returns `other` if the receiver is a success, otherwise the receiver's
    /// failure unchanged.
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Chains a dependent computation, short-circuiting on the first failure.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(err) => Outcome::Err(err),
        }
    }

    /// Returns the receiver if it is a success, otherwise `other`.
    pub fn or<F>(self, other: Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Recovers from a failure with `f`; a success propagates unchanged.
    pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(err) => f(err),
        }
    }

    /// Returns the success value or the supplied default; never fails.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the success value or computes one from the error; `f` is not
    /// invoked when the receiver is a success.
    pub fn unwrap_or_else(self, f: impl FnOnce(E) -> T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => f(err),
        }
    }

    /// Converts into the standard library's `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(err) => Err(err),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: fmt::Debug,
{
    /// Returns the success value.
    ///
    /// # Panics
    /// Panics if the outcome is a failure; asking a failure for its value is
    /// a caller bug, not a domain condition.
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => unwrap_failed("called `Outcome::unwrap()` on an `Err` value", &err),
        }
    }

    /// Returns the success value, panicking with the caller's diagnostic on a
    /// failure.
    ///
    /// # Panics
    /// Panics with `msg` if the outcome is a failure.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(err) => unwrap_failed(msg, &err),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    T: fmt::Debug,
{
    /// Returns the error.
    ///
    /// # Panics
    /// Panics if the outcome is a success; asking a success for its error is
    /// a caller bug, not a domain condition.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self {
            Self::Ok(value) => {
                unwrap_failed("called `Outcome::unwrap_err()` on an `Ok` value", &value)
            }
            Self::Err(err) => err,
        }
    }

    /// Returns the error, panicking with the caller's diagnostic on a
    /// success.
    ///
    /// # Panics
    /// Panics with `msg` if the outcome is a success.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self {
            Self::Ok(value) => unwrap_failed(msg, &value),
            Self::Err(err) => err,
        }
    }
}

impl<T, E> Outcome<Maybe<T>, E> {
    /// Swaps the nesting of a `Maybe` inside an `Outcome`.
    ///
    /// `Ok(Some(v))` becomes `Some(Ok(v))`, `Ok(None)` becomes `None`, and
    /// `Err(e)` becomes `Some(Err(e))`.
    pub fn transpose(self) -> Maybe<Outcome<T, E>> {
        match self {
            Self::Ok(Maybe::Some(value)) => Maybe::Some(Outcome::Ok(value)),
            Self::Ok(Maybe::None) => Maybe::None,
            Self::Err(err) => Maybe::Some(Outcome::Err(err)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(inner) => Self::Ok(inner),
            Err(err) => Self::Err(err),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(value: Outcome<T, E>) -> Self {
        value.into_result()
    }
}

#[cold]
#[track_caller]
fn unwrap_failed(msg: &str, payload: &dyn fmt::Debug) -> ! {
    panic!("{msg}: {payload:?}")
}
