//! Presence or absence of a value.

use serde::{Deserialize, Serialize};

use crate::outcome::Outcome;

/// A value that may be present (`Some`) or absent (`None`).
///
/// `Maybe` is an immutable value type: combinators consume or borrow the
/// receiver and return a new value, never mutating in place. Two values are
/// equal iff they are the same variant carrying equal payloads.
///
/// # Examples
/// ```
/// use outcome::Maybe;
///
/// let doubled = Maybe::Some(2).map(|v| v * 2);
/// assert_eq!(doubled, Maybe::Some(4));
/// assert_eq!(Maybe::<i32>::None.map(|v| v * 2), Maybe::None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// No value.
    #[default]
    None,
}

impl<T> Maybe<T> {
    /// Returns `true` if the value is present.
    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Borrows the payload, leaving the receiver intact.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Applies `f` to a present value; `None` propagates unchanged.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chains a computation that itself may produce no value.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    /// Returns the payload or the supplied default.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Returns the payload or computes a fallback; `f` is not invoked when a
    /// value is present.
    pub fn unwrap_or_else(self, f: impl FnOnce() -> T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => f(),
        }
    }

    /// Returns the payload or the type's default value.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Promotes a present value to `Ok`, an absent one to the given error.
    pub fn ok_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(err),
        }
    }

    /// Promotes a present value to `Ok`, computing the error lazily.
    pub fn ok_or_else<E>(self, err: impl FnOnce() -> E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(err()),
        }
    }
}

impl<T, E> Maybe<Outcome<T, E>> {
    /// Swaps the nesting of an `Outcome` inside a `Maybe`.
    ///
    /// `Some(Ok(v))` becomes `Ok(Some(v))`, `Some(Err(e))` becomes `Err(e)`,
    /// and `None` becomes `Ok(None)`.
    pub fn transpose(self) -> Outcome<Maybe<T>, E> {
        match self {
            Self::Some(Outcome::Ok(value)) => Outcome::Ok(Maybe::Some(value)),
            Self::Some(Outcome::Err(err)) => Outcome::Err(err),
            Self::None => Outcome::Ok(Maybe::None),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Self::Some(inner),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(inner) => Some(inner),
            Maybe::None => None,
        }
    }
}
