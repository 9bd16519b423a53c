//! Algebraic primitives for domain construction pipelines.
//!
//! [`Outcome`] carries the success or the first failure of a computation and
//! [`Maybe`] carries the presence or absence of a value. Both are closed sum
//! types whose combinators mirror the standard library's, so call sites read
//! familiarly, with lossless conversions to and from `std` for code that
//! wants `?`. Serde encodes each as an externally tagged union with a stable
//! wire shape.
//!
//! Every combinator is total and side-effect-free; the only operations that
//! can fail are the panicking accessors (`unwrap`, `unwrap_err`, `expect`,
//! `expect_err`) invoked on the mismatched variant, which is a caller bug
//! rather than a domain condition.

pub mod maybe;
pub mod outcome;

pub use self::maybe::Maybe;
pub use self::outcome::Outcome;
