//! The `Outcome` value type and its combinators.
//!
//! An `Outcome<T, E>` is either `Ok(T)` or `Err(E)`. It is built once by
//! [`ok`], [`err`] or one of the future bridges in [`crate::future`], and
//! never changes afterwards: every combinator consumes (or borrows) its input
//! and returns a fresh value.
//!
//! Unlike `std::result::Result`, the extraction helpers never panic. Asking
//! an `Err` for its value hands the original error back to the caller
//! ([`Outcome::unwrap`]); asking an `Ok` for its error yields an
//! [`OutcomeError::NotAnError`] ([`Outcome::unwrap_err`]).
use std::any::Any;
use std::fmt;

use crate::error::OutcomeError;
use crate::tag::Tag;

/// Outcome of an operation that may fail.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// Success, carrying the produced value.
    Ok(T),
    /// Failure, carrying the error.
    Err(E),
}

/// Builds a success outcome.
pub fn ok<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Ok(value)
}

/// Builds a failure outcome.
pub fn err<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Err(error)
}

/// Returns `true` if `value` is an `Outcome<T, E>`.
///
/// Any other type, including `std::result::Result<T, E>`, `Option`, `()` or
/// collections, is rejected. The check is exact on both type parameters: an
/// `Outcome<i64, String>` probed as `is_result::<i32, String>` reads as
/// "not a result".
pub fn is_result<T: 'static, E: 'static>(value: &dyn Any) -> bool {
    value.is::<Outcome<T, E>>()
}

/// Handlers for [`Outcome::match_arms`], one per variant.
///
/// The fields carry no bounds, so closures written inline in the literal
/// need their argument types spelled out; prefer [`Outcome::match_with`]
/// there.
pub struct Arms<OkFn, ErrFn> {
    /// Called with the success value.
    pub ok: OkFn,
    /// Called with the error.
    pub err: ErrFn,
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` for `Ok`.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    /// Returns `true` for `Err`.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Which variant this is.
    pub fn tag(&self) -> Tag {
        match self {
            Outcome::Ok(_) => Tag::Ok,
            Outcome::Err(_) => Tag::Err,
        }
    }

    /// Borrows the payload, leaving `self` in place.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// The success value, if any. The error is discarded.
    pub fn ok_value(self) -> Option<T> {
        match self {
            Outcome::Ok(value) => Some(value),
            Outcome::Err(_) => None,
        }
    }

    /// The error, if any. The success value is discarded.
    pub fn err_value(self) -> Option<E> {
        match self {
            Outcome::Ok(_) => None,
            Outcome::Err(error) => Some(error),
        }
    }

    /// Dispatches to exactly one of `on_ok` / `on_err`, passing the unwrapped
    /// payload, and returns what that handler returns.
    ///
    /// ```
    /// use outcome_common::ok;
    ///
    /// let doubled = ok::<i32, String>(10).match_with(|v| v * 2, |e| e.len() as i32);
    /// assert_eq!(doubled, 20);
    /// ```
    pub fn match_with<R>(self, on_ok: impl FnOnce(T) -> R, on_err: impl FnOnce(E) -> R) -> R {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Err(error) => on_err(error),
        }
    }

    /// [`Outcome::match_with`] over a prebuilt [`Arms`] record.
    pub fn match_arms<R, OkFn, ErrFn>(self, arms: Arms<OkFn, ErrFn>) -> R
    where
        OkFn: FnOnce(T) -> R,
        ErrFn: FnOnce(E) -> R,
    {
        self.match_with(arms.ok, arms.err)
    }

    /// Escalates into a std `Result` so the caller can propagate with `?`.
    ///
    /// The error is the original payload, not a wrapper around it.
    pub fn unwrap(self) -> Result<T, E> {
        match self {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }

    /// Returns the error of an `Err`.
    ///
    /// On `Ok` this is a misuse and yields [`OutcomeError::NotAnError`]
    /// describing the success value.
    pub fn unwrap_err(self) -> crate::Result<E>
    where
        T: fmt::Debug,
    {
        match self {
            Outcome::Ok(value) => Err(OutcomeError::NotAnError(format!("{:?}", value))),
            Outcome::Err(error) => Ok(error),
        }
    }

    /// Returns the success value, or computes one from the error.
    ///
    /// `recover` only runs on the error path. The recovered type `U` need not
    /// be `T`; the success value is converted with `Into`.
    pub fn unwrap_or_else<U, F>(self, recover: F) -> U
    where
        T: Into<U>,
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Ok(value) => value.into(),
            Outcome::Err(error) => recover(error),
        }
    }

    /// Returns the success value, or `fallback` exactly as given.
    pub fn unwrap_or_default<U>(self, fallback: U) -> U
    where
        T: Into<U>,
    {
        match self {
            Outcome::Ok(value) => value.into(),
            Outcome::Err(_) => fallback,
        }
    }

    /// Transforms the success value. `f` is never called on `Err`.
    pub fn map_ok<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error. `f` is never called on `Ok`.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.unwrap()
    }
}
