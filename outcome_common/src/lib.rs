//!
//! A `Result`-style value type and its combinators.
//!
//! This crate aggregates:
//! - `outcome` — the `Outcome<T, E>` sum type, its `ok`/`err` constructors and combinators.
//! - `future` — bridges turning a single future into an `Outcome`.
//! - `shape` — the `{isOk, isErr, value}` JSON shape and its structural guard.
//! - `tag` — the `Ok`/`Err` discriminant as a standalone value.
//! - `error` — unified error type `OutcomeError` used across the workspace.
//! - `result` — handy `Result<T, OutcomeError>` alias.
#![warn(missing_docs)]
pub mod error;
pub mod future;
pub mod outcome;
pub mod result;
pub mod shape;
pub mod tag;

pub use error::OutcomeError;
pub use future::{catch_future, from_future};
pub use outcome::{Arms, Outcome, err, is_result, ok};
pub use result::Result;
pub use tag::Tag;
