//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `OutcomeError`, so fallible helpers can simply
//! return `Result<T>`. This is the std `Result`; the value type modelled by
//! this crate is [`crate::Outcome`].
use crate::error::OutcomeError;

/// Workspace-wide `Result` alias with `OutcomeError` as the default error.
pub type Result<T, E = OutcomeError> = std::result::Result<T, E>;
