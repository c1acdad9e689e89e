//! Core pipeline stage abstraction.
//!
//! A conversion is a fixed sequence of stages, each transforming a
//! `Cow<'a, str>`. Every stage exposes a cheap `needs_apply` pre-check so the
//! pipeline can skip it entirely and stay zero-copy when the input is already
//! in the required shape (e.g. trimming text with clean edges, or formatting
//! text that is already a single lowercase token).

pub mod apply_case;
pub mod sanitize;
pub mod trim;

use crate::context::Context;
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("conversion failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single conversion step.
pub trait Stage: Send + Sync {
    /// Human-readable name — used in error messages and tests.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage.
    ///
    /// Contract: must return `Ok(true)` whenever `apply` would change the
    /// text, and `Ok(false)` otherwise. The pipeline trusts this to preserve
    /// borrowed input untouched.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct on its own,
    /// independent of whether `needs_apply` was consulted first.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}
