// src/context.rs
// Single source of truth for per-conversion configuration in hot paths.
// Deliberately tiny and Copy.

use crate::format::{DEFAULT_FORMAT, Format};

/// Runtime context passed to every pipeline stage.
///
/// Carries the target [`Format`]; stages that do not depend on the output
/// format (trimming, sanitizing) simply ignore it.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub format: Format,
}

impl Default for Context {
    #[inline(always)]
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

impl Context {
    #[inline(always)]
    pub fn new(format: Format) -> Self {
        Self { format }
    }
}
