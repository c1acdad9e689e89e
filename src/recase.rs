use thiserror::Error;

use crate::{
    context::Context,
    format::{CAMEL, DOT, Format, KEBAB},
    process::{ChainedProcess, DynamicProcess, EmptyProcess, Process},
    stage::{Stage, StageError, apply_case::ApplyCase, sanitize::Sanitize, trim::Trim},
    validate,
};
use serde_json::Value;
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum RecaseError {
    /// The supplied value is not a string. Raised before any stage runs and
    /// never recovered internally; the caller decides how to surface it.
    #[error("input must be a string, got {found}")]
    InvalidInputType { found: &'static str },
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
}

/// A configured conversion pipeline.
///
/// ```rust
/// use recase::{Format, Recase};
///
/// let kebab = Recase::with_format(Format::Kebab);
/// assert_eq!(kebab.convert("SCREEN_NAME").unwrap(), "screen-name");
/// ```
pub struct Recase {
    ctx: Context,
    process: DynamicProcess,
}

impl Recase {
    pub fn builder() -> RecaseBuilder {
        RecaseBuilder::default()
    }

    /// The standard trim → sanitize → format pipeline for `format`.
    pub fn with_format(format: Format) -> Self {
        Self::builder().format(format).with_default_stages().build()
    }

    /// Run the pipeline. Zero-copy when no stage needs to touch the text.
    pub fn convert<'a>(
        &self,
        text: impl Into<Cow<'a, str>>,
    ) -> Result<Cow<'a, str>, RecaseError> {
        let result = self.process.process(text.into(), &self.ctx)?;
        Ok(result)
    }
}

pub struct RecaseBuilder {
    format: Format,
    process: DynamicProcess,
}

impl Default for RecaseBuilder {
    fn default() -> Self {
        Self {
            format: Format::Camel,
            process: DynamicProcess::new(),
        }
    }
}

impl RecaseBuilder {
    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    pub fn add_stage<T: Stage + Send + Sync + 'static>(mut self, stage: T) -> Self {
        self.process = self.process.push(stage);
        self
    }

    pub fn with_default_stages(self) -> Self {
        self.add_stage(Trim).add_stage(Sanitize).add_stage(ApplyCase)
    }

    pub fn build(self) -> Recase {
        Recase {
            ctx: Context::new(self.format),
            process: self.process,
        }
    }
}

/// The standard chain, monomorphised. The compiler sees every concrete stage
/// type, so the built-in converters compile to a single fused pass.
#[inline(always)]
fn standard_chain() -> impl Process {
    ChainedProcess {
        stage: ApplyCase,
        previous: ChainedProcess {
            stage: Sanitize,
            previous: ChainedProcess {
                stage: Trim,
                previous: EmptyProcess,
            },
        },
    }
}

/// Convert a loosely typed value to `format`.
///
/// Fails with [`RecaseError::InvalidInputType`] for anything that is not a
/// string — null, booleans, numbers, arrays, objects. Every string input
/// succeeds; empty or separator-only strings convert to the empty string.
pub fn convert_value(input: &Value, format: Format) -> Result<String, RecaseError> {
    let text = validate::expect_string(input)?;
    let out = standard_chain().process(Cow::Borrowed(text), &Context::new(format))?;
    Ok(out.into_owned())
}

/// `"first name"` → `"firstName"`, `"user_id"` → `"userId"`.
pub fn to_camel_case(input: &Value) -> Result<String, RecaseError> {
    convert_value(input, CAMEL)
}

/// `"SCREEN_NAME"` → `"screen-name"`.
pub fn to_kebab_case(input: &Value) -> Result<String, RecaseError> {
    convert_value(input, KEBAB)
}

/// `"mobile-number"` → `"mobile.number"`.
pub fn to_dot_case(input: &Value) -> Result<String, RecaseError> {
    convert_value(input, DOT)
}
