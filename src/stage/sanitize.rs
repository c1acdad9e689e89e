use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Replace every character outside `[A-Za-z0-9]` that is not whitespace with
/// a single ASCII space.
///
/// Symbols are deleted but the word boundaries they imply survive as spaces
/// (`"special@characters!"` → `"special characters "`), so `user_id`,
/// `user-id` and `user id` all tokenize identically. Whitespace itself is
/// left alone here; the tokenizer treats runs of it as one separator.
///
/// Invariant on output: only ASCII alphanumerics and whitespace remain.
pub struct Sanitize;

/// A character the pipeline treats as a separator rather than token content.
#[inline(always)]
fn is_symbol(c: char) -> bool {
    !c.is_ascii_alphanumeric() && !c.is_whitespace()
}

impl Stage for Sanitize {
    fn name(&self) -> &'static str {
        "sanitize"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        Ok(text.chars().any(is_symbol))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(Cow::Owned(
            text.chars()
                .map(|c| if is_symbol(c) { ' ' } else { c })
                .collect(),
        ))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Sanitize {
    fn samples() -> &'static [&'static str] {
        &["special@characters!", "user_id", "mobile-number", "déjà-vu", "", "a b"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello world", "test123", "a b\tc", ""]
    }

    fn should_transform(_format: crate::format::Format) -> &'static [(&'static str, &'static str)] {
        &[
            ("user_id", "user id"),
            ("mobile-number", "mobile number"),
            ("special@characters!", "special characters "),
            ("!!!", "   "),
            ("a.b.c", "a b c"),
        ]
    }
}
