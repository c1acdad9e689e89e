use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Strip leading and trailing whitespace.
///
/// Zero-copy when both edges are already clean. Trimming everything away is a
/// valid outcome: whitespace-only input becomes the empty string, which the
/// downstream stages pass through untouched.
pub struct Trim;

impl Stage for Trim {
    fn name(&self) -> &'static str {
        "trim"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _: &Context) -> Result<bool, StageError> {
        let bytes = text.as_bytes();
        // Fast ASCII path: check first/last byte
        if bytes.first().is_some_and(u8::is_ascii_whitespace)
            || bytes.last().is_some_and(u8::is_ascii_whitespace)
        {
            return Ok(true);
        }
        // Unicode fallback: only if needed
        Ok(text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let trimmed = text.trim();
        if trimmed.as_ptr() == text.as_ptr() && trimmed.len() == text.len() {
            return Ok(text);
        }
        Ok(Cow::Owned(trimmed.to_string()))
    }
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for Trim {
    fn samples() -> &'static [&'static str] {
        &["  first name ", "\t user_id \n", "SCREEN_NAME", "", "   ", "\u{00A0}padded\u{3000}"]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "hello world", "a  b", ""]
    }

    fn should_transform(_format: crate::format::Format) -> &'static [(&'static str, &'static str)] {
        &[
            ("  hello  ", "hello"),
            ("\t\nhello", "hello"),
            ("hello \r\n", "hello"),
            ("   ", ""),
            ("\u{00A0}x\u{00A0}", "x"),
        ]
    }
}
