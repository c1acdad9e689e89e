use crate::{
    context::Context,
    format::Format,
    stage::{Stage, StageError},
    token::tokens,
};
use std::borrow::Cow;

/// Tokenize on whitespace and render tokens in the target format.
///
/// Per-token rule and joiner come from `ctx.format`:
///
/// | Format | Per-token rule | Joiner |
/// |--------|----------------|--------|
/// | camel  | first token lowercased; later tokens capitalized | `""` |
/// | kebab  | every token lowercased | `-` |
/// | dot    | every token lowercased | `.` |
///
/// Casing is ASCII-only. Digits have no case, so a numeric token passes
/// through unchanged while still occupying a token position: capitalizing
/// `"123"` is a no-op, and the token after it is capitalized as usual.
pub struct ApplyCase;

impl Stage for ApplyCase {
    fn name(&self) -> &'static str {
        "apply_case"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        // Output never contains whitespace and, for a single token, never
        // uppercase. Multi-token input always changes (joiner replaces the
        // separator run), single-token input changes iff it has uppercase.
        Ok(text
            .chars()
            .any(|c| c.is_ascii_uppercase() || c.is_whitespace()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let joiner = ctx.format.joiner();
        let mut out = String::with_capacity(text.len());
        for (index, token) in tokens(&text).enumerate() {
            if index > 0 {
                out.push_str(joiner);
            }
            if index > 0 && ctx.format.capitalizes_tail_tokens() {
                push_capitalized(&mut out, token);
            } else {
                push_lowercased(&mut out, token);
            }
        }
        Ok(Cow::Owned(out))
    }
}

#[inline(always)]
fn push_lowercased(out: &mut String, token: &str) {
    out.extend(token.chars().map(|c| c.to_ascii_lowercase()));
}

/// First character uppercased, the rest lowercased. On a digit the uppercase
/// mapping is the identity, so numeric tokens come out untouched.
#[inline(always)]
fn push_capitalized(out: &mut String, token: &str) {
    let mut chars = token.chars();
    if let Some(first) = chars.next() {
        out.push(first.to_ascii_uppercase());
    }
    out.extend(chars.map(|c| c.to_ascii_lowercase()));
}

#[cfg(test)]
impl crate::testing::stage_contract::StageTestConfig for ApplyCase {
    fn samples() -> &'static [&'static str] {
        &["first name", "SCREEN", "123 numbers first", "convert THIS to camelCase", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "test123", "123", ""]
    }

    fn should_transform(format: Format) -> &'static [(&'static str, &'static str)] {
        match format {
            Format::Camel => &[
                ("first name", "firstName"),
                ("123 numbers first", "123NumbersFirst"),
                ("convert THIS to camelCase", "convertThisToCamelCase"),
                ("SCREEN", "screen"),
            ],
            Format::Kebab => &[
                ("first name", "first-name"),
                ("123 numbers first", "123-numbers-first"),
                ("SCREEN", "screen"),
            ],
            Format::Dot => &[
                ("first name", "first.name"),
                ("123 numbers first", "123.numbers.first"),
                ("SCREEN", "screen"),
            ],
        }
    }

    fn idempotent(format: Format) -> bool {
        // Camel output keeps uppercase at token seams; feeding it back in
        // lowercases the whole thing (`"firstName"` → `"firstname"`).
        !format.capitalizes_tail_tokens()
    }
}
