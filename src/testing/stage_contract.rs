use crate::{
    context::Context,
    format::{Format, all_formats},
    stage::Stage,
};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["Hello World 123", " user_id ", "TEST", ""]
    }

    /// Samples that must pass through unchanged (zero-copy test).
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "test123", ""]
    }

    /// Input/output pairs verifying concrete transformations for a format.
    fn should_transform(_format: Format) -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// Whether applying the stage to its own output is a no-op under `format`.
    fn idempotent(_format: Format) -> bool {
        true
    }
}

/// Assert that a stage satisfies every universal contract:
///
/// 1. `zero_copy_when_no_changes` — no allocation when input == output
/// 2. `needs_apply_is_accurate` — correctly predicts whether apply() changes the text
/// 3. `stage_is_idempotent` — applying twice == applying once (opt-out per format)
/// 4. `handles_empty_string` — the empty string survives untouched
/// 5. `no_panic_on_mixed_scripts` — survives pathological real-world input
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes($stage);
        $crate::testing::stage_contract::needs_apply_is_accurate($stage);
        $crate::testing::stage_contract::stage_is_idempotent($stage);
        $crate::testing::stage_contract::handles_empty_string($stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts($stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: S) {
    for &format in all_formats() {
        let ctx = Context::new(format);

        for &input in S::samples() {
            let mut text = Cow::Borrowed(input);

            // First pass – respect needs_apply
            if stage.needs_apply(&text, &ctx).unwrap() {
                let old_ptr = text.as_ref() as *const str;
                text = stage.apply(text, &ctx).unwrap();
                assert_ne!(old_ptr, text.as_ref() as *const str);
            } else {
                // No change needed → must remain borrowed with identical pointer
                assert_eq!(input as *const str, text.as_ref() as *const str);
            }

            // Second pass – must never allocate again
            if S::idempotent(format) {
                let old_ptr = text.as_ref() as *const str;
                if stage.needs_apply(&text, &ctx).unwrap() {
                    text = stage.apply(text, &ctx).unwrap();
                }
                assert_eq!(
                    old_ptr,
                    text.as_ref() as *const str,
                    "zero-copy violated on second idempotent pass (format: {format}, input: `{input}`)"
                );
            }
        }

        // Pass-through samples must always be zero-copy and unchanged
        for &pass_through in S::should_pass_through() {
            let mut text = Cow::Borrowed(pass_through);
            let original_ptr = pass_through as *const str;

            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
            }

            assert_eq!(text.as_ref(), pass_through);
            assert_eq!(
                original_ptr,
                text.as_ref() as *const str,
                "zero-copy violated on pass-through sample (format: {format}, input: `{pass_through}`)"
            );
        }

        // Transformation samples – allocation expected
        for &(input, expected) in S::should_transform(format) {
            let mut text = Cow::Borrowed(input);
            if stage.needs_apply(&text, &ctx).unwrap() {
                text = stage.apply(text, &ctx).unwrap();
            }
            assert_eq!(
                text.as_ref(),
                expected,
                "wrong output (format: {format}, input: `{input}`)"
            );
        }
    }
}

pub fn needs_apply_is_accurate<S: StageTestConfig>(stage: S) {
    for &format in all_formats() {
        let ctx = Context::new(format);
        // 1. Stage-provided samples (the most important ones)
        for &sample in S::samples() {
            check_accuracy(&stage, sample, &ctx);
        }
        // 2. Explicit "must not trigger" set – text no stage is allowed to touch
        for &clean in &["", "hello", "world123"] {
            check_accuracy(&stage, clean, &ctx);
        }
    }
}

#[inline(always)]
fn check_accuracy<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    // NOTE: we deliberately clone the input into an Owned Cow so that
    //       the always-allocating apply path is not penalised.
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    let actually_changes = output != input;
    assert_eq!(
        predicted,
        actually_changes,
        "needs_apply() mismatch for stage `{}` ({}) on `{input}`\n\
         predicted: {predicted}\n\
         actual   : {actually_changes} (output = {output:?})",
        stage.name(),
        ctx.format,
    );
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: S) {
    for &format in all_formats() {
        if !S::idempotent(format) {
            continue;
        }
        let ctx = Context::new(format);
        for &input in S::samples() {
            let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
            let twice = stage.apply(once.clone(), &ctx).unwrap();
            assert_eq!(once, twice, "apply() not idempotent ({format}) on `{input}`");
        }
    }
}

pub fn handles_empty_string<S: StageTestConfig>(stage: S) {
    for &format in all_formats() {
        let ctx = Context::new(format);
        assert!(!stage.needs_apply("", &ctx).unwrap());
        let result = stage.apply(Cow::Borrowed(""), &ctx).unwrap();
        assert_eq!(result.as_ref(), "");
    }
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: S) {
    for &format in all_formats() {
        let ctx = Context::new(format);
        let _ = stage.apply(
            Cow::Borrowed("Hello 世界 русский Türkçe العربية 简体中文"),
            &ctx,
        );
    }
}
