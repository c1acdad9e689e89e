pub mod context;
pub mod format;
pub mod process;
pub mod recase;
pub mod stage;
pub mod token;
pub mod validate;

#[cfg(test)]
pub mod testing;

pub use context::Context;
pub use format::{CAMEL, DOT, Format, KEBAB, all_formats};
pub use recase::{Recase, RecaseError, convert_value, to_camel_case, to_dot_case, to_kebab_case};
pub use stage::apply_case::ApplyCase;
pub use stage::sanitize::Sanitize;
pub use stage::trim::Trim;
