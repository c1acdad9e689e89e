// src/format.rs
// Target output formats. Deliberately tiny and Copy — a Format is carried
// inside every Context and read on the hot path of the formatting stage.

use std::fmt;

/// Identifier format produced by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// `firstName` — first token lowercased, later tokens capitalized, no joiner.
    Camel,
    /// `first-name` — every token lowercased, joined with `-`.
    Kebab,
    /// `first.name` — every token lowercased, joined with `.`.
    Dot,
}

pub const CAMEL: Format = Format::Camel;
pub const KEBAB: Format = Format::Kebab;
pub const DOT: Format = Format::Dot;

pub const DEFAULT_FORMAT: Format = Format::Camel;

static ALL_FORMATS: [Format; 3] = [Format::Camel, Format::Kebab, Format::Dot];

/// Every supported format, in declaration order.
#[inline(always)]
pub fn all_formats() -> &'static [Format] {
    &ALL_FORMATS
}

impl Format {
    /// Short identifier — used in stage names, logging and error messages.
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        match self {
            Format::Camel => "camel",
            Format::Kebab => "kebab",
            Format::Dot => "dot",
        }
    }

    /// Separator inserted between adjacent tokens.
    #[inline(always)]
    pub const fn joiner(&self) -> &'static str {
        match self {
            Format::Camel => "",
            Format::Kebab => "-",
            Format::Dot => ".",
        }
    }

    /// Whether tokens after the first get their leading character uppercased.
    #[inline(always)]
    pub const fn capitalizes_tail_tokens(&self) -> bool {
        matches!(self, Format::Camel)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
