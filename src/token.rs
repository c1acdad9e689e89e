//! Whitespace tokenizer.
//!
//! Splits text on runs of one-or-more whitespace characters. Empty tokens
//! never appear, even for leading/trailing whitespace or consecutive
//! separators, and token order follows the input.

use std::iter::FusedIterator;

/// Iterate over the whitespace-separated tokens of `text`.
#[inline(always)]
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

/// Borrowing iterator over non-empty, whitespace-delimited tokens.
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let s = self.rest.trim_start();
        if s.is_empty() {
            self.rest = "";
            return None;
        }
        let end = s.find(char::is_whitespace).unwrap_or(s.len());
        let (token, rest) = s.split_at(end);
        self.rest = rest;
        Some(token)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // Tokens are separated by at least one whitespace character.
        (0, Some(self.rest.len().div_ceil(2)))
    }
}

impl<'a> FusedIterator for Tokens<'a> {}
