//! Assembly source tokenizer.
//!
//! A token is a maximal run of non-whitespace, non-NUL bytes. The tokenizer
//! is a lazy iterator borrowing from the source text; it owns no buffer and
//! each token lives only as long as the source does. It is restartable:
//! pass two of the assembler simply constructs a fresh `Tokens` over the
//! same source.

/// Returns whether a character separates tokens.
fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\0'
}

/// Lazy token stream over assembly source text.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    /// Starts a token stream at the beginning of `source`.
    pub const fn new(source: &'a str) -> Self {
        Self { rest: source }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    /// Yields the next token, or `None` at end of source.
    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest.trim_start_matches(is_separator);
        if rest.is_empty() {
            self.rest = rest;
            return None;
        }
        let end = rest.find(is_separator).unwrap_or(rest.len());
        let (token, rest) = rest.split_at(end);
        self.rest = rest;
        Some(token)
    }
}
