// src/depth/cursor.rs
// Forward-only cursor over classified lines, one line of lookahead.

use thiserror::Error;

use super::classify::{classify_line, LineClass};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub class: LineClass,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, class: classify_line(text) }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("cursor at {index} is past the end of {len} lines")]
    OutOfRange { index: usize, len: usize },
}

pub struct TokenCursor<'a> {
    tokens: Vec<Token<'a>>,
    i: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new<S: AsRef<str>>(lines: &'a [S]) -> Self {
        let tokens = lines.iter().map(|l| Token::new(l.as_ref())).collect();
        Self { tokens, i: 0 }
    }

    pub fn current(&self) -> Result<Token<'a>, CursorError> {
        self.tokens
            .get(self.i)
            .copied()
            .ok_or(CursorError::OutOfRange { index: self.i, len: self.tokens.len() })
    }

    /// The line after `current()`, `None` at the end.
    pub fn peek_next(&self) -> Option<Token<'a>> {
        self.tokens.get(self.i + 1).copied()
    }

    pub fn advance(&mut self) {
        if self.i < self.tokens.len() {
            self.i += 1;
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.i >= self.tokens.len()
    }

    pub fn position(&self) -> usize {
        self.i
    }

    /// True when `current()` opens a position group: an all-caps code
    /// directly followed by a jersey number. Pure peek.
    pub fn at_position_entry(&self) -> bool {
        matches!(self.current(), Ok(t) if t.class == LineClass::PositionCode)
            && matches!(self.peek_next(), Some(n) if n.class == LineClass::Jersey)
    }
}
