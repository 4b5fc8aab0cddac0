//! Tokens produced by the scanner.

mod kind;

pub use kind::TokenType;

use std::fmt;

use crate::Location;

/// A typed, positioned piece of scanned text.
///
/// `start` is where the token begins, `end` is the caret position right after
/// the last character consumed for it. Catch-all tokens are the exception:
/// they end where they start.
#[derive(Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: String,
    pub start: Location,
    pub end: Location,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenType, lexeme: impl Into<String>, start: Location, end: Location) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            start,
            end,
        }
    }

    /// Synthetic end-of-file token at the origin.
    ///
    /// `const` so cursors can hand out a `&'static` reference to it.
    pub const fn eof() -> Self {
        Token {
            kind: TokenType::EndOfFile,
            lexeme: String::new(),
            start: Location::ZERO,
            end: Location::ZERO,
        }
    }

    /// Check whether this token has the given type.
    #[inline]
    pub fn is(&self, kind: &TokenType) -> bool {
        self.kind == *kind
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?}) @ {}:{}..{}:{}",
            self.kind,
            self.lexeme,
            self.start.line,
            self.start.column,
            self.end.line,
            self.end.column
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]({}, {})", self.start, self.kind, self.lexeme)
    }
}
