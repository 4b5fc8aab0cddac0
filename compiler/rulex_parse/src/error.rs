//! Cursor error types.
//!
//! Two families:
//! - [`CursorError`]: the cursor was used out of bounds. These are caller
//!   bugs, not input problems.
//! - [`ParseError`]: the input did not contain the expected token. Carries
//!   the offending token so the message can point at it.

use rulex_ir::{Location, Token};
use thiserror::Error;

/// Out-of-bounds use of a [`Cursor`](crate::Cursor).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum CursorError {
    #[error("unable to advance past end")]
    AdvancePastEnd,
    #[error("unable to retrieve current token at index {index}")]
    NoCurrent { index: usize },
    #[error("failed getting previous token")]
    NoPrevious,
}

/// An expected token was missing.
///
/// Displays as `[line L, column C] message`, with the location taken from the
/// start of the offending token.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("[{}] {message}", .token.start)]
pub struct ParseError {
    /// The token found where something else was expected.
    pub token: Token,
    pub message: String,
}

impl ParseError {
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        ParseError {
            token,
            message: message.into(),
        }
    }

    /// Where the offending token starts.
    #[inline]
    pub fn location(&self) -> Location {
        self.token.start
    }
}

#[cfg(test)]
mod tests;
