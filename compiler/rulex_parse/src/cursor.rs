//! Token cursor for navigating a materialized token stream.
//!
//! Provides lookahead, conditional advance, and type-checked consumption.
//! Nothing here panics: out-of-bounds use returns [`CursorError`], missing
//! tokens return [`ParseError`].

use rulex_ir::{Token, TokenType};
use tracing::{debug, trace};

use crate::{CursorError, ParseError};

/// Returned by [`Cursor::current`] past the end when
/// [`Cursor::with_eof_on_exhaustion`] is enabled.
static EOF: Token = Token::eof();

/// Cursor over a borrowed token slice.
///
/// Unlike a scanner's output, the slice need not end in an `EndOfFile`
/// token; the cursor tracks the end itself through [`is_at_end`].
///
/// [`is_at_end`]: Cursor::is_at_end
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    tokens: &'a [Token],
    index: usize,
    at_end: bool,
    /// Hand out a synthetic `EndOfFile` from `current()` instead of failing.
    eof_on_exhaustion: bool,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `tokens`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Cursor::at(tokens, 0)
    }

    /// Create a cursor at `index`. Out-of-range indices start at the end.
    pub fn at(tokens: &'a [Token], index: usize) -> Self {
        Cursor {
            tokens,
            index,
            at_end: index >= tokens.len(),
            eof_on_exhaustion: false,
        }
    }

    /// Make [`current`](Self::current) return a synthetic `EndOfFile` token
    /// instead of an error once the tokens run out.
    #[must_use]
    pub fn with_eof_on_exhaustion(mut self, enabled: bool) -> Self {
        self.eof_on_exhaustion = enabled;
        self
    }

    /// Point the cursor at a new token slice, starting from the beginning.
    pub fn initialize(&mut self, tokens: &'a [Token]) {
        self.initialize_at(tokens, 0);
    }

    /// Point the cursor at a new token slice, starting from `index`.
    pub fn initialize_at(&mut self, tokens: &'a [Token], index: usize) {
        self.tokens = tokens;
        self.set_position(index);
    }

    /// Rewind to the first token.
    pub fn seek_beginning(&mut self) {
        self.set_position(0);
    }

    /// Current index into the token slice.
    ///
    /// Save it before speculative parsing and hand it back to
    /// [`set_position`](Self::set_position) to backtrack.
    #[inline]
    pub fn position(&self) -> usize {
        self.index
    }

    /// Move the cursor to `index`.
    pub fn set_position(&mut self, index: usize) {
        self.index = index;
        self.at_end = index >= self.tokens.len();
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// The underlying token slice.
    #[inline]
    pub fn tokens(&self) -> &'a [Token] {
        self.tokens
    }

    /// The current token, if the cursor is on one.
    #[inline]
    fn peek(&self) -> Option<&'a Token> {
        if self.at_end {
            None
        } else {
            self.tokens.get(self.index)
        }
    }

    /// Get the current token.
    pub fn current(&self) -> Result<&'a Token, CursorError> {
        match self.peek() {
            Some(token) => Ok(token),
            None if self.eof_on_exhaustion => Ok(&EOF),
            None => Err(CursorError::NoCurrent { index: self.index }),
        }
    }

    /// Move to the next token.
    pub fn advance(&mut self) -> Result<(), CursorError> {
        let Some(token) = self.peek() else {
            return Err(CursorError::AdvancePastEnd);
        };
        trace!(
            pos = self.index,
            kind = %token.kind,
            line = token.start.line,
            column = token.start.column,
            "advance"
        );
        self.index += 1;
        if self.index >= self.tokens.len() {
            self.at_end = true;
        }
        Ok(())
    }

    /// Check if the current token has the given type. False at the end.
    #[inline]
    pub fn check(&self, kind: &TokenType) -> bool {
        self.peek().is_some_and(|token| token.is(kind))
    }

    /// Check if the current token has the given lexeme. False at the end.
    #[inline]
    pub fn check_lexeme(&self, lexeme: &str) -> bool {
        self.peek().is_some_and(|token| token.lexeme == lexeme)
    }

    /// Advance past the current token if it has the given type.
    ///
    /// Returns whether the cursor moved.
    pub fn advance_if(&mut self, kind: &TokenType) -> bool {
        self.check(kind) && self.advance().is_ok()
    }

    /// Check the type of the token `offset` places ahead without moving.
    ///
    /// `peek_check(0, kind)` looks at the current token. False past the end.
    pub fn peek_check(&self, offset: usize, kind: &TokenType) -> bool {
        self.index
            .checked_add(offset)
            .and_then(|i| self.tokens.get(i))
            .is_some_and(|token| token.is(kind))
    }

    /// Expect the current token to be of the given type, advance and return it.
    ///
    /// On mismatch the cursor stays put and the error carries the current
    /// token, or the previous one at the end, or a synthetic `EndOfFile` at
    /// the origin when there is neither.
    pub fn consume(
        &mut self,
        kind: &TokenType,
        message: impl Into<String>,
    ) -> Result<&'a Token, ParseError> {
        match self.take(kind) {
            Some(token) => Ok(token),
            None => Err(self.make_consume_error(kind, message.into())),
        }
    }

    /// Like [`consume`](Self::consume), but fails with a caller-supplied error.
    pub fn consume_or<E>(&mut self, kind: &TokenType, error: E) -> Result<&'a Token, E> {
        self.take(kind).ok_or(error)
    }

    fn take(&mut self, kind: &TokenType) -> Option<&'a Token> {
        let token = self.peek()?;
        self.advance_if(kind).then_some(token)
    }

    #[cold]
    #[inline(never)]
    fn make_consume_error(&self, kind: &TokenType, message: String) -> ParseError {
        let token = self
            .peek()
            .or_else(|| self.previous_opt())
            .cloned()
            .unwrap_or_else(Token::eof);
        debug!(
            expected = %kind,
            found = %token.kind,
            line = token.start.line,
            column = token.start.column,
            "consume failed"
        );
        ParseError::new(token, message)
    }

    /// The token just behind the cursor.
    pub fn previous(&self) -> Result<&'a Token, CursorError> {
        self.previous_opt().ok_or(CursorError::NoPrevious)
    }

    /// The token just behind the cursor, or `default` when there is none.
    pub fn previous_or(&self, default: &'a Token) -> &'a Token {
        self.previous_opt().unwrap_or(default)
    }

    /// The token just behind the cursor, if any.
    pub fn previous_opt(&self) -> Option<&'a Token> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
    }
}

#[cfg(test)]
mod tests;
