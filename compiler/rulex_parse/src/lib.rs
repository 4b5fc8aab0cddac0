//! Token cursor for recursive descent parsers.
//!
//! The scanner in `rulex_lexer` produces tokens; this crate provides the
//! [`Cursor`] a hand-written parser uses to inspect, match and consume them,
//! with positional errors for anything unexpected.

mod cursor;
mod error;

pub use cursor::Cursor;
pub use error::{CursorError, ParseError};

pub use rulex_ir::{Location, Token, TokenType};
