//! Rule-driven lexer.
//!
//! Turns text into a lazy stream of [`Token`]s using a caller-supplied rule
//! set and [`Settings`]. The engine never fails: anything it cannot classify
//! degrades to a single-character catch-all token, and unterminated strings
//! or comments end at end of input with whatever was read.
//!
//! # Example
//!
//! ```ignore
//! use rulex_ir::{Rule, TokenType};
//! use rulex_lexer::Lexer;
//!
//! let lexer = Lexer::with_rules([
//!     Rule::new("Let", "let"),
//!     Rule::new("=", "="),
//!     Rule::new(";", ";"),
//! ]);
//! let kinds: Vec<_> = lexer.scan("let x = 42;").map(|t| t.kind).collect();
//! assert_eq!(kinds.last(), Some(&TokenType::EndOfFile));
//! ```

mod cursor;
mod escape;
mod lexer;

pub use escape::resolve_escape;
pub use lexer::{Lexer, Tokens};

pub use rulex_ir::{Location, Rule, Settings, Token, TokenType};
