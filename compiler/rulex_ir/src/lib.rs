//! Rulex IR - data model shared by the scanner and the token cursor.
//!
//! This crate contains the value types that flow through a rulex pipeline:
//! - `Location` for caret positions (line/column, not byte offsets)
//! - `TokenType` and `Token` for scanner output
//! - `Rule` for declarative match rules
//! - `Settings` for scanner configuration
//!
//! Everything here is plain data. Scanning lives in `rulex_lexer`, token
//! consumption in `rulex_parse`.

mod location;
mod rule;
mod settings;
mod token;

pub use location::Location;
pub use rule::Rule;
pub use settings::Settings;
pub use token::{Token, TokenType};
