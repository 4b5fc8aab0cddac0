//! Command handlers for the rulex CLI.

mod lex;

pub use lex::{lex_file, render_tokens};
