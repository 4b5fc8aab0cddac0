//! `rulex lex`: dump the tokens of a file.

use std::fmt::Write as _;
use std::path::Path;

use rulex_ir::Token;

use crate::rule_file::{load_rules, read_source};
use crate::LoadError;

/// Scan `path` with the rules in `rules_path` and return the token listing.
pub fn lex_file(path: &Path, rules_path: &Path) -> Result<String, LoadError> {
    let lexer = load_rules(rules_path)?.into_lexer();
    let source = read_source(path)?;
    Ok(render_tokens(lexer.scan(&source)))
}

/// One line per token: `Kind "lexeme" @ line:column-line:column`.
pub fn render_tokens(tokens: impl IntoIterator<Item = Token>) -> String {
    let mut out = String::new();
    for token in tokens {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{} {:?} @ {}:{}-{}:{}",
            token.kind,
            token.lexeme,
            token.start.line,
            token.start.column,
            token.end.line,
            token.end.column,
        );
    }
    out
}

#[cfg(test)]
mod tests;
