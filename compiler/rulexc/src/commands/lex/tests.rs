use super::*;
use pretty_assertions::assert_eq;
use rulex_lexer::{Lexer, Rule};

#[test]
fn test_render_tokens_one_per_line() {
    let lexer = Lexer::with_rules([Rule::new("Let", "let"), Rule::new(";", ";")]);
    let listing = render_tokens(lexer.scan("let x;\n"));

    assert_eq!(
        listing,
        "Let \"let\" @ 0:0-0:3\n\
         Word \"x\" @ 0:4-0:5\n\
         ; \";\" @ 0:5-0:6\n\
         EndOfFile \"EndOfFile\" @ 1:0-1:0\n"
    );
}

#[test]
fn test_render_escapes_control_characters() {
    let settings = rulex_ir::Settings {
        skip_whitespace: false,
        ..rulex_ir::Settings::default()
    };
    let lexer = Lexer::new([], settings);
    let listing = render_tokens(lexer.scan("\t"));
    assert_eq!(
        listing,
        "Tab \"\\t\" @ 0:0-0:4\nEndOfFile \"EndOfFile\" @ 0:4-0:4\n"
    );
}

#[test]
fn test_lex_file_reports_missing_rules() {
    let error = lex_file(
        Path::new("does-not-exist.txt"),
        Path::new("does-not-exist.json"),
    )
    .unwrap_err();

    assert!(matches!(error, LoadError::Io { ref path, .. } if path.ends_with("does-not-exist.json")));
}
