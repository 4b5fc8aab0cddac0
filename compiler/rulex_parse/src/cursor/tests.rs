use super::*;
use pretty_assertions::assert_eq;
use rulex_ir::Location;

fn ty(name: &str) -> TokenType {
    TokenType::from(name)
}

/// Tokens for `let x = 42`, one per column group.
fn let_tokens() -> Vec<Token> {
    vec![
        Token::new(ty("Let"), "let", Location::new(0, 0), Location::new(0, 3)),
        Token::new(TokenType::Word, "x", Location::new(0, 4), Location::new(0, 5)),
        Token::new(ty("="), "=", Location::new(0, 6), Location::new(0, 7)),
        Token::new(TokenType::Integer, "42", Location::new(0, 8), Location::new(0, 10)),
    ]
}

#[test]
fn test_cursor_navigation() {
    let tokens = let_tokens();
    let mut cursor = Cursor::new(&tokens);

    assert!(!cursor.is_at_end());
    assert!(cursor.check(&ty("Let")));

    cursor.advance().unwrap();
    assert!(cursor.check(&TokenType::Word));
    assert_eq!(cursor.position(), 1);

    cursor.advance().unwrap();
    cursor.advance().unwrap();
    assert!(cursor.check(&TokenType::Integer));
    assert!(!cursor.is_at_end());

    cursor.advance().unwrap();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 4);
}

#[test]
fn test_advance_past_end_fails() {
    let tokens = let_tokens();
    let mut cursor = Cursor::at(&tokens, 3);
    assert!(cursor.advance().is_ok());
    assert_eq!(cursor.advance(), Err(CursorError::AdvancePastEnd));
    assert_eq!(cursor.position(), 4);
}

#[test]
fn test_empty_stream_starts_at_end() {
    let mut cursor = Cursor::new(&[]);

    assert!(cursor.is_at_end());
    assert_eq!(cursor.current(), Err(CursorError::NoCurrent { index: 0 }));
    assert_eq!(cursor.advance(), Err(CursorError::AdvancePastEnd));
    assert!(!cursor.check(&TokenType::EndOfFile));
}

#[test]
fn test_start_index() {
    let tokens = let_tokens();

    let cursor = Cursor::at(&tokens, 1);
    assert!(!cursor.is_at_end());
    assert_eq!(cursor.current().unwrap().lexeme, "x");

    let cursor = Cursor::at(&tokens, 9);
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current(), Err(CursorError::NoCurrent { index: 9 }));
}

#[test]
fn test_check_lexeme() {
    let tokens = let_tokens();
    let mut cursor = Cursor::at(&tokens, 2);

    assert!(cursor.check_lexeme("="));
    assert!(!cursor.check_lexeme("let"));

    cursor.set_position(4);
    assert!(!cursor.check_lexeme("42"));
}

#[test]
fn test_advance_if_only_moves_on_match() {
    let tokens = let_tokens();
    let mut cursor = Cursor::new(&tokens);

    assert!(!cursor.advance_if(&TokenType::Word));
    assert_eq!(cursor.position(), 0);

    assert!(cursor.advance_if(&ty("Let")));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_advance_if_at_end() {
    let tokens = let_tokens();
    let mut cursor = Cursor::at(&tokens, 4);
    assert!(!cursor.advance_if(&TokenType::Integer));
    assert_eq!(cursor.position(), 4);
}

#[test]
fn test_peek_check() {
    let tokens = let_tokens();
    let cursor = Cursor::at(&tokens, 1);

    assert!(cursor.peek_check(0, &TokenType::Word));
    assert!(cursor.peek_check(1, &ty("=")));
    assert!(cursor.peek_check(2, &TokenType::Integer));
    assert!(!cursor.peek_check(3, &TokenType::Integer));
    assert!(!cursor.peek_check(usize::MAX, &TokenType::Integer));
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_consume_success_returns_consumed_token() {
    let tokens = let_tokens();
    let mut cursor = Cursor::new(&tokens);

    let token = cursor.consume(&ty("Let"), "expected 'let'").unwrap();
    assert_eq!(token.lexeme, "let");
    assert_eq!(cursor.position(), 1);

    let name = cursor.consume(&TokenType::Word, "expected a name").unwrap();
    assert_eq!(name.lexeme, "x");
}

#[test]
fn test_consume_failure_reports_current_token() {
    let tokens = let_tokens();
    let mut cursor = Cursor::at(&tokens, 1);

    let error = cursor.consume(&ty("="), "expected '='").unwrap_err();
    assert_eq!(error.token, tokens[1]);
    assert_eq!(error.message, "expected '='");
    assert_eq!(error.to_string(), "[line 0, column 4] expected '='");
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_consume_failure_at_end_reports_previous_token() {
    let tokens = let_tokens();
    let mut cursor = Cursor::at(&tokens, 4);

    let error = cursor.consume(&ty(";"), "expected ';'").unwrap_err();
    assert_eq!(error.token, tokens[3]);
    assert_eq!(error.location(), Location::new(0, 8));
}

#[test]
fn test_consume_failure_on_empty_stream_reports_eof_at_origin() {
    let mut cursor = Cursor::new(&[]);

    let error = cursor.consume(&TokenType::Word, "expected a name").unwrap_err();
    assert_eq!(error.token, Token::eof());
    assert_eq!(error.location(), Location::ZERO);
}

#[test]
fn test_consume_or_returns_caller_error() {
    #[derive(Debug, PartialEq)]
    struct MissingSemicolon;

    let tokens = let_tokens();
    let mut cursor = Cursor::new(&tokens);

    assert_eq!(
        cursor.consume_or(&ty(";"), MissingSemicolon),
        Err(MissingSemicolon)
    );
    assert_eq!(cursor.position(), 0);

    let token = cursor.consume_or(&ty("Let"), MissingSemicolon).unwrap();
    assert_eq!(token.kind, ty("Let"));
}

#[test]
fn test_current_synthesizes_eof_when_enabled() {
    let tokens = let_tokens();
    let cursor = Cursor::at(&tokens, 4).with_eof_on_exhaustion(true);

    let current = cursor.current().unwrap();
    assert_eq!(current.kind, TokenType::EndOfFile);
    assert_eq!(current.start, Location::ZERO);
    // The synthetic token does not make the cursor advanceable.
    assert!(cursor.is_at_end());
}

#[test]
fn test_previous() {
    let tokens = let_tokens();
    let mut cursor = Cursor::new(&tokens);
    let fallback = Token::eof();

    assert_eq!(cursor.previous(), Err(CursorError::NoPrevious));
    assert_eq!(cursor.previous_opt(), None);
    assert_eq!(cursor.previous_or(&fallback), &fallback);

    cursor.advance().unwrap();
    assert_eq!(cursor.previous().unwrap().lexeme, "let");
    assert_eq!(cursor.previous_or(&fallback).lexeme, "let");

    cursor.set_position(4);
    assert_eq!(cursor.previous_opt().map(|t| t.lexeme.as_str()), Some("42"));
}

#[test]
fn test_previous_out_of_range() {
    let tokens = let_tokens();
    let cursor = Cursor::at(&tokens, 9);
    assert_eq!(cursor.previous(), Err(CursorError::NoPrevious));
}

#[test]
fn test_backtracking_with_positions() {
    let tokens = let_tokens();
    let mut cursor = Cursor::new(&tokens);

    let saved = cursor.position();
    cursor.advance().unwrap();
    cursor.advance().unwrap();
    assert!(cursor.check(&ty("=")));

    cursor.set_position(saved);
    assert!(cursor.check(&ty("Let")));

    cursor.set_position(4);
    assert!(cursor.is_at_end());
    cursor.seek_beginning();
    assert!(!cursor.is_at_end());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_initialize_replaces_stream() {
    let first = let_tokens();
    let second = vec![Token::new(
        TokenType::Word,
        "y",
        Location::ZERO,
        Location::new(0, 1),
    )];
    let mut cursor = Cursor::at(&first, 3);

    cursor.initialize(&second);
    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.tokens().len(), 1);
    assert!(cursor.check(&TokenType::Word));

    cursor.initialize_at(&first, 2);
    assert!(cursor.check(&ty("=")));

    cursor.initialize(&[]);
    assert!(cursor.is_at_end());
}
