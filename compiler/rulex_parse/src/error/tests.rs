use super::*;
use pretty_assertions::assert_eq;
use rulex_ir::TokenType;

#[test]
fn test_parse_error_display_points_at_token() {
    let token = Token::new(
        TokenType::Word,
        "x",
        Location::new(3, 7),
        Location::new(3, 8),
    );
    let error = ParseError::new(token, "expected ';'");

    assert_eq!(error.to_string(), "[line 3, column 7] expected ';'");
    assert_eq!(error.location(), Location::new(3, 7));
}

#[test]
fn test_cursor_error_messages() {
    assert_eq!(
        CursorError::AdvancePastEnd.to_string(),
        "unable to advance past end"
    );
    assert_eq!(
        CursorError::NoCurrent { index: 4 }.to_string(),
        "unable to retrieve current token at index 4"
    );
    assert_eq!(
        CursorError::NoPrevious.to_string(),
        "failed getting previous token"
    );
}
