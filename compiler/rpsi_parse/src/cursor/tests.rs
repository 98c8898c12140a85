use super::*;
use pretty_assertions::assert_eq;
use rpsi_lexer::lex;

#[test]
fn test_skips_layout() {
    let tokens = lex("a  # note\n  b");
    let mut cursor = Cursor::new(&tokens);
    assert_eq!(cursor.current_kind(), TokenKind::Identifier);
    assert!(!cursor.newline_before());
    assert_eq!(cursor.advance(), Some(0));
    assert_eq!(cursor.current_kind(), TokenKind::Identifier);
    assert!(cursor.newline_before());
    assert_eq!(cursor.current_span(), Span::new(12, 13));
}

#[test]
fn test_advance_stops_at_eof() {
    let tokens = lex("x");
    let mut cursor = Cursor::new(&tokens);
    assert!(cursor.advance().is_some());
    assert!(cursor.is_at_end());
    assert_eq!(cursor.advance(), None);
    assert!(cursor.is_at_end());
}

#[test]
fn test_lookahead_saturates_at_eof() {
    let tokens = lex("f(");
    let cursor = Cursor::new(&tokens);
    assert_eq!(cursor.nth_kind(1), TokenKind::LParen);
    assert_eq!(cursor.nth_kind(2), TokenKind::Eof);
    assert_eq!(cursor.nth_kind(50), TokenKind::Eof);
}

#[test]
fn test_set_position_round_trip() {
    let tokens = lex("a + b");
    let mut cursor = Cursor::new(&tokens);
    let start = cursor.position();
    cursor.advance();
    cursor.advance();
    assert_eq!(cursor.current_kind(), TokenKind::Identifier);
    assert_eq!(cursor.previous_span(), Span::new(2, 3));
    cursor.set_position(start);
    assert_eq!(cursor.current_span(), Span::new(0, 1));
}

#[test]
fn test_list_without_eof() {
    let tokens = TokenList::from_vec(vec![Token::new(TokenKind::Identifier, Span::new(0, 1))]);
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.current_span(), Span::point(1));
}
