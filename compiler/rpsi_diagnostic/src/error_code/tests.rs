use super::*;

#[test]
fn test_phase_classification() {
    assert!(ErrorCode::E0001.is_lexer_error());
    assert!(ErrorCode::E1002.is_parser_error());
    assert!(ErrorCode::E9002.is_internal_error());
    assert!(!ErrorCode::E1002.is_lexer_error());
}

#[test]
fn test_display_matches_as_str() {
    for code in ErrorCode::ALL {
        assert_eq!(code.to_string(), code.as_str());
        assert!(!code.description().is_empty());
    }
}

#[test]
fn test_from_code_str() {
    assert_eq!(ErrorCode::from_code_str("E1003"), Some(ErrorCode::E1003));
    assert_eq!(ErrorCode::from_code_str("e0002"), Some(ErrorCode::E0002));
    assert_eq!(ErrorCode::from_code_str("E4242"), None);
}

#[test]
fn test_phases_follow_code_prefix() {
    for &code in ErrorCode::ALL {
        let expected = match &code.as_str()[..2] {
            "E0" => Phase::Lexer,
            "E1" => Phase::Parser,
            _ => Phase::Internal,
        };
        assert_eq!(code.phase(), expected, "{code}");
    }
    assert_eq!(ErrorCode::E1003.description(), "unclosed delimiter");
}
