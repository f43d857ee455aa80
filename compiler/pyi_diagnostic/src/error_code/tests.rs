use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E9002.as_str(), "E9002");
}

#[test]
fn test_descriptions() {
    assert_eq!(ErrorCode::E1001.description(), "syntax error");
    assert_eq!(ErrorCode::E1002.description(), "invalid declaration");
}
