#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::tables::EOF;
use pretty_assertions::assert_eq;

const NAME: u8 = 3;
const RPAREN: u8 = 38;
const COMMA: u8 = 39;

/// State after `class`.
const AFTER_CLASS: u16 = 43;
/// State after `class A ( B`.
const IN_PARENT_LIST: u16 = 196;
/// State after `x =`.
const AFTER_ASSIGN: u16 = 25;

#[test]
fn test_token_set_iterates_in_order() {
    let set = TokenSet::new().with(COMMA).with(NAME).with(EOF);
    assert_eq!(set.count(), 3);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![EOF, NAME, COMMA]);
    assert_eq!(set.iter().len(), 3);
}

#[test]
fn test_empty_token_set() {
    let set = TokenSet::default();
    assert!(set.is_empty());
    assert_eq!(set.iter().next(), None);
    assert_eq!(set.format_expected(), "");
}

#[test]
fn test_expected_in_state() {
    let set = TokenSet::expected_in(IN_PARENT_LIST);
    assert_eq!(set.iter().collect::<Vec<_>>(), vec![RPAREN, COMMA]);
    assert_eq!(set.format_expected(), "')' or ','");
}

#[test]
fn test_message_lists_single_expected() {
    assert_eq!(
        syntax_error_message(Some(EOF), AFTER_CLASS, 4),
        "syntax error, unexpected end of file, expecting NAME"
    );
}

#[test]
fn test_message_lists_several_expected() {
    assert_eq!(
        syntax_error_message(Some(EOF), IN_PARENT_LIST, 4),
        "syntax error, unexpected end of file, expecting ')' or ','"
    );
}

#[test]
fn test_message_omits_long_expected_list() {
    assert_eq!(
        syntax_error_message(Some(RPAREN), AFTER_ASSIGN, 4),
        "syntax error, unexpected ')'"
    );
    assert_eq!(
        syntax_error_message(Some(EOF), IN_PARENT_LIST, 1),
        "syntax error, unexpected end of file"
    );
}

#[test]
fn test_message_without_lookahead() {
    assert_eq!(syntax_error_message(None, AFTER_CLASS, 4), "syntax error");
}

#[test]
fn test_resume_points_are_declaration_lists() {
    assert!(is_resume_point(4));
    assert!(!is_resume_point(0));
    assert!(!is_resume_point(AFTER_CLASS));
}

#[test]
fn test_can_resume_with_declaration_starts() {
    let def = 9;
    let class = 8;
    let at = 47;
    for terminal in [def, class, at, NAME, EOF] {
        assert!(can_resume_with(&[0, 4], terminal), "terminal {terminal}");
    }
    assert!(!can_resume_with(&[0, 4], RPAREN));
}

#[test]
fn test_open_blocks_counts_indents() {
    // 89 and 142 are entered by shifting INDENT; 4 by `alldefs`.
    assert_eq!(open_blocks(&[0, 4]), 0);
    assert_eq!(open_blocks(&[0, 4, 89]), 1);
    assert_eq!(open_blocks(&[0, 4, 89, 142, 4]), 2);
}

#[test]
fn test_expected_note_only_for_long_lists() {
    assert_eq!(expected_note(IN_PARENT_LIST, 4), None);
    assert_eq!(
        expected_note(IN_PARENT_LIST, 1),
        Some("expecting ')' or ','".to_string())
    );
    let note = expected_note(AFTER_ASSIGN, 4).unwrap();
    assert!(note.starts_with("expecting NAME or NUMBER or STRING"), "{note}");
}
