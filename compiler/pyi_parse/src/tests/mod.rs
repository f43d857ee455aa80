#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end parser tests over token scripts.



use std::cell::Cell;
use std::rc::Rc;

use pretty_assertions::assert_eq;
use pyi_diagnostic::ErrorCode;
use pyi_ir::script::tokenize;
use pyi_ir::{Span, Token, TokenKind};

use crate::{parse, ParseFailure, ParserOptions, RecoveryMode};
use semantics::SexpSemantics;

fn parse_with(src: &str, options: ParserOptions) -> (Result<Vec<String>, ParseFailure>, SexpSemantics) {
    let tokens = tokenize(src).unwrap();
    let mut semantics = SexpSemantics::default();
    let result = parse(tokens.into_iter(), &mut semantics, &options);
    (result, semantics)
}

fn decls(src: &str) -> Vec<String> {
    parse_with(src, ParserOptions::default()).0.unwrap()
}

fn decl(src: &str) -> String {
    let mut decls = decls(src);
    assert_eq!(decls.len(), 1, "{src}: {decls:?}");
    decls.remove(0)
}

fn side_effects(src: &str) -> Vec<String> {
    let (result, semantics) = parse_with(src, ParserOptions::default());
    assert_eq!(result.unwrap(), Vec::<String>::new());
    semantics.side_effects
}

fn resync() -> ParserOptions {
    ParserOptions {
        recovery: RecoveryMode::Resync,
        ..ParserOptions::default()
    }
}

fn summary(failure: &ParseFailure) -> Vec<(ErrorCode, String, Span)> {
    failure
        .errors()
        .map(|e| (e.code, e.message.clone(), e.span))
        .collect()
}

fn syntax(message: &str, start: u32, end: u32) -> (ErrorCode, String, Span) {
    (ErrorCode::E1001, message.to_string(), Span::new(start, end))
}

// Grammar shapes

#[test]
fn test_empty_input() {
    let (result, semantics) = parse_with("", ParserOptions::default());
    assert_eq!(result.unwrap(), Vec::<String>::new());
    assert_eq!(semantics.log, vec!["finish"]);
}

#[test]
fn test_leading_docstring() {
    assert_eq!(decl("TRIPLEQUOTED x: int"), "x: int");
}

#[test]
fn test_dotted_type() {
    assert_eq!(decl("x: foo.bar.Baz"), "x: foo.bar.Baz");
}

#[test]
fn test_union_is_left_nested() {
    assert_eq!(decl("x: a or b or c"), "x: ((a | b) | c)");
}

#[test]
fn test_and_binds_tighter_than_or() {
    assert_eq!(decl("x: a and b or c"), "x: ((a & b) | c)");
    assert_eq!(decl("x: a or b and c"), "x: (a | (b & c))");
}

#[test]
fn test_type_parameters() {
    assert_eq!(
        decl(r#"x: Tuple[[int, str], 3, "s"]"#),
        r#"x: Tuple[tuple[int, str], 3, "s"]"#
    );
    assert_eq!(
        decl("x: Callable[[], nothing] = ..."),
        "x: Callable[tuple[], nothing]"
    );
    assert_eq!(decl("x: Dict[()]"), "x: Dict[]");
}

#[test]
fn test_type_comment_constant() {
    assert_eq!(decl("x = ... TYPECOMMENT int"), "x: int");
}

#[test]
fn test_tuple_literals() {
    assert_eq!(decl("x = int,"), "x: tuple[int]");
    assert_eq!(decl("x = (int, str)"), "x: tuple[int, str]");
    assert_eq!(decl("x = (int,)"), "x: tuple[int]");
}

// Conditions

#[test]
fn test_and_chain_nests_left() {
    assert_eq!(
        decl(r#"if a.b == "x" and c.d == "y" and e.f == "z": INDENT x: int DEDENT"#),
        r#"if ((a.b == "x" and c.d == "y") and e.f == "z") => x: int"#
    );
}

#[test]
fn test_and_binds_tighter_in_conditions() {
    assert_eq!(
        decl(
            r#"if sys.platform == "linux" or sys.platform == "darwin" and sys.platform == "win32": INDENT x: int DEDENT"#
        ),
        r#"if (sys.platform == "linux" or (sys.platform == "darwin" and sys.platform == "win32")) => x: int"#
    );
}

#[test]
fn test_version_slices() {
    assert_eq!(
        decl("if sys.version_info[1:] >= (3,): INDENT x: int DEDENT"),
        "if sys.version_info[1:] >= (3) => x: int"
    );
    assert_eq!(
        decl("if sys.version_info[:5] == 3: INDENT x: int DEDENT"),
        "if sys.version_info[:5] == 3 => x: int"
    );
    assert_eq!(
        decl("if sys.version_info[1:5:2] != (3, 8): INDENT x: int DEDENT"),
        "if sys.version_info[1:5:2] != (3, 8) => x: int"
    );
}

#[test]
fn test_if_else_in_class_body() {
    assert_eq!(
        decl(
            r#"class A: INDENT if sys.platform == "linux": INDENT x: int DEDENT else: INDENT y: str DEDENT DEDENT"#
        ),
        r#"class A() {if sys.platform == "linux" => x: int; else => y: str}"#
    );
}

// Classes and functions

#[test]
fn test_class_name_registered_before_body() {
    let (result, semantics) = parse_with(
        "class A: INDENT def f(self) -> A: ... DEDENT",
        ParserOptions::default(),
    );
    assert_eq!(result.unwrap(), vec!["class A() {def f(self) -> A}"]);
    assert_eq!(
        semantics.log,
        vec![
            "register_class_name A",
            "new_type A",
            "new_function f",
            "new_class A",
            "finish",
        ]
    );
}

#[test]
fn test_class_parents() {
    assert_eq!(
        decl("class B(A, metaclass=Meta): pass"),
        "class B(A, metaclass=Meta) {}"
    );
    assert_eq!(
        decl("class C(NamedTuple): INDENT x: int y = Optional[str] DEDENT"),
        "class C(NamedTuple) {x: int; alias y = Optional[str]}"
    );
}

#[test]
fn test_decorated_async_function() {
    assert_eq!(
        decl(
            "@dec.orator async def f(x=1, *, y: int = ..., **kw) -> Dict[str, ...]: INDENT x = List[int] raise ValueError() DEDENT"
        ),
        "@dec.orator async def f(x = 1, *, y: int = ..., **kw) -> Dict[str, ...] {x = List[int], raise ValueError}"
    );
}

#[test]
fn test_function_bodies() {
    assert_eq!(
        decl("def f() -> int: TYPECOMMENT ignore INDENT raise E DEDENT"),
        "def f() -> int {raise E}"
    );
    assert_eq!(decl("def f(self) -> None: pass"), "def f(self) -> None");
}

// Module-level side effects

#[test]
fn test_imports() {
    assert_eq!(side_effects("import a.b as c, d"), vec!["import a.b as c, d"]);
    assert_eq!(side_effects("from . import x"), vec!["from . import x"]);
    assert_eq!(side_effects("from .. import y"), vec!["from .. import y"]);
    assert_eq!(
        side_effects("from ..m import (a, b,)"),
        vec!["from ..m import a, b"]
    );
}

#[test]
fn test_type_var() {
    assert_eq!(
        side_effects(r#"T = TypeVar("T", int, str, bound=Foo)"#),
        vec![r#"T = TypeVar("T", int, str, bound=Foo)"#]
    );
}

#[test]
fn test_named_tuples() {
    assert_eq!(
        side_effects(r#"P = namedtuple("P", ["x", "y"])"#),
        vec!["P = namedtuple P(x: ?, y: ?)"]
    );
    assert_eq!(
        side_effects(r#"Q = NamedTuple("Q", [("x", int), ("y", str)])"#),
        vec!["Q = namedtuple Q(x: int, y: str)"]
    );
}

#[test]
fn test_typed_dict_keeps_last_duplicate_in_first_position() {
    assert_eq!(
        side_effects(r#"X = TypedDict("X", {"a": int, "b": str, "a": float}, total=False)"#),
        vec!["X = typeddict X{a: float, b: str} total=False"]
    );
}

#[test]
fn test_new_type() {
    assert_eq!(
        side_effects(r#"UserId = NewType("UserId", int)"#),
        vec!["UserId = newtype UserId(int)"]
    );
}

#[test]
fn test_all_list() {
    assert_eq!(
        side_effects(r#"__all__ = ["a", "b"]"#),
        vec![r#"__all__ = ["a", "b"]"#]
    );
}

// Errors

#[test]
fn test_syntax_error_lists_expected() {
    let (result, _) = parse_with("class", ParserOptions::default());
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![syntax(
            "syntax error, unexpected end of file, expecting NAME",
            5,
            5
        )]
    );
}

#[test]
fn test_lexer_error_message_is_reported() {
    let (result, _) = parse_with(r#"x: !"bad char""#, ParserOptions::default());
    let failure = result.unwrap_err();
    assert_eq!(
        summary(&failure),
        vec![(ErrorCode::E0001, "bad char".to_string(), Span::new(3, 14))]
    );
}

#[test]
fn test_first_error_mode_stops() {
    let (result, semantics) = parse_with(
        "def f(x: ) -> int: ... def g() -> str: ...",
        ParserOptions::default(),
    );
    let failure = result.unwrap_err();
    assert_eq!(
        summary(&failure),
        vec![syntax("syntax error, unexpected ')'", 9, 10)]
    );
    assert!(!semantics.log.iter().any(|e| e.starts_with("new_function")));
}

#[test]
fn test_resync_continues_at_next_declaration() {
    let (result, semantics) = parse_with("def f(x: ) -> int: ... def g() -> str: ...", resync());
    let failure = result.unwrap_err();
    assert_eq!(failure.len(), 1);
    assert_eq!(
        summary(&failure),
        vec![syntax("syntax error, unexpected ')'", 9, 10)]
    );
    assert_eq!(
        failure.primary.notes,
        vec!["expecting NAME or NOTHING or NAMEDTUPLE or COLL_NAMEDTUPLE or NEWTYPE or TYPEDDICT or '(' or '?'"]
    );
    assert!(semantics.log.contains(&"new_function g".to_string()));
    assert!(semantics.log.contains(&"finish".to_string()));
}

#[test]
fn test_resync_reports_each_error() {
    let (result, semantics) = parse_with(
        "def f(x: ) -> int: ... def g(: ... def h() -> str: ...",
        resync(),
    );
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![
            syntax("syntax error, unexpected ')'", 9, 10),
            syntax("syntax error, unexpected ':', expecting ')'", 29, 30),
        ]
    );
    assert!(semantics.log.contains(&"new_function h".to_string()));
}

#[test]
fn test_resync_inside_class_body() {
    let (result, semantics) = parse_with(
        "class A: INDENT def f(x: ) -> int: ... def g(self) -> int: ... DEDENT x: int",
        resync(),
    );
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![syntax("syntax error, unexpected ')'", 25, 26)]
    );
    for entry in ["new_function g", "new_class A", "finish"] {
        assert!(semantics.log.contains(&entry.to_string()), "{entry}");
    }
}

#[test]
fn test_resync_skips_abandoned_body() {
    let (result, semantics) = parse_with(
        "def f(x: ) -> int: INDENT x = List[int] DEDENT y: int",
        resync(),
    );
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![syntax("syntax error, unexpected ')'", 9, 10)]
    );
    assert!(semantics.log.contains(&"new_type int".to_string()));
    assert!(!semantics.log.contains(&"new_type List".to_string()));
}

#[test]
fn test_resync_skips_nested_method_body() {
    let (result, semantics) = parse_with(
        "class A: INDENT def f(x: ) -> int: INDENT x = int raise E DEDENT \
         def g(self) -> int: ... DEDENT x: int",
        resync(),
    );
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![syntax("syntax error, unexpected ')'", 25, 26)]
    );
    for entry in ["new_function g", "new_class A", "finish"] {
        assert!(semantics.log.contains(&entry.to_string()), "{entry}");
    }
}

#[test]
fn test_resync_abandons_open_if_block() {
    let (result, semantics) = parse_with(r#"if sys.platform == "linux": x: int y: int"#, resync());
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![syntax("syntax error, unexpected NAME, expecting INDENT", 28, 29)]
    );
    let abandoned = semantics.log.iter().filter(|e| *e == "abandon_if").count();
    assert_eq!(abandoned, 1);
    assert!(semantics.log.contains(&"finish".to_string()));
}

#[test]
fn test_abort_abandons_open_if_block() {
    let (result, semantics) = parse_with(
        r#"if sys.platform == "linux": INDENT def f(x: ) -> int: ... DEDENT"#,
        ParserOptions::default(),
    );
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![syntax("syntax error, unexpected ')'", 44, 45)]
    );
    assert_eq!(semantics.log, vec!["abandon_if"]);
}

#[test]
fn test_error_limit() {
    let options = ParserOptions {
        max_errors: 1,
        ..resync()
    };
    let (result, semantics) = parse_with(
        "def f(x: ) -> int: ... def g(: ... def h() -> str: ...",
        options,
    );
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![
            syntax("syntax error, unexpected ')'", 9, 10),
            (
                ErrorCode::E9002,
                "too many errors (limit 1)".to_string(),
                Span::new(29, 30)
            ),
        ]
    );
    assert!(!semantics.log.contains(&"new_function h".to_string()));
}

#[test]
fn test_error_limit_notes_dropped_error() {
    let options = ParserOptions {
        max_errors: 1,
        ..resync()
    };
    let (result, _) = parse_with("def f(x: ) -> int: ... def g(: ...", options);
    let failure = result.unwrap_err();
    assert_eq!(
        failure.additional[0].notes,
        vec!["not reported: syntax error, unexpected ':', expecting ')'"]
    );
    assert_eq!(failure.primary.code, ErrorCode::E1001);
}

#[test]
fn test_semantic_failure_points_at_construct() {
    let (result, _) = parse_with("x: Fail", ParserOptions::default());
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![(
            ErrorCode::E1002,
            "unknown type Fail".to_string(),
            Span::new(3, 7)
        )]
    );
}

#[test]
fn test_function_failure_span_starts_at_def() {
    let (result, _) = parse_with("@d def Fail() -> int: ...", ParserOptions::default());
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![(
            ErrorCode::E1002,
            "bad function Fail".to_string(),
            Span::new(3, 25)
        )]
    );
}

#[test]
fn test_class_failure_span_starts_at_class() {
    let (result, _) = parse_with("@d class Fail: pass", ParserOptions::default());
    assert_eq!(
        summary(&result.unwrap_err()),
        vec![(
            ErrorCode::E1002,
            "bad class Fail".to_string(),
            Span::new(3, 19)
        )]
    );
}

#[test]
fn test_resync_after_semantic_failure() {
    let (result, semantics) = parse_with("x: Fail y: int", resync());
    let failure = result.unwrap_err();
    assert_eq!(failure.len(), 1);
    assert_eq!(failure.primary.code, ErrorCode::E1002);
    assert!(semantics.log.contains(&"new_type int".to_string()));
}

// Token sources

#[test]
fn test_explicit_eof_token_ends_input() {
    let mut tokens: Vec<Token> = tokenize("class").unwrap().into_iter().collect();
    tokens.push(Token::new(TokenKind::Eof, Span::new(7, 7)));
    tokens.push(Token::new(TokenKind::Name("A".to_string()), Span::new(8, 9)));
    let mut semantics = SexpSemantics::default();
    let failure = parse(tokens.into_iter(), &mut semantics, &ParserOptions::default()).unwrap_err();
    assert_eq!(failure.primary.span, Span::new(7, 7));
    assert_eq!(semantics.log, Vec::<String>::new());
}

/// Counts requests made after the first `None`.
struct Exhaustible {
    tokens: std::vec::IntoIter<Token>,
    exhausted: bool,
    calls_after_end: Rc<Cell<usize>>,
}

impl pyi_ir::TokenSource for Exhaustible {
    fn next_token(&mut self) -> Option<Token> {
        if self.exhausted {
            self.calls_after_end.set(self.calls_after_end.get() + 1);
            return None;
        }
        let token = self.tokens.next();
        self.exhausted = token.is_none();
        token
    }
}

#[test]
fn test_source_not_polled_after_end() {
    let calls_after_end = Rc::new(Cell::new(0));
    let source = Exhaustible {
        tokens: tokenize("x: int").unwrap().into_iter().collect::<Vec<_>>().into_iter(),
        exhausted: false,
        calls_after_end: Rc::clone(&calls_after_end),
    };
    let mut semantics = SexpSemantics::default();
    let result = parse(source, &mut semantics, &ParserOptions::default());
    assert_eq!(result.unwrap(), vec!["x: int"]);
    assert_eq!(calls_after_end.get(), 0);
}
