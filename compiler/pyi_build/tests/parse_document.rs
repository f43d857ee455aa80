//! End-to-end tests: token scripts in, documents out.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use pyi_build::{init_tracing, parse_document, BuildOptions};
use pyi_diagnostic::ErrorCode;
use pyi_ir::ast::{Document, TypeExpr};
use pyi_ir::script::tokenize;
use pyi_ir::Span;
use pyi_parse::ParseFailure;

fn parse(src: &str, options: &BuildOptions) -> Result<Document, ParseFailure> {
    init_tracing();
    parse_document(tokenize(src).unwrap().into_iter(), options)
}

const STUB: &str = r#"
TRIPLEQUOTED
import sys
from typing import Any, Optional as Opt
_T = TypeVar("_T", bound=Node)
if sys.version_info >= (3, 9): INDENT
    Path = str
DEDENT else: INDENT
    Path = bytes
DEDENT
class Node(Generic[_T], metaclass=Meta): INDENT
    TRIPLEQUOTED
    children: List[Node]
    def __init__(self, parent: Optional[Node] = ...) -> None: ...
    @overload
    def get(self, key: int) -> Node: ...
    @overload
    def get(self, key: str) -> Node or nothing: ...
DEDENT
def walk(root: Node, *, depth: int = 0) -> Iterator[Node]: INDENT
    raise ValueError
DEDENT
"#;

#[test]
fn test_realistic_stub() {
    let doc = parse(STUB, &BuildOptions::default()).unwrap();

    assert_eq!(doc.imports.len(), 2);
    assert_eq!(doc.type_vars[0].name, "_T");
    assert_eq!(doc.aliases.len(), 1);
    assert_eq!(doc.aliases[0].ty, TypeExpr::named("str"));

    let node = &doc.classes[0];
    assert_eq!(node.name, "Node");
    assert_eq!(node.constants[0].name, "children");
    let methods: Vec<(&str, usize)> = node
        .methods
        .iter()
        .map(|m| (m.name.as_str(), m.signatures.len()))
        .collect();
    assert_eq!(methods, vec![("__init__", 1), ("get", 2)]);
    assert_eq!(
        node.methods[1].signatures[1].return_type,
        TypeExpr::Union(vec![TypeExpr::Class("Node".to_string()), TypeExpr::Nothing])
    );

    let walk = &doc.functions[0].signatures[0];
    assert_eq!(walk.raises, vec![TypeExpr::named("ValueError")]);
    assert_eq!(walk.params.len(), 3);
}

#[test]
fn test_older_interpreter_takes_else_arm() {
    let options = BuildOptions::default().with_version(3, 8);
    let doc = parse(STUB, &options).unwrap();
    assert_eq!(doc.aliases[0].ty, TypeExpr::named("bytes"));
}

#[test]
fn test_first_error_stops() {
    let src = "def ( ) -> int : ... x : int def g ( ) -> int : ... class : pass y : str";
    let failure = parse(src, &BuildOptions::default()).unwrap_err();
    assert_eq!(failure.len(), 1);
    assert_eq!(failure.primary.code, ErrorCode::E1001);
    assert_eq!(failure.primary.span, Span::new(4, 5));
}

#[test]
fn test_collecting_errors() {
    let src = "def ( ) -> int : ... x : int def g ( ) -> int : ... class : pass y : str";
    let failure = parse(src, &BuildOptions::collecting_errors()).unwrap_err();
    let found: Vec<(ErrorCode, Span)> = failure.errors().map(|e| (e.code, e.span)).collect();
    assert_eq!(
        found,
        vec![
            (ErrorCode::E1001, Span::new(4, 5)),
            (ErrorCode::E1001, Span::new(58, 59)),
        ]
    );
    assert_eq!(
        failure.primary.message,
        "syntax error, unexpected '(', expecting NAME or COLL_NAMEDTUPLE or NEWTYPE or TYPEDDICT"
    );
}

#[test]
fn test_semantic_failure_reported_as_parse_error() {
    let failure = parse(r#"T = TypeVar("U")"#, &BuildOptions::default()).unwrap_err();
    assert_eq!(failure.primary.code, ErrorCode::E1002);
    assert_eq!(failure.primary.span, Span::new(0, 16));
    assert_eq!(failure.to_string(), failure.primary.to_string());
}
