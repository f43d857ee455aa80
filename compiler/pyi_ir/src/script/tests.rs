use super::*;
use pretty_assertions::assert_eq;

fn kinds(text: &str) -> Vec<TokenKind> {
    match tokenize(text) {
        Ok(tokens) => tokens.kinds(),
        Err(e) => panic!("{e}"),
    }
}

#[test]
fn test_tokenize_function_header() {
    assert_eq!(
        kinds("def f(x: int = 3) -> str: ..."),
        vec![
            TokenKind::Def,
            TokenKind::Name("f".into()),
            TokenKind::LParen,
            TokenKind::Name("x".into()),
            TokenKind::Colon,
            TokenKind::Name("int".into()),
            TokenKind::Eq,
            TokenKind::Number(Number::Int(3)),
            TokenKind::RParen,
            TokenKind::Arrow,
            TokenKind::Name("str".into()),
            TokenKind::Colon,
            TokenKind::Ellipsis,
        ]
    );
}

#[test]
fn test_tokenize_keywords_and_layout_words() {
    assert_eq!(
        kinds("class C : INDENT pass DEDENT namedtuple NamedTuple nothing"),
        vec![
            TokenKind::Class,
            TokenKind::Name("C".into()),
            TokenKind::Colon,
            TokenKind::Indent,
            TokenKind::Pass,
            TokenKind::Dedent,
            TokenKind::CollNamedTuple,
            TokenKind::NamedTuple,
            TokenKind::Nothing,
        ]
    );
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("<= >= == != < > ... . ** ?"),
        vec![
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Ellipsis,
            TokenKind::Dot,
            TokenKind::Star,
            TokenKind::Star,
            TokenKind::Question,
        ]
    );
}

#[test]
fn test_tokenize_literals() {
    assert_eq!(
        kinds(r#"-1 2.5 "a b" 'c' !"bad indent""#),
        vec![
            TokenKind::Number(Number::Int(-1)),
            TokenKind::Number(Number::float(2.5)),
            TokenKind::String("a b".into()),
            TokenKind::String("c".into()),
            TokenKind::LexError("bad indent".into()),
        ]
    );
}

#[test]
fn test_tokenize_spans() {
    let Ok(tokens) = tokenize("x  : int") else {
        panic!("script should tokenize");
    };
    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(spans, vec![Span::new(0, 1), Span::new(3, 4), Span::new(5, 8)]);
}

#[test]
fn test_tokenize_errors() {
    assert_eq!(
        tokenize("x = \"open"),
        Err(ScriptError {
            offset: 4,
            message: "unterminated string".into(),
        })
    );
    assert!(tokenize("x $ y").is_err());
}

#[test]
fn test_render_then_tokenize() {
    let text = r#"from . import ( a as b , * ) x = [ "s" ] y : ?"#;
    let Ok(tokens) = tokenize(text) else {
        panic!("script should tokenize");
    };
    assert_eq!(render(&tokens), text);
}
