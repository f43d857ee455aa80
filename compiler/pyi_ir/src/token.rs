//! Tokens consumed by the stub parser.
//!
//! The external lexer produces these; the parser only needs each token's
//! terminal number (its column in the action table), its payload and span.

use crate::{Number, Span};
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for testing/generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds of the stub language.
///
/// Variant order follows the terminal numbering of the parse tables; see
/// [`TokenKind::terminal`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// End of input.
    Eof,
    Name(String),
    Number(Number),
    /// String literal contents, quotes removed.
    String(String),
    /// A lexer failure, carrying the lexer's message.
    LexError(String),

    Async,
    Class,
    Def,
    Else,
    Elif,
    If,
    Or,
    And,
    Pass,
    Import,
    From,
    As,
    Raise,
    /// `nothing`
    Nothing,
    /// `NamedTuple`
    NamedTuple,
    /// `namedtuple`
    CollNamedTuple,
    /// `NewType`
    NewType,
    /// `TypedDict`
    TypedDict,
    /// `TypeVar`
    TypeVar,
    /// `->`
    Arrow,
    /// `...`
    Ellipsis,
    /// `==`
    EqEq,
    /// `!=`
    NotEq,
    /// `<=`
    LtEq,
    /// `>=`
    GtEq,
    Indent,
    Dedent,
    /// A docstring-like `"""..."""` block.
    TripleQuoted,
    /// The `# type:` comment marker.
    TypeComment,

    Colon,
    LParen,
    RParen,
    Comma,
    Eq,
    LBracket,
    RBracket,
    Lt,
    Gt,
    Dot,
    Star,
    At,
    Question,
    LBrace,
    RBrace,
}

impl TokenKind {
    /// Terminal number of this kind in the parse tables.
    ///
    /// Terminals 1 (`error`) and 2 (`invalid token`) have no token kind;
    /// the parser synthesizes them.
    pub const fn terminal(&self) -> u8 {
        match self {
            TokenKind::Eof => 0,
            TokenKind::Name(_) => 3,
            TokenKind::Number(_) => 4,
            TokenKind::String(_) => 5,
            TokenKind::LexError(_) => 6,
            TokenKind::Async => 7,
            TokenKind::Class => 8,
            TokenKind::Def => 9,
            TokenKind::Else => 10,
            TokenKind::Elif => 11,
            TokenKind::If => 12,
            TokenKind::Or => 13,
            TokenKind::And => 14,
            TokenKind::Pass => 15,
            TokenKind::Import => 16,
            TokenKind::From => 17,
            TokenKind::As => 18,
            TokenKind::Raise => 19,
            TokenKind::Nothing => 20,
            TokenKind::NamedTuple => 21,
            TokenKind::CollNamedTuple => 22,
            TokenKind::NewType => 23,
            TokenKind::TypedDict => 24,
            TokenKind::TypeVar => 25,
            TokenKind::Arrow => 26,
            TokenKind::Ellipsis => 27,
            TokenKind::EqEq => 28,
            TokenKind::NotEq => 29,
            TokenKind::LtEq => 30,
            TokenKind::GtEq => 31,
            TokenKind::Indent => 32,
            TokenKind::Dedent => 33,
            TokenKind::TripleQuoted => 34,
            TokenKind::TypeComment => 35,
            TokenKind::Colon => 36,
            TokenKind::LParen => 37,
            TokenKind::RParen => 38,
            TokenKind::Comma => 39,
            TokenKind::Eq => 40,
            TokenKind::LBracket => 41,
            TokenKind::RBracket => 42,
            TokenKind::Lt => 43,
            TokenKind::Gt => 44,
            TokenKind::Dot => 45,
            TokenKind::Star => 46,
            TokenKind::At => 47,
            TokenKind::Question => 48,
            TokenKind::LBrace => 49,
            TokenKind::RBrace => 50,
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// Move the payload out of a data-carrying token.
    pub fn into_payload(self) -> Payload {
        match self {
            TokenKind::Name(s) | TokenKind::String(s) | TokenKind::LexError(s) => Payload::Text(s),
            TokenKind::Number(n) => Payload::Number(n),
            _ => Payload::None,
        }
    }
}

/// Data carried by a token, detached from its kind.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Payload {
    None,
    Text(String),
    Number(Number),
}

/// A list of tokens.
#[derive(Clone, Eq, PartialEq, Hash, Default)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Token kinds only, spans dropped.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl IntoIterator for TokenList {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl FromIterator<Token> for TokenList {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        TokenList {
            tokens: iter.into_iter().collect(),
        }
    }
}

/// Pull-based token input for the parser.
///
/// `None` means the input is exhausted; the parser treats that as end of
/// file and never asks again.
pub trait TokenSource {
    fn next_token(&mut self) -> Option<Token>;
}

impl<I> TokenSource for I
where
    I: Iterator<Item = Token>,
{
    #[inline]
    fn next_token(&mut self) -> Option<Token> {
        self.next()
    }
}
