//! Token scripts: a compact spelling of token streams.
//!
//! Fixtures and tests describe the lexer's output with scripts such as
//!
//! ```text
//! def f ( x : int ) -> str : ...
//! class C : INDENT x : int DEDENT
//! ```
//!
//! Names, numbers, `"strings"` and punctuation map to single tokens; stub
//! keywords are recognised by spelling. There is no indentation tracking:
//! `INDENT`, `DEDENT`, `TRIPLEQUOTED` and `TYPECOMMENT` are written out.
//! `!"message"` spells a lexer error token. Spans are the byte ranges of
//! each word within the script.

use crate::{Number, Span, Token, TokenKind, TokenList};
use std::fmt;

/// Error in a token script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptError {
    pub offset: usize,
    pub message: String,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token script error at byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ScriptError {}

fn keyword(word: &str) -> Option<TokenKind> {
    Some(match word {
        "async" => TokenKind::Async,
        "class" => TokenKind::Class,
        "def" => TokenKind::Def,
        "else" => TokenKind::Else,
        "elif" => TokenKind::Elif,
        "if" => TokenKind::If,
        "or" => TokenKind::Or,
        "and" => TokenKind::And,
        "pass" => TokenKind::Pass,
        "import" => TokenKind::Import,
        "from" => TokenKind::From,
        "as" => TokenKind::As,
        "raise" => TokenKind::Raise,
        "nothing" => TokenKind::Nothing,
        "NamedTuple" => TokenKind::NamedTuple,
        "namedtuple" => TokenKind::CollNamedTuple,
        "NewType" => TokenKind::NewType,
        "TypedDict" => TokenKind::TypedDict,
        "TypeVar" => TokenKind::TypeVar,
        "INDENT" => TokenKind::Indent,
        "DEDENT" => TokenKind::Dedent,
        "TRIPLEQUOTED" => TokenKind::TripleQuoted,
        "TYPECOMMENT" => TokenKind::TypeComment,
        _ => return None,
    })
}

fn punctuation(rest: &str) -> Option<(TokenKind, usize)> {
    const MULTI: [(&str, TokenKind); 6] = [
        ("...", TokenKind::Ellipsis),
        ("->", TokenKind::Arrow),
        ("==", TokenKind::EqEq),
        ("!=", TokenKind::NotEq),
        ("<=", TokenKind::LtEq),
        (">=", TokenKind::GtEq),
    ];
    for (text, kind) in MULTI {
        if rest.starts_with(text) {
            return Some((kind, text.len()));
        }
    }
    let kind = match rest.as_bytes().first()? {
        b':' => TokenKind::Colon,
        b'(' => TokenKind::LParen,
        b')' => TokenKind::RParen,
        b',' => TokenKind::Comma,
        b'=' => TokenKind::Eq,
        b'[' => TokenKind::LBracket,
        b']' => TokenKind::RBracket,
        b'<' => TokenKind::Lt,
        b'>' => TokenKind::Gt,
        b'.' => TokenKind::Dot,
        b'*' => TokenKind::Star,
        b'@' => TokenKind::At,
        b'?' => TokenKind::Question,
        b'{' => TokenKind::LBrace,
        b'}' => TokenKind::RBrace,
        _ => return None,
    };
    Some((kind, 1))
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn error(&self, offset: usize, message: impl Into<String>) -> ScriptError {
        ScriptError {
            offset,
            message: message.into(),
        }
    }

    fn span(&self, start: usize) -> Result<Span, ScriptError> {
        Span::try_from_range(start..self.pos).map_err(|e| self.error(start, e.to_string()))
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    fn quoted(&mut self) -> Result<String, ScriptError> {
        let start = self.pos;
        let rest = self.rest();
        let mut chars = rest.char_indices();
        let Some((_, quote)) = chars.next() else {
            return Err(self.error(start, "expected a quote"));
        };
        for (i, c) in chars {
            if c == quote {
                self.pos += i + c.len_utf8();
                return Ok(rest[quote.len_utf8()..i].to_string());
            }
        }
        Err(self.error(start, "unterminated string"))
    }

    fn number(&mut self, start: usize) -> Result<Number, ScriptError> {
        if self.rest().starts_with('-') {
            self.pos += 1;
        }
        let text = self.take_while(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_');
        let full = &self.text[start..self.pos];
        if text.contains('.') {
            full.parse::<f64>()
                .map(Number::float)
                .map_err(|e| self.error(start, format!("bad number `{full}`: {e}")))
        } else {
            full.parse::<i64>()
                .map(Number::Int)
                .map_err(|e| self.error(start, format!("bad number `{full}`: {e}")))
        }
    }

    fn next(&mut self) -> Result<Option<Token>, ScriptError> {
        self.take_while(char::is_whitespace);
        let start = self.pos;
        let rest = self.rest();
        let Some(first) = rest.chars().next() else {
            return Ok(None);
        };
        let second = rest[first.len_utf8()..].chars().next();

        let kind = if first == '"' || first == '\'' {
            TokenKind::String(self.quoted()?)
        } else if first == '!' && matches!(second, Some('"' | '\'')) {
            self.pos += 1;
            TokenKind::LexError(self.quoted()?)
        } else if first.is_ascii_digit() || (first == '-' && second.is_some_and(|c| c.is_ascii_digit())) {
            TokenKind::Number(self.number(start)?)
        } else if first.is_alphabetic() || first == '_' {
            let word = self.take_while(|c| c.is_alphanumeric() || c == '_');
            keyword(word).unwrap_or_else(|| TokenKind::Name(word.to_string()))
        } else if let Some((kind, len)) = punctuation(rest) {
            self.pos += len;
            kind
        } else {
            return Err(self.error(start, format!("unexpected character `{first}`")));
        };
        Ok(Some(Token::new(kind, self.span(start)?)))
    }
}

/// Turn a token script into tokens. No end-of-file token is appended.
pub fn tokenize(text: &str) -> Result<TokenList, ScriptError> {
    let mut scanner = Scanner { text, pos: 0 };
    let mut tokens = TokenList::new();
    while let Some(token) = scanner.next()? {
        tokens.push(token);
    }
    Ok(tokens)
}

/// Script spelling of a single token kind.
pub fn spelling(kind: &TokenKind) -> String {
    let fixed = match kind {
        TokenKind::Name(name) => return name.clone(),
        TokenKind::Number(n) => return n.to_string(),
        TokenKind::String(s) => return format!("{s:?}"),
        TokenKind::LexError(s) => return format!("!{s:?}"),
        TokenKind::Eof => "EOF",
        TokenKind::Async => "async",
        TokenKind::Class => "class",
        TokenKind::Def => "def",
        TokenKind::Else => "else",
        TokenKind::Elif => "elif",
        TokenKind::If => "if",
        TokenKind::Or => "or",
        TokenKind::And => "and",
        TokenKind::Pass => "pass",
        TokenKind::Import => "import",
        TokenKind::From => "from",
        TokenKind::As => "as",
        TokenKind::Raise => "raise",
        TokenKind::Nothing => "nothing",
        TokenKind::NamedTuple => "NamedTuple",
        TokenKind::CollNamedTuple => "namedtuple",
        TokenKind::NewType => "NewType",
        TokenKind::TypedDict => "TypedDict",
        TokenKind::TypeVar => "TypeVar",
        TokenKind::Arrow => "->",
        TokenKind::Ellipsis => "...",
        TokenKind::EqEq => "==",
        TokenKind::NotEq => "!=",
        TokenKind::LtEq => "<=",
        TokenKind::GtEq => ">=",
        TokenKind::Indent => "INDENT",
        TokenKind::Dedent => "DEDENT",
        TokenKind::TripleQuoted => "TRIPLEQUOTED",
        TokenKind::TypeComment => "TYPECOMMENT",
        TokenKind::Colon => ":",
        TokenKind::LParen => "(",
        TokenKind::RParen => ")",
        TokenKind::Comma => ",",
        TokenKind::Eq => "=",
        TokenKind::LBracket => "[",
        TokenKind::RBracket => "]",
        TokenKind::Lt => "<",
        TokenKind::Gt => ">",
        TokenKind::Dot => ".",
        TokenKind::Star => "*",
        TokenKind::At => "@",
        TokenKind::Question => "?",
        TokenKind::LBrace => "{",
        TokenKind::RBrace => "}",
    };
    fixed.to_string()
}

/// Render tokens back to a script, one space between words.
pub fn render<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    tokens
        .into_iter()
        .map(|t| spelling(&t.kind))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests;
