//! The LALR(1) driver.
//!
//! [`Parser::step`] performs one automaton action at a time: a shift, a
//! reduction, one recovery move, or the final accept/abort. [`Parser::run`]
//! steps until the parse finishes.

use pyi_diagnostic::ErrorCode;
use pyi_ir::{Payload, Span, Token, TokenKind, TokenSource};
use tracing::{debug, trace};

use crate::actions::{self, ReduceError};
use crate::error::{ParseError, ParseFailure};
use crate::recovery::{self, RecoveryMode};
use crate::stack::{ParseStack, Symbol};
use crate::tables::{self, Action, EOF, ERROR, FINAL_STATE};
use crate::value::Value;
use crate::Semantics;

/// Status after an error: no reports until this many tokens are shifted.
const ERROR_QUIET_SHIFTS: u8 = 3;

/// Parser configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    /// What to do after a syntax error.
    pub recovery: RecoveryMode,
    /// Stop after this many reported errors. 0 means no limit.
    pub max_errors: usize,
    /// Longest list of expected tokens spelled out in a syntax error.
    pub max_expected: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            recovery: RecoveryMode::FirstError,
            max_errors: 0,
            max_expected: 4,
        }
    }
}

/// Outcome of a single [`Parser::step`].
#[derive(Debug, PartialEq, Eq)]
pub enum Step<O> {
    /// A token was shifted, entering `state`.
    Shifted { terminal: u8, state: u16 },
    /// A rule was reduced. Depths are stack lengths around the reduction.
    Reduced {
        rule: u8,
        depth_before: usize,
        depth_after: usize,
    },
    /// An error was reported or the parser moved toward a recovery point.
    Recovering,
    /// The input was accepted without errors.
    Accepted(O),
    /// The parse failed; see [`Parser::into_failure`].
    Aborted,
}

struct Lookahead<S: Semantics> {
    terminal: u8,
    value: Value<S>,
    span: Span,
    /// Blocks open before this token.
    depth: usize,
    /// The lexer's message for an error token.
    lex_message: Option<String>,
}

impl<S: Semantics> Lookahead<S> {
    fn from_token(token: Token, depth: usize) -> Self {
        let terminal = token.kind.terminal();
        let span = token.span;
        if let TokenKind::LexError(message) = token.kind {
            return Lookahead {
                terminal,
                value: Value::Empty,
                span,
                depth,
                lex_message: Some(message),
            };
        }
        let value = match token.kind.into_payload() {
            Payload::None => Value::Empty,
            Payload::Text(text) => Value::Text(text),
            Payload::Number(number) => Value::Number(number),
        };
        Lookahead {
            terminal,
            value,
            span,
            depth,
            lex_message: None,
        }
    }

    fn eof(span: Span, depth: usize) -> Self {
        Lookahead {
            terminal: EOF,
            value: Value::Empty,
            span,
            depth,
            lex_message: None,
        }
    }
}

/// A table-driven parser over a token source, reporting to `S`.
pub struct Parser<'a, S: Semantics, T: TokenSource> {
    semantics: &'a mut S,
    tokens: T,
    options: ParserOptions,
    stack: ParseStack<S>,
    lookahead: Option<Lookahead<S>>,
    /// Span handed to every EOF once the source is exhausted.
    eof_span: Option<Span>,
    last_end: u32,
    /// `INDENT`s read minus `DEDENT`s read.
    indent_depth: usize,
    /// Shifts left before errors are reported again.
    err_status: u8,
    /// Discarding tokens until one fits the resumed stack.
    resyncing: bool,
    errors: Vec<ParseError>,
    finished: bool,
}

impl<'a, S: Semantics, T: TokenSource> Parser<'a, S, T> {
    pub fn new(tokens: T, semantics: &'a mut S, options: ParserOptions) -> Self {
        Parser {
            semantics,
            tokens,
            options,
            stack: ParseStack::new(),
            lookahead: None,
            eof_span: None,
            last_end: 0,
            indent_depth: 0,
            err_status: 0,
            resyncing: false,
            errors: Vec::new(),
            finished: false,
        }
    }

    /// Current stack length, including the initial entry.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Errors reported so far.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Step until the parse is accepted or aborted.
    pub fn run(mut self) -> Result<S::Output, ParseFailure> {
        loop {
            match self.step() {
                Step::Accepted(output) => return Ok(output),
                Step::Aborted => return Err(self.into_failure()),
                Step::Shifted { .. } | Step::Reduced { .. } | Step::Recovering => {}
            }
        }
    }

    /// The failure describing an aborted parse.
    pub fn into_failure(self) -> ParseFailure {
        ParseFailure::from_errors(self.errors).unwrap_or_else(|| ParseFailure {
            primary: ParseError::new(
                ErrorCode::E9001,
                "parse aborted without an error",
                Span::point(self.last_end),
            ),
            additional: Vec::new(),
        })
    }

    /// Perform one automaton action.
    pub fn step(&mut self) -> Step<S::Output> {
        if self.finished {
            return Step::Aborted;
        }
        let state = self.stack.top_state();
        if state == FINAL_STATE {
            return self.accept();
        }
        if self.resyncing {
            return self.resync();
        }
        let action = if tables::is_default_only(state) {
            tables::default_action(state)
        } else {
            let terminal = self.lookahead_terminal();
            tables::action(state, terminal)
        };
        match action {
            Action::Shift(next) => self.shift(next),
            Action::Reduce(rule) => self.reduce(rule),
            Action::Error => self.syntax_error(state),
        }
    }

    /// Terminal of the pending lookahead, reading one if needed.
    fn lookahead_terminal(&mut self) -> u8 {
        if let Some(lookahead) = &self.lookahead {
            return lookahead.terminal;
        }
        let lookahead = self.read_token();
        let terminal = lookahead.terminal;
        self.lookahead = Some(lookahead);
        terminal
    }

    fn read_token(&mut self) -> Lookahead<S> {
        let depth = self.indent_depth;
        if let Some(span) = self.eof_span {
            return Lookahead::eof(span, depth);
        }
        match self.tokens.next_token() {
            Some(token) if !token.kind.is_eof() => {
                self.last_end = token.span.end;
                match token.kind {
                    TokenKind::Indent => self.indent_depth += 1,
                    TokenKind::Dedent => self.indent_depth = depth.saturating_sub(1),
                    _ => {}
                }
                Lookahead::from_token(token, depth)
            }
            Some(token) => {
                self.eof_span = Some(token.span);
                Lookahead::eof(token.span, depth)
            }
            None => {
                let span = Span::point(self.last_end);
                self.eof_span = Some(span);
                Lookahead::eof(span, depth)
            }
        }
    }

    fn shift(&mut self, next: u16) -> Step<S::Output> {
        let Some(lookahead) = self.lookahead.take() else {
            return self.internal_error("shift without a lookahead");
        };
        trace!(
            state = self.stack.top_state(),
            token = tables::symbol_name(lookahead.terminal),
            next,
            "shift"
        );
        let terminal = lookahead.terminal;
        self.stack
            .push(next, Symbol::new(terminal, lookahead.value, lookahead.span));
        self.err_status = self.err_status.saturating_sub(1);
        Step::Shifted {
            terminal,
            state: next,
        }
    }

    fn reduce(&mut self, rule: u8) -> Step<S::Output> {
        let len = tables::rule_len(rule);
        let depth_before = self.stack.len();
        if len >= depth_before {
            return self.internal_error("reduction deeper than the stack");
        }
        let rhs = self.stack.pop_rhs(len);
        let mut span = match (rhs.first(), rhs.last()) {
            (Some(first), Some(last)) => first.span.to(last.span),
            _ => self.stack.top_span().end_point(),
        };
        match actions::reduce(rule, rhs, &mut span, &mut *self.semantics) {
            Ok(value) => {
                let lhs = tables::rule_lhs(rule);
                let next = tables::goto(self.stack.top_state(), lhs);
                self.stack.push(next, Symbol::new(lhs, value, span));
                let depth_after = self.stack.len();
                debug_assert_eq!(depth_after + len, depth_before + 1);
                trace!(
                    rule,
                    lhs = tables::symbol_name(lhs),
                    next,
                    depth = depth_after,
                    "reduce"
                );
                Step::Reduced {
                    rule,
                    depth_before,
                    depth_after,
                }
            }
            Err(ReduceError::Semantic { error, span }) => {
                debug!(rule, %span, %error, "semantic action failed");
                let error = ParseError::new(ErrorCode::E1002, error.message(), span);
                if !self.report(error) {
                    return self.abort();
                }
                self.recover()
            }
            Err(ReduceError::Mismatch(mismatch)) => {
                let error = ParseError::mismatch(rule, &mismatch, span);
                self.errors.push(error);
                self.abort()
            }
            Err(ReduceError::UnknownRule(rule)) => {
                self.internal_error(&format!("no action for rule {rule}"))
            }
        }
    }

    fn accept(&mut self) -> Step<S::Output> {
        // Final state sits on `start EOF`.
        let _eof = self.stack.pop();
        let Some((_, start)) = self.stack.pop() else {
            return self.internal_error("accepted without a start symbol");
        };
        match start.value.into_output() {
            Ok(output) if self.errors.is_empty() => {
                debug!("accept");
                self.finished = true;
                Step::Accepted(output)
            }
            Ok(_) => {
                debug!(errors = self.errors.len(), "accepted after errors");
                self.abort()
            }
            Err(mismatch) => {
                self.errors
                    .push(ParseError::mismatch(1, &mismatch, start.span));
                self.abort()
            }
        }
    }

    /// A syntax error in `state` on the pending lookahead.
    fn syntax_error(&mut self, state: u16) -> Step<S::Output> {
        let terminal = self.lookahead.as_ref().map(|l| l.terminal);
        if self.err_status == 0 {
            let error = match &self.lookahead {
                Some(Lookahead {
                    lex_message: Some(message),
                    span,
                    ..
                }) => ParseError::new(ErrorCode::E0001, message.clone(), *span),
                Some(lookahead) => {
                    let max_expected = self.options.max_expected;
                    let error = ParseError::new(
                        ErrorCode::E1001,
                        recovery::syntax_error_message(terminal, state, max_expected),
                        lookahead.span,
                    );
                    match recovery::expected_note(state, max_expected) {
                        Some(note) => error.with_note(note),
                        None => error,
                    }
                }
                None => ParseError::new(
                    ErrorCode::E1001,
                    recovery::syntax_error_message(None, state, self.options.max_expected),
                    self.stack.top_span().end_point(),
                ),
            };
            debug!(state, code = %error.code, message = %error.message, "syntax error");
            if !self.report(error) {
                return self.abort();
            }
        }
        if self.err_status == ERROR_QUIET_SHIFTS {
            if terminal == Some(EOF) {
                debug!("end of input while recovering");
                return self.abort();
            }
            if let Some(discarded) = self.lookahead.take() {
                trace!(
                    token = tables::symbol_name(discarded.terminal),
                    "discard lookahead"
                );
            }
        }
        self.recover()
    }

    /// Pop states until one can continue after an error.
    fn recover(&mut self) -> Step<S::Output> {
        self.err_status = ERROR_QUIET_SHIFTS;
        loop {
            let state = self.stack.top_state();
            if let Action::Shift(next) = tables::action(state, ERROR) {
                let span = self
                    .lookahead
                    .as_ref()
                    .map_or_else(|| self.stack.top_span().end_point(), |l| l.span);
                self.stack
                    .push(next, Symbol::new(ERROR, Value::Empty, span));
                return Step::Recovering;
            }
            if self.options.recovery == RecoveryMode::Resync && recovery::is_resume_point(state) {
                debug!(state, "resuming at declaration list");
                self.resyncing = true;
                return Step::Recovering;
            }
            if self.stack.len() <= 1 {
                return self.abort();
            }
            if let Some((popped, kind)) = self.discard_top() {
                debug!(
                    state = popped,
                    symbol = tables::symbol_name(kind),
                    "error recovery: popping"
                );
            }
        }
    }

    /// Discard lookaheads until one fits the stack.
    ///
    /// Tokens inside blocks opened after the resume point belong to the
    /// abandoned declaration and are skipped along with their `DEDENT`.
    fn resync(&mut self) -> Step<S::Output> {
        let terminal = self.lookahead_terminal();
        let depth = self.lookahead.as_ref().map_or(0, |l| l.depth);
        let states = self.stack.states();
        if depth == recovery::open_blocks(states) && recovery::can_resume_with(states, terminal) {
            trace!(token = tables::symbol_name(terminal), "resynchronized");
            self.resyncing = false;
            return Step::Recovering;
        }
        if terminal == EOF {
            debug!("end of input while resynchronizing");
            return self.abort();
        }
        self.lookahead = None;
        trace!(token = tables::symbol_name(terminal), "discard lookahead");
        Step::Recovering
    }

    /// Record an error. False when the error limit is exceeded.
    fn report(&mut self, error: ParseError) -> bool {
        let limit = self.options.max_errors;
        if limit != 0 && self.errors.len() >= limit {
            debug!(limit, "too many errors");
            self.errors.push(
                ParseError::new(
                    ErrorCode::E9002,
                    format!("too many errors (limit {limit})"),
                    error.span,
                )
                .with_note(format!("not reported: {}", error.message)),
            );
            return false;
        }
        self.errors.push(error);
        true
    }

    fn internal_error(&mut self, message: &str) -> Step<S::Output> {
        let span = self.stack.top_span();
        self.errors
            .push(ParseError::new(ErrorCode::E9001, message, span));
        self.abort()
    }

    /// Drop the lookahead and every stack entry, top first.
    fn abort(&mut self) -> Step<S::Output> {
        debug!(depth = self.stack.len(), errors = self.errors.len(), "abort");
        self.lookahead = None;
        while self.discard_top().is_some() {}
        self.resyncing = false;
        self.finished = true;
        Step::Aborted
    }

    /// Pop the top entry, closing the `if` block its symbol holds.
    fn discard_top(&mut self) -> Option<(u16, u8)> {
        let (state, symbol) = self.stack.pop()?;
        if tables::holds_open_if(symbol.kind) {
            trace!(symbol = tables::symbol_name(symbol.kind), "abandon if block");
            self.semantics.abandon_if();
        }
        Some((state, symbol.kind))
    }
}
