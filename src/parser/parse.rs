//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing
//! infrastructure: the error type, cursor helpers, the top-level parse loop,
//! and panic-mode recovery.
//!
//! # Parser Architecture
//!
//! Recursive descent, with the grammar split across `impl Parser` blocks:
//! - This module: Parser struct, helpers, parse loop, `synchronize`
//! - `statements`: statement grammar (one method per statement form)
//! - `expressions`: layered expression precedence
//!
//! # Error recovery
//!
//! `parse` itself never fails. A statement that does not parse is recorded
//! as a [`ParseError`] and the cursor skips forward to a synchronization
//! point: just past a `;`, or in front of a keyword that starts a new
//! statement. The returned statement list then holds every statement that
//! did parse, in source order.

use thiserror::Error;

use super::ast::Stmt;
use super::lexer::{Token, TokenKind};

/// The declaration qualifiers. All four declare a named, optionally
/// initialized binding; no distinction is made between them at this layer.
pub(crate) const DECLARATION_QUALIFIERS: [&str; 4] = ["gear", "turbo", "exhaust", "flag"];

/// Syntactic diagnostic with the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Parse error at line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

impl ParseError {
    pub(crate) fn new(message: impl Into<String>, line: usize) -> Self {
        Self {
            message: message.into(),
            line,
        }
    }
}

/// Recursive descent parser for the AutoSpeed grammar.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Create a parser over a token stream, normally the output of
    /// [`Lexer::scan`](super::lexer::Lexer::scan).
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // The cursor relies on a trailing Eof token: reading past the end
        // must always observe end-of-input. Tolerate streams without one.
        if tokens.last().is_none_or(|t| t.kind != TokenKind::Eof) {
            let line = tokens.last().map_or(1, |t| t.line);
            tokens.push(Token::new(TokenKind::Eof, "EOF", line));
        }
        Self {
            tokens,
            position: 0,
            errors: Vec::new(),
        }
    }

    /// Parse the whole token stream into top-level statements.
    ///
    /// Returns the successfully parsed statements and every diagnostic that
    /// was recovered from. The statement list is shorter than the ideal
    /// parse when errors occurred, never `Err`.
    pub fn parse(mut self) -> (Vec<Stmt>, Vec<ParseError>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }

        (statements, self.errors)
    }

    /// Panic-mode recovery: discard tokens until a statement boundary.
    ///
    /// Recovery ends either just after a consumed `;`, or just before a
    /// keyword that begins a new statement (which is left for the parse loop
    /// to pick up).
    fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            let prev = self.previous();
            if prev.kind == TokenKind::Symbol && prev.text == ";" {
                return;
            }
            if starts_statement(self.peek()) {
                return;
            }
            self.advance();
        }
    }

    // ===== Cursor helpers =====

    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.position]
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position - 1]
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    pub(crate) fn check_keyword(&self, word: &str) -> bool {
        self.peek().kind == TokenKind::Keyword && self.peek().text == word
    }

    pub(crate) fn match_keyword(&mut self, word: &str) -> bool {
        if self.check_keyword(word) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn match_declaration_qualifier(&mut self) -> bool {
        if self.peek().kind == TokenKind::Keyword
            && DECLARATION_QUALIFIERS.contains(&self.peek().text.as_str())
        {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check_symbol(&self, symbol: &str) -> bool {
        self.peek().kind == TokenKind::Symbol && self.peek().text == symbol
    }

    /// Consume the next token when it is one of the given operators.
    pub(crate) fn match_operator(&mut self, operators: &[&str]) -> bool {
        if self.peek().kind == TokenKind::Operator
            && operators.contains(&self.peek().text.as_str())
        {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the next token when its kind is one of the given kinds.
    pub(crate) fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.contains(&self.peek().kind) && !self.is_at_end() {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_symbol(
        &mut self,
        symbol: &str,
        message: &str,
    ) -> Result<Token, ParseError> {
        if self.check_symbol(symbol) {
            Ok(self.advance().clone())
        } else {
            Err(self.error_at_current(message))
        }
    }

    pub(crate) fn expect_identifier(&mut self, message: &str) -> Result<Token, ParseError> {
        if self.peek().kind == TokenKind::Identifier {
            Ok(self.advance().clone())
        } else {
            Err(self.error_at_current(message))
        }
    }

    /// Build a diagnostic pointing at the current token.
    pub(crate) fn error_at_current(&self, message: &str) -> ParseError {
        ParseError::new(
            format!("{}, found {}", message, self.peek()),
            self.peek().line,
        )
    }
}

/// Does this token begin a new statement? Used as the resynchronization
/// predicate during recovery: function definitions, the entry point,
/// declaration qualifiers, loops, and returns all restart parsing.
fn starts_statement(token: &Token) -> bool {
    token.kind == TokenKind::Keyword
        && (DECLARATION_QUALIFIERS.contains(&token.text.as_str())
            || matches!(
                token.text.as_str(),
                "engine" | "ignite" | "looplap" | "finishline"
            ))
}
