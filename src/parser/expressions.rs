//! Expression parsing implementation
//!
//! Strictly layered precedence, lowest to highest binding:
//!
//! ```text
//! expression     ::= assignment
//! assignment     ::= comparison ('=' assignment)?      (right-associative)
//! comparison     ::= term (('<'|'>'|'<='|'>=') term)*  (left-associative)
//! term           ::= factor (('+'|'-') factor)*
//! factor         ::= primary (('*'|'/') primary)*
//! primary        ::= NUMBER | STRING | BOOLEAN | IDENT | '(' expression ')'
//! ```
//!
//! An assignment target must be syntactically a variable reference; any
//! other left-hand shape is rejected.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use super::ast::Expr;
use super::lexer::TokenKind;
use super::parse::{ParseError, Parser};

impl Parser {
    /// Parse an expression (top-level entry point).
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_assignment()
    }

    /// Assignment, right-associative: `a = b = c` nests to the right.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.parse_comparison()?;

        if self.match_operator(&["="]) {
            let equals_line = self.previous().line;
            let value = self.parse_assignment()?;

            return match expr {
                Expr::Variable { name } => Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                }),
                _ => Err(ParseError::new("Invalid assignment target", equals_line)),
            };
        }

        Ok(expr)
    }

    /// Comparison chain: `< > <= >=`, left-associative.
    fn parse_comparison(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_term()?;

        while self.match_operator(&["<", ">", "<=", ">="]) {
            let op = self.previous().clone();
            let right = self.parse_term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Additive: `+ -`
    fn parse_term(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_factor()?;

        while self.match_operator(&["+", "-"]) {
            let op = self.previous().clone();
            let right = self.parse_factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Multiplicative: `* /`
    fn parse_factor(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.parse_primary()?;

        while self.match_operator(&["*", "/"]) {
            let op = self.previous().clone();
            let right = self.parse_primary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                op,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// Literals, variable references, and parenthesized sub-expressions.
    /// Grouping produces no node of its own.
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        if self.match_kinds(&[TokenKind::Number, TokenKind::String, TokenKind::Boolean]) {
            return Ok(Expr::Literal {
                value: self.previous().clone(),
            });
        }

        if self.match_kinds(&[TokenKind::Identifier]) {
            return Ok(Expr::Variable {
                name: self.previous().clone(),
            });
        }

        if self.check_symbol("(") {
            self.advance();
            let expr = self.parse_expression()?;
            self.expect_symbol(")", "Expected ')' after expression")?;
            return Ok(expr);
        }

        Err(self.error_at_current("Expected expression"))
    }
}
