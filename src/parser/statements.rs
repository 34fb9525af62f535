//! Statement parsing implementation
//!
//! One method per statement form, dispatched on the leading keyword or
//! symbol. Keywords are reserved words, so no lookahead beyond the current
//! token is needed.
//!
//! # Grammar
//!
//! ```text
//! statement ::= func_def | entry_point | var_decl | loop_stmt
//!             | announce_stmt | finishline_stmt | if_stmt | listen_stmt
//!             | block | expr_stmt
//!
//! func_def    ::= 'engine' IDENT '(' ')' block
//! entry_point ::= 'ignite' '(' ')' block
//! var_decl    ::= ('gear'|'turbo'|'exhaust'|'flag') IDENT ('=' expr)? ';'
//! loop_stmt   ::= 'looplap' '(' expr ')' statement
//! if_stmt     ::= 'track' '(' expr ')' statement ('pitstop' statement)?
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the
//! [`Parser`] struct.

use super::ast::Stmt;
use super::lexer::{Token, TokenKind};
use super::parse::{ParseError, Parser};

impl Parser {
    /// Parse a single statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_keyword("engine") {
            return self.parse_func_def();
        }
        if self.match_keyword("ignite") {
            return self.parse_entry_point();
        }
        if self.match_declaration_qualifier() {
            return self.parse_var_decl();
        }
        if self.match_keyword("looplap") {
            return self.parse_loop();
        }
        if self.match_keyword("announce") {
            return self.parse_announce();
        }
        if self.match_keyword("finishline") {
            return self.parse_finishline();
        }
        if self.match_keyword("track") {
            return self.parse_if();
        }
        if self.match_keyword("listen") {
            return self.parse_listen();
        }
        if self.check_symbol("{") {
            return self.parse_block();
        }

        // Reserved words without a statement form fall through here and fail
        // in expression position.
        self.parse_expression_statement()
    }

    /// `engine <name> ( ) <block>`
    fn parse_func_def(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_identifier("Expected function name after 'engine'")?;
        self.expect_symbol("(", "Expected '(' after function name")?;
        self.expect_symbol(")", "Expected ')' after function name")?;
        let body = self.parse_block()?;
        Ok(Stmt::FuncDef {
            name,
            body: Box::new(body),
        })
    }

    /// `ignite ( ) <block>` — structurally a function definition under a
    /// synthesized identifier token named after the entry-point keyword.
    fn parse_entry_point(&mut self) -> Result<Stmt, ParseError> {
        let keyword_line = self.previous().line;
        self.expect_symbol("(", "Expected '(' after 'ignite'")?;
        self.expect_symbol(")", "Expected ')' after 'ignite'")?;

        let name = Token::new(TokenKind::Identifier, "ignite", keyword_line);
        let body = self.parse_block()?;
        Ok(Stmt::FuncDef {
            name,
            body: Box::new(body),
        })
    }

    /// `<qualifier> <name> [= <expr>] ;` — the qualifier token was already
    /// consumed by the dispatcher.
    fn parse_var_decl(&mut self) -> Result<Stmt, ParseError> {
        let qualifier = self.previous().clone();
        let name = self.expect_identifier("Expected variable name")?;

        let initializer = if self.match_operator(&["="]) {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect_symbol(";", "Expected ';' after variable declaration")?;
        Ok(Stmt::VarDecl {
            qualifier,
            name,
            initializer,
        })
    }

    /// `looplap ( <expr> ) <stmt>` — the body is a single statement, not
    /// necessarily a block.
    fn parse_loop(&mut self) -> Result<Stmt, ParseError> {
        self.expect_symbol("(", "Expected '(' after 'looplap'")?;
        let condition = self.parse_expression()?;
        self.expect_symbol(")", "Expected ')' after condition")?;
        let body = self.parse_statement()?;
        Ok(Stmt::Loop {
            condition,
            body: Box::new(body),
        })
    }

    /// `announce <expr> ;`
    fn parse_announce(&mut self) -> Result<Stmt, ParseError> {
        let value = self.parse_expression()?;
        self.expect_symbol(";", "Expected ';' after announce value")?;
        Ok(Stmt::Announce { value })
    }

    /// `finishline <expr> ;`
    fn parse_finishline(&mut self) -> Result<Stmt, ParseError> {
        let value = self.parse_expression()?;
        self.expect_symbol(";", "Expected ';' after finishline value")?;
        Ok(Stmt::Finishline { value })
    }

    /// `track ( <expr> ) <stmt> [pitstop <stmt>]`
    fn parse_if(&mut self) -> Result<Stmt, ParseError> {
        self.expect_symbol("(", "Expected '(' after 'track'")?;
        let condition = self.parse_expression()?;
        self.expect_symbol(")", "Expected ')' after condition")?;
        let then_branch = Box::new(self.parse_statement()?);

        let else_branch = if self.match_keyword("pitstop") {
            Some(Box::new(self.parse_statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// `listen <name> ;`
    fn parse_listen(&mut self) -> Result<Stmt, ParseError> {
        let name = self.expect_identifier("Expected variable name after 'listen'")?;
        self.expect_symbol(";", "Expected ';' after listen target")?;
        Ok(Stmt::Listen { name })
    }

    /// `{ <stmt>* }` — reaching end of input before `}` is an unterminated
    /// block.
    pub(crate) fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        self.expect_symbol("{", "Expected '{' to start block")?;

        let mut statements = Vec::new();
        while !self.check_symbol("}") {
            if self.is_at_end() {
                return Err(ParseError::new(
                    "Unterminated block, missing '}'",
                    self.peek().line,
                ));
            }
            statements.push(self.parse_statement()?);
        }

        self.expect_symbol("}", "Expected '}' after block")?;
        Ok(Stmt::Block { statements })
    }

    /// `<expr> ;`
    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        self.expect_symbol(";", "Expected ';' after expression")?;
        Ok(Stmt::Expression { expr })
    }
}
