//! AST tree printer
//!
//! [`AstPrinter`] renders a parsed program as a fully parenthesized,
//! indented textual form for verification and debugging. The output is
//! deterministic and one-way: it is not a second concrete syntax, and
//! re-parsing it is not guaranteed to reproduce the original tree.
//!
//! Literal rendering: strings are quoted, booleans become the `#`-prefixed
//! sentinels `#true` / `#false`, and numbers keep their source digits
//! verbatim.

use crate::parser::ast::{Expr, ExprVisitor, Stmt, StmtVisitor};
use crate::parser::lexer::{Token, TokenKind};

/// Visitor that renders every node variant as text. Stateless apart from
/// the traversal itself.
pub struct AstPrinter;

impl AstPrinter {
    /// Render a whole program.
    pub fn print(&mut self, statements: &[Stmt]) -> String {
        let mut out = String::from("(Program\n");
        for stmt in statements {
            out.push_str("  ");
            out.push_str(&stmt.accept(self));
            out.push('\n');
        }
        out.push(')');
        out
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({}", name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');
        out
    }
}

impl ExprVisitor for AstPrinter {
    type Output = String;

    fn visit_binary(&mut self, left: &Expr, op: &Token, right: &Expr) -> String {
        self.parenthesize(&op.text, &[left, right])
    }

    fn visit_literal(&mut self, value: &Token) -> String {
        match value.kind {
            TokenKind::String => format!("\"{}\"", value.text),
            TokenKind::Boolean => {
                if value.text == "true" {
                    "#true".to_string()
                } else {
                    "#false".to_string()
                }
            }
            // Numbers print their literal text unchanged.
            _ => value.text.clone(),
        }
    }

    fn visit_variable(&mut self, name: &Token) -> String {
        format!("(var {})", name.text)
    }

    fn visit_assign(&mut self, name: &Token, value: &Expr) -> String {
        self.parenthesize(&format!("= {}", name.text), &[value])
    }
}

impl StmtVisitor for AstPrinter {
    type Output = String;

    fn visit_expression(&mut self, expr: &Expr) -> String {
        self.parenthesize("Expr", &[expr])
    }

    fn visit_announce(&mut self, value: &Expr) -> String {
        self.parenthesize("announce", &[value])
    }

    fn visit_var_decl(
        &mut self,
        qualifier: &Token,
        name: &Token,
        initializer: Option<&Expr>,
    ) -> String {
        let head = format!("{} {}", qualifier.text, name.text);
        match initializer {
            Some(init) => self.parenthesize(&head, &[init]),
            None => format!("({})", head),
        }
    }

    fn visit_block(&mut self, statements: &[Stmt]) -> String {
        let mut out = String::from("(block\n");
        for stmt in statements {
            out.push_str("    ");
            out.push_str(&stmt.accept(self));
            out.push('\n');
        }
        out.push_str("  )");
        out
    }

    fn visit_loop(&mut self, condition: &Expr, body: &Stmt) -> String {
        format!(
            "(looplap {}\n  {}\n)",
            condition.accept(self),
            body.accept(self)
        )
    }

    fn visit_finishline(&mut self, value: &Expr) -> String {
        self.parenthesize("finishline", &[value])
    }

    fn visit_func_def(&mut self, name: &Token, body: &Stmt) -> String {
        format!("(function {} ()\n  {}\n)", name.text, body.accept(self))
    }

    fn visit_if(&mut self, condition: &Expr, then_branch: &Stmt, else_branch: Option<&Stmt>) -> String {
        let mut out = format!(
            "(track {}\n  {}",
            condition.accept(self),
            then_branch.accept(self)
        );
        if let Some(else_branch) = else_branch {
            out.push_str(&format!("\n  (pitstop {})", else_branch.accept(self)));
        }
        out.push(')');
        out
    }

    fn visit_listen(&mut self, name: &Token) -> String {
        format!("(listen {})", name.text)
    }
}
