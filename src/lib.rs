//! # Introduction
//!
//! `autospeed` is the front end for the AutoSpeed toy language: it turns
//! source text into a token stream, the token stream into an abstract
//! syntax tree, and can render that tree back out as readable text. There
//! is no evaluator or type checker; the pipeline stops at a syntactically
//! validated tree.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → AST → AstPrinter → text
//! ```
//!
//! 1. [`parser::lexer`] — tokenises the source. Total: lexical problems
//!    become diagnostics, never a failed scan.
//! 2. [`parser::parse`] — recursive descent over the token stream with
//!    panic-mode recovery, so one malformed statement costs one diagnostic
//!    instead of the whole parse.
//! 3. [`printer`] — a visitor that renders any tree as a fully
//!    parenthesized, indented form for inspection.
//!
//! Each invocation owns its own cursor and output; nothing is shared
//! between calls except the read-only keyword tables.

pub mod parser;
pub mod printer;

pub use parser::ast::{Expr, ExprVisitor, Stmt, StmtVisitor};
pub use parser::lexer::{LexError, Lexer, Token, TokenKind};
pub use parser::parse::{ParseError, Parser};
pub use printer::AstPrinter;
