//! Lexer (tokenizer) for AutoSpeed source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Scanning is total: lexical problems are collected as [`LexError`]
//! diagnostics instead of aborting the scan, and every token stream ends with
//! exactly one [`TokenKind::Eof`] token.

use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashSet;
use thiserror::Error;

/// The reserved words of the language.
///
/// `overtake`, `key`, `#oil`, and `#car` are reserved but currently start no
/// statement; the parser rejects them structurally.
static KEYWORDS: LazyLock<FxHashSet<&'static str>> = LazyLock::new(|| {
    [
        "ignite",
        "engine",
        "gear",
        "turbo",
        "exhaust",
        "flag",
        "announce",
        "listen",
        "track",
        "pitstop",
        "looplap",
        "overtake",
        "finishline",
        "key",
        "#oil",
        "#car",
    ]
    .into_iter()
    .collect()
});

static BOOLEANS: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| ["true", "false"].into_iter().collect());

fn is_operator_char(ch: char) -> bool {
    matches!(ch, '+' | '-' | '*' | '/' | '=' | '<' | '>')
}

fn is_symbol_char(ch: char) -> bool {
    matches!(ch, '{' | '}' | '(' | ')' | ';')
}

/// Token categories produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    String,
    Operator,
    Symbol,
    Boolean,
    Eof,
    Unknown,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Symbol => "SYMBOL",
            TokenKind::Boolean => "BOOLEAN",
            TokenKind::Eof => "END_OF_FILE",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}

/// A single lexeme with its category and 1-based source line.
///
/// Tokens are immutable once produced; the parser consumes them by value and
/// clones the ones it stores into the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::String => write!(f, "string \"{}\"", self.text),
            TokenKind::Eof => write!(f, "end of file"),
            TokenKind::Unknown => write!(f, "unknown character '{}'", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Lexical diagnostics. These never abort the scan as a whole; callers read
/// them from [`Lexer::scan`] after the fact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Lexer error at line {line}: unterminated string")]
    UnterminatedString { line: usize },
    #[error("Lexer error at line {line}: unknown character '{found}'")]
    UnknownCharacter { found: char, line: usize },
}

/// Lexer for AutoSpeed source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    errors: Vec<LexError>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// Returns the token stream and any lexical diagnostics. The stream
    /// always ends with a single `Eof` token carrying the line scanning
    /// stopped on, even when an unterminated string cut the scan short.
    pub fn scan(mut self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            let Some(ch) = self.peek() else {
                break;
            };

            match ch {
                '"' => {
                    if !self.string_literal(&mut tokens) {
                        // Unterminated string: stop scanning immediately.
                        break;
                    }
                }
                c if c.is_ascii_alphabetic() || c == '#' => self.word(&mut tokens),
                c if c.is_ascii_digit() => self.number_literal(&mut tokens),
                c if is_operator_char(c) => self.operator(&mut tokens),
                c if is_symbol_char(c) => {
                    self.advance();
                    tokens.push(Token::new(TokenKind::Symbol, c, self.line));
                }
                c => {
                    self.advance();
                    self.errors.push(LexError::UnknownCharacter {
                        found: c,
                        line: self.line,
                    });
                    tokens.push(Token::new(TokenKind::Unknown, c, self.line));
                }
            }
        }

        tokens.push(Token::new(TokenKind::Eof, "EOF", self.line));
        (tokens, self.errors)
    }

    /// Scan a string literal. Characters up to the closing quote are taken
    /// verbatim (there are no escape sequences); embedded newlines advance
    /// the line counter but the token keeps its opening line.
    ///
    /// Returns `false` when the input ran out before the closing quote.
    fn string_literal(&mut self, tokens: &mut Vec<Token>) -> bool {
        let start_line = self.line;
        self.advance(); // consume opening quote

        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch == '"' {
                self.advance(); // consume closing quote
                tokens.push(Token::new(TokenKind::String, text, start_line));
                return true;
            }
            text.push(ch);
            self.advance();
        }

        self.errors
            .push(LexError::UnterminatedString { line: start_line });
        false
    }

    /// Scan a word starting with a letter or `#` and classify it as a
    /// keyword, boolean literal, or identifier.
    fn word(&mut self, tokens: &mut Vec<Token>) {
        let line = self.line;
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '#' || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = if KEYWORDS.contains(text.as_str()) {
            TokenKind::Keyword
        } else if BOOLEANS.contains(text.as_str()) {
            TokenKind::Boolean
        } else {
            TokenKind::Identifier
        };

        tokens.push(Token::new(kind, text, line));
    }

    /// Scan a numeric literal: digits with at most one decimal point. A
    /// second `.` ends the number without being consumed, so malformed input
    /// like `1.2.3` yields adjacent tokens rather than a scan error.
    fn number_literal(&mut self, tokens: &mut Vec<Token>) {
        let line = self.line;
        let mut text = String::new();
        let mut has_decimal = false;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else if ch == '.' {
                if has_decimal {
                    break;
                }
                has_decimal = true;
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        tokens.push(Token::new(TokenKind::Number, text, line));
    }

    /// Scan an operator, preferring a two-character form over a single
    /// character.
    fn operator(&mut self, tokens: &mut Vec<Token>) {
        let line = self.line;
        let Some(first) = self.advance() else {
            return;
        };

        // The `!=` arm is unreachable today: '!' is not an operator start
        // character, so it only matters if '!' ever becomes lexable.
        if let Some(next) = self.peek() {
            let two_char = matches!(
                (first, next),
                ('=', '=') | ('<', '=') | ('>', '=') | ('!', '=')
            );
            if two_char {
                self.advance();
                tokens.push(Token::new(
                    TokenKind::Operator,
                    format!("{}{}", first, next),
                    line,
                ));
                return;
            }
        }

        tokens.push(Token::new(TokenKind::Operator, first, line));
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Peek at the current character without consuming.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to the next character, tracking line numbers.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }
}
