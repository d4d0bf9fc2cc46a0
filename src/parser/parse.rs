//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Types, variable declarations, prototypes, and functions
//! - `statements`: Statement dispatch (control flow, `cin`/`cout`, blocks)
//! - `expressions`: Precedence climbing for expressions
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::Stmt;
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use crate::parser::symbols::{SymbolTable, TypeError};
use std::fmt;

/// Parser error type
///
/// The expression-statement fallback wraps whatever went wrong inside it in
/// [`ParseError::InvalidStatement`], naming the statement's leading token.
/// The inner error is kept as the cause and surfaced through
/// [`std::error::Error::source`] rather than discarded.
#[derive(Debug)]
pub enum ParseError {
    /// A required token kind/value was absent
    UnexpectedToken { expected: String, found: String },
    /// A keyword that is recognized lexically but has no statement grammar
    /// (`class`, `struct`)
    UnsupportedKeyword { keyword: String },
    /// The bare expression-statement path failed; `cause` is the original error
    InvalidStatement {
        token: String,
        cause: Box<ParseError>,
    },
    /// Shallow assignment-site type mismatch
    TypeMismatch(TypeError),
    Lex(LexError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => {
                write!(f, "Syntax error: expected {}, found {}", expected, found)
            }
            ParseError::UnsupportedKeyword { keyword } => {
                write!(
                    f,
                    "Syntax error: unsupported keyword '{}' in statement position",
                    keyword
                )
            }
            ParseError::InvalidStatement { token, .. } => {
                write!(f, "Invalid statement starting with {}", token)
            }
            ParseError::TypeMismatch(err) => write!(f, "{}", err),
            ParseError::Lex(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::InvalidStatement { cause, .. } => Some(cause.as_ref()),
            ParseError::TypeMismatch(err) => Some(err),
            ParseError::Lex(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}

impl From<TypeError> for ParseError {
    fn from(err: TypeError) -> Self {
        ParseError::TypeMismatch(err)
    }
}

/// Recursive descent parser for the C++ subset
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
    pub(crate) symbols: SymbolTable,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
            symbols: SymbolTable::new(),
        })
    }

    /// Parse the entire program into a top-level statement sequence.
    ///
    /// The symbol table is discarded with the parser; its only observable
    /// effect is the compile-time checks performed during parsing.
    pub fn parse_program(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    pub(crate) fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn check(&self, kind: TokenKind, text: &str) -> bool {
        matches!(self.peek(), Some(t) if t.kind == kind && t.text == text)
    }

    pub(crate) fn check_keyword(&self, keyword: &str) -> bool {
        self.check(TokenKind::Keyword, keyword)
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind, text: &str) -> bool {
        if self.check(kind, text) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Consume a token of the given kind and text, or fail naming it.
    pub(crate) fn expect(&mut self, kind: TokenKind, text: &str) -> Result<Token, ParseError> {
        match self.peek() {
            Some(t) if t.kind == kind && t.text == text => {
                let token = t.clone();
                self.position += 1;
                Ok(token)
            }
            _ => Err(self.unexpected(&format!("{} '{}'", kind, text))),
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Identifier => {
                let name = t.text.clone();
                self.position += 1;
                Ok(name)
            }
            _ => Err(self.unexpected("an identifier")),
        }
    }

    pub(crate) fn unexpected(&self, expected: &str) -> ParseError {
        ParseError::UnexpectedToken {
            expected: expected.to_string(),
            found: self.found_description(),
        }
    }

    /// The current token rendered for an error message, or "end of input".
    pub(crate) fn found_description(&self) -> String {
        match self.peek() {
            Some(token) => token.to_string(),
            None => "end of input".to_string(),
        }
    }
}
