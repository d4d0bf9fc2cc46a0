//! Lexer (tokenizer) for the C++ subset
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! The lexer is a cursor over an **ordered** table of recognition rules; at each
//! position the first rule whose pattern matches wins, so the table order encodes
//! precedence (comments before the division operator, `#include` before
//! identifiers, multi-character operators before their single-character
//! prefixes, and so on).
//!
//! `<<` and `>>` are classified as stream operators here; whether they act as
//! stream or shift operators is decided by the parser from statement context.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Classification of a lexical unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Number,
    Str,
    Char,
    Keyword,
    Operator,
    StreamOp,
    ScopeRes,
    Delimiter,
    Include,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
            TokenKind::Char => "CHAR",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::StreamOp => "STREAM_OP",
            TokenKind::ScopeRes => "SCOPE_RES",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Include => "INCLUDE",
        };
        write!(f, "{}", name)
    }
}

/// A classified lexical unit: kind plus the literal text it covers.
///
/// Tokens are immutable once produced; the parser only reads them.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind, self.text)
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub offset: usize,
    pub ch: char,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at offset {}: unexpected character '{}'",
            self.offset, self.ch
        )
    }
}

impl std::error::Error for LexError {}

/// A single recognition rule: either emits a token of the given kind or
/// advances the cursor silently (comments, whitespace).
enum Rule {
    Emit(TokenKind),
    Skip,
}

/// Every keyword of the subset, word-boundary anchored so that identifiers
/// like `integer` are not split. Longer words are listed before their
/// prefixes (`double` before `do`).
const KEYWORD_PATTERN: &str = r"(?:auto|bool|break|char|cin|class|continue|const|cout|double|do|else|endl|false|float|for|if|int|new|return|static|string|struct|true|void|while)\b";

/// Ordered rule table. First match at the cursor wins.
static RULES: Lazy<Vec<(Rule, Regex)>> = Lazy::new(|| {
    fn at_cursor(pattern: &str) -> Regex {
        Regex::new(&format!("^(?:{})", pattern)).expect("rule pattern must compile")
    }

    vec![
        // 1. Comments (discarded)
        (Rule::Skip, at_cursor(r"//[^\n]*")),
        (Rule::Skip, at_cursor(r"/\*[\s\S]*?\*/")),
        // 2. Include directive, one token, not decomposed further
        (Rule::Emit(TokenKind::Include), at_cursor(r"#include\s*<[^>\n]*>")),
        // 3. Keywords before identifiers
        (Rule::Emit(TokenKind::Keyword), at_cursor(KEYWORD_PATTERN)),
        // 4. Identifiers
        (
            Rule::Emit(TokenKind::Identifier),
            at_cursor(r"[A-Za-z_][A-Za-z0-9_]*"),
        ),
        // 5. Numeric literals: integer or decimal, optional exponent
        (
            Rule::Emit(TokenKind::Number),
            at_cursor(r"[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?"),
        ),
        // 6. Character literals
        (Rule::Emit(TokenKind::Char), at_cursor(r"'(?:\\.|[^'\\\n])'")),
        // 7. String literals, escapes allowed, no embedded raw newline
        (
            Rule::Emit(TokenKind::Str),
            at_cursor(r#""(?:\\.|[^"\\\n])*""#),
        ),
        // 8. Stream operators (shift disambiguation happens in the parser)
        (Rule::Emit(TokenKind::StreamOp), at_cursor(r"<<|>>")),
        // 9. Increment / decrement
        (Rule::Emit(TokenKind::Operator), at_cursor(r"\+\+|--")),
        // 10. Two-character relational/logical/arrow operators
        (
            Rule::Emit(TokenKind::Operator),
            at_cursor(r"==|!=|<=|>=|&&|\|\||->"),
        ),
        // 11. Single-character operators
        (Rule::Emit(TokenKind::Operator), at_cursor(r"[+\-*/%=<>!&|^~.]")),
        // 12. Scope resolution (before the ':' delimiter)
        (Rule::Emit(TokenKind::ScopeRes), at_cursor(r"::")),
        // 13. Delimiters
        (Rule::Emit(TokenKind::Delimiter), at_cursor(r"[\[\](){};,:]")),
        // 14. Whitespace (discarded)
        (Rule::Skip, at_cursor(r"\s+")),
    ]
});

/// Lexer for the C++ subset
pub struct Lexer {
    input: String,
    position: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    ///
    /// Normalization happens here, before any scanning: `\r\n` (and stray
    /// `\r`) become `\n`, and BOM/zero-width characters are removed.
    pub fn new(source: &str) -> Self {
        let input: String = source
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .chars()
            .filter(|c| !matches!(c, '\u{feff}' | '\u{200b}' | '\u{200c}' | '\u{200d}'))
            .collect();

        Self { input, position: 0 }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while self.position < self.input.len() {
            let rest = &self.input[self.position..];
            let mut matched = false;

            for (rule, pattern) in RULES.iter() {
                if let Some(m) = pattern.find(rest) {
                    if let Rule::Emit(kind) = rule {
                        tokens.push(Token::new(*kind, m.as_str()));
                    }
                    self.position += m.end();
                    matched = true;
                    break;
                }
            }

            if !matched {
                let ch = rest.chars().next().unwrap_or('\0');
                return Err(LexError {
                    offset: self.position,
                    ch,
                });
            }
        }

        Ok(tokens)
    }
}
