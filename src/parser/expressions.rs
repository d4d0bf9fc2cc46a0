//! Expression parsing implementation
//!
//! This module parses expressions with **precedence climbing**: one table
//! maps each binary operator to an integer precedence, and a single loop
//! consumes operators whose precedence is at least the current floor,
//! recursing into the right operand with `precedence + 1` for
//! left-associative operators and `precedence` for the right-associative
//! assignment. This yields correct associativity without a grammar rule
//! per level.
//!
//! # Precedence table (low → high)
//!
//! ```text
//! 1  =          7  == !=
//! 2  ||         8  < <= > >=
//! 3  &&         9  << >>  (stream-operator tokens, shift in expressions)
//! 4  |          10 + -
//! 5  ^          11 * / %
//! 6  &          12 . -> ::
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::Expr;
use crate::parser::lexer::{Token, TokenKind};
use crate::parser::parse::{ParseError, Parser};

/// Lowest precedence: the right-associative assignment operator.
pub(crate) const PREC_ASSIGN: u8 = 1;
/// Shift precedence; stream targets parse one level above it so that
/// `cin >> a >> b` is not swallowed as a shift expression.
pub(crate) const PREC_SHIFT: u8 = 9;

/// Precedence of the token as a binary operator, or `None` when the token
/// cannot continue a binary expression.
fn binary_precedence(token: &Token) -> Option<u8> {
    match token.kind {
        TokenKind::StreamOp => Some(PREC_SHIFT),
        TokenKind::ScopeRes => Some(12),
        TokenKind::Operator => match token.text.as_str() {
            "=" => Some(PREC_ASSIGN),
            "||" => Some(2),
            "&&" => Some(3),
            "|" => Some(4),
            "^" => Some(5),
            "&" => Some(6),
            "==" | "!=" => Some(7),
            "<" | "<=" | ">" | ">=" => Some(8),
            "+" | "-" => Some(10),
            "*" | "/" | "%" => Some(11),
            "." | "->" => Some(12),
            _ => None,
        },
        _ => None,
    }
}

const PREFIX_OPERATORS: &[&str] = &["++", "--", "+", "-", "!", "~"];

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_expr(PREC_ASSIGN)
    }

    /// Precedence climbing from a minimum precedence floor.
    pub(crate) fn parse_binary_expr(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        while let Some(token) = self.peek() {
            let prec = match binary_precedence(token) {
                Some(p) if p >= min_prec => p,
                _ => break,
            };
            let op = token.text.clone();
            self.position += 1;

            // Assignment is the one right-associative operator.
            let next_min = if op == "=" { prec } else { prec + 1 };
            let right = self.parse_binary_expr(next_min)?;

            left = if op == "=" {
                Expr::Assign {
                    target: Box::new(left),
                    value: Box::new(right),
                }
            } else {
                Expr::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                }
            };
        }

        Ok(left)
    }

    /// Parse a primary term: prefix unary, literal, identifier (with call,
    /// index, and postfix forms), parenthesized expression, or `new`.
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = match self.peek() {
            Some(t) => t.clone(),
            None => return Err(self.unexpected("an expression")),
        };

        match token.kind {
            TokenKind::Operator if PREFIX_OPERATORS.contains(&token.text.as_str()) => {
                self.position += 1;
                let operand = Box::new(self.parse_primary()?);
                Ok(Expr::Unary {
                    op: token.text,
                    operand,
                })
            }

            TokenKind::Number => {
                self.position += 1;
                Ok(Expr::Number(token.text))
            }
            TokenKind::Str => {
                self.position += 1;
                Ok(Expr::Str(token.text))
            }
            TokenKind::Char => {
                self.position += 1;
                Ok(Expr::Char(token.text))
            }

            TokenKind::Keyword => match token.text.as_str() {
                "true" => {
                    self.position += 1;
                    Ok(Expr::Bool(true))
                }
                "false" => {
                    self.position += 1;
                    Ok(Expr::Bool(false))
                }
                // `endl` is rewritten to a newline string literal
                "endl" => {
                    self.position += 1;
                    Ok(Expr::newline())
                }
                "new" => self.parse_new_expr(),
                _ => Err(self.unexpected("an expression")),
            },

            TokenKind::Identifier => {
                self.position += 1;
                let mut expr = Expr::Ident(token.text);

                // Postfix forms, first match consumed, repeated
                loop {
                    if self.match_token(TokenKind::Operator, "++") {
                        expr = Expr::Postfix {
                            op: "++".to_string(),
                            operand: Box::new(expr),
                        };
                    } else if self.match_token(TokenKind::Operator, "--") {
                        expr = Expr::Postfix {
                            op: "--".to_string(),
                            operand: Box::new(expr),
                        };
                    } else if self.check(TokenKind::Delimiter, "(") {
                        expr = self.parse_call(expr)?;
                    } else if self.match_token(TokenKind::Delimiter, "[") {
                        let index = Box::new(self.parse_expression()?);
                        self.expect(TokenKind::Delimiter, "]")?;
                        expr = Expr::Index {
                            object: Box::new(expr),
                            index,
                        };
                    } else {
                        break;
                    }
                }

                Ok(expr)
            }

            TokenKind::Delimiter if token.text == "(" => {
                self.position += 1;
                let expr = self.parse_expression()?;
                self.expect(TokenKind::Delimiter, ")")?;
                Ok(expr)
            }

            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parse `new Type` / `new Type[size]`
    fn parse_new_expr(&mut self) -> Result<Expr, ParseError> {
        self.position += 1; // consume 'new'
        let class = self.expect_identifier()?;

        let size = if self.match_token(TokenKind::Delimiter, "[") {
            let size = Box::new(self.parse_expression()?);
            self.expect(TokenKind::Delimiter, "]")?;
            Some(size)
        } else {
            None
        };

        Ok(Expr::New { class, size })
    }

    /// Parse a call: `callee(arg, arg, ...)`.
    fn parse_call(&mut self, callee: Expr) -> Result<Expr, ParseError> {
        let name = match callee {
            Expr::Ident(name) => name,
            other => {
                return Err(ParseError::UnexpectedToken {
                    expected: "a function name".to_string(),
                    found: format!("expression {}", other),
                })
            }
        };

        self.expect(TokenKind::Delimiter, "(")?;
        let mut args = Vec::new();

        if !self.check(TokenKind::Delimiter, ")") {
            loop {
                args.push(self.parse_expression()?);
                if !self.match_token(TokenKind::Delimiter, ",") {
                    break;
                }
            }
        }

        self.expect(TokenKind::Delimiter, ")")?;
        Ok(Expr::Call { callee: name, args })
    }
}
