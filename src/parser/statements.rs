//! Statement parsing implementation
//!
//! This module handles parsing of all statement forms:
//!
//! - Declarations (variables, prototypes, functions): `int x = 42;`
//! - Stream I/O: `cin >> a;`, `cout << a << endl;`
//! - Control flow: `if`, `while`, `for`, `do-while`
//! - Jump statements: `return`, `break`, `continue`
//! - Compound statements: `{ ... }`
//! - Expression statements: function calls, assignments
//!
//! # Grammar
//!
//! ```text
//! statement ::= include | declaration | input_stmt | print_stmt
//!             | if_stmt | while_stmt | do_while_stmt | for_stmt
//!             | return_stmt | break_stmt | continue_stmt
//!             | block | expr_stmt
//! ```
//!
//! Anything that does not open a known statement form is attempted as a
//! bare expression statement; a failure on that path is wrapped in an
//! "invalid statement" error naming the leading token, with the original
//! error kept as the cause.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{Expr, Stmt};
use crate::parser::expressions::PREC_SHIFT;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a statement, dispatching on the current token.
    pub(crate) fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        let token = match self.peek() {
            Some(t) => t.clone(),
            None => return Err(self.unexpected("a statement")),
        };

        match token.kind {
            TokenKind::Include => {
                self.position += 1;
                Ok(Stmt::Include {
                    path: include_path(&token.text),
                })
            }

            TokenKind::Keyword => match token.text.as_str() {
                "if" => self.parse_if_statement(),
                "while" => self.parse_while_statement(),
                "do" => self.parse_do_while_statement(),
                "for" => self.parse_for_statement(),
                "return" => self.parse_return_statement(),
                "break" => {
                    self.position += 1;
                    self.expect(TokenKind::Delimiter, ";")?;
                    Ok(Stmt::Break)
                }
                "continue" => {
                    self.position += 1;
                    self.expect(TokenKind::Delimiter, ";")?;
                    Ok(Stmt::Continue)
                }
                "cin" => self.parse_input_statement(),
                "cout" => self.parse_print_statement(),
                // Recognized lexically, never parsed (see DESIGN.md)
                "class" | "struct" => Err(ParseError::UnsupportedKeyword {
                    keyword: token.text,
                }),
                _ if self.is_declaration_start() => self.parse_declaration(),
                // `true`, `false`, `endl`, `new` can open an expression
                _ => self.parse_expression_statement(),
            },

            TokenKind::Delimiter if token.text == "{" => self.parse_block(),

            _ => self.parse_expression_statement(),
        }
    }

    /// Parse `{ statement* }` into a block statement.
    pub(crate) fn parse_block(&mut self) -> Result<Stmt, ParseError> {
        Ok(Stmt::Block(self.parse_brace_block()?))
    }

    /// Parse `{ statement* }` and return the inner statement sequence.
    pub(crate) fn parse_brace_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(TokenKind::Delimiter, "{")?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::Delimiter, "}") && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.expect(TokenKind::Delimiter, "}")?;
        Ok(statements)
    }

    /// Parse the body of a control-flow statement: a block or a single statement.
    fn parse_statement_or_block(&mut self) -> Result<Box<Stmt>, ParseError> {
        if self.check(TokenKind::Delimiter, "{") {
            Ok(Box::new(self.parse_block()?))
        } else {
            Ok(Box::new(self.parse_statement()?))
        }
    }

    /// Parse an input statement: `cin (>> target)+ ;`
    fn parse_input_statement(&mut self) -> Result<Stmt, ParseError> {
        self.position += 1; // consume 'cin'
        let mut targets = Vec::new();

        self.expect(TokenKind::StreamOp, ">>")?;
        targets.push(self.parse_stream_operand()?);

        while self.match_token(TokenKind::StreamOp, ">>") {
            targets.push(self.parse_stream_operand()?);
        }

        self.expect(TokenKind::Delimiter, ";")?;
        Ok(Stmt::Input { targets })
    }

    /// Parse a print statement: `cout (<< part | endl)* ;`
    fn parse_print_statement(&mut self) -> Result<Stmt, ParseError> {
        self.position += 1; // consume 'cout'
        let mut parts = Vec::new();

        while !self.check(TokenKind::Delimiter, ";") {
            if self.match_token(TokenKind::StreamOp, "<<") {
                if self.check_keyword("endl") {
                    self.position += 1;
                    parts.push(Expr::newline());
                } else {
                    parts.push(self.parse_stream_operand()?);
                }
            } else if self.check_keyword("endl") {
                self.position += 1;
                parts.push(Expr::newline());
            } else {
                return Err(self.unexpected("STREAM_OP '<<'"));
            }
        }

        self.expect(TokenKind::Delimiter, ";")?;
        Ok(Stmt::Print { parts })
    }

    /// Parse one operand of a stream statement. The floor sits just above
    /// shift precedence so a following `<<`/`>>` is left for the statement
    /// loop instead of being consumed as a shift operator.
    fn parse_stream_operand(&mut self) -> Result<Expr, ParseError> {
        self.parse_binary_expr(PREC_SHIFT + 1)
    }

    /// Parse if statement
    fn parse_if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.position += 1; // consume 'if'

        self.expect(TokenKind::Delimiter, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Delimiter, ")")?;

        let then_branch = self.parse_statement_or_block()?;

        let else_branch = if self.match_token(TokenKind::Keyword, "else") {
            Some(self.parse_statement_or_block()?)
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// Parse while statement
    fn parse_while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.position += 1; // consume 'while'

        self.expect(TokenKind::Delimiter, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Delimiter, ")")?;

        let body = self.parse_statement_or_block()?;

        Ok(Stmt::While { condition, body })
    }

    /// Parse do-while statement
    fn parse_do_while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.position += 1; // consume 'do'

        let body = self.parse_statement_or_block()?;

        self.expect(TokenKind::Keyword, "while")?;
        self.expect(TokenKind::Delimiter, "(")?;
        let condition = self.parse_expression()?;
        self.expect(TokenKind::Delimiter, ")")?;
        self.expect(TokenKind::Delimiter, ";")?;

        Ok(Stmt::DoWhile { body, condition })
    }

    /// Parse for statement. All three clauses are optional except the two
    /// separating semicolons; a missing condition defaults to `true`.
    fn parse_for_statement(&mut self) -> Result<Stmt, ParseError> {
        self.position += 1; // consume 'for'

        self.expect(TokenKind::Delimiter, "(")?;

        let init = if self.match_token(TokenKind::Delimiter, ";") {
            None
        } else if self.is_declaration_start() {
            // The declaration consumes its own ';'
            Some(Box::new(self.parse_declaration()?))
        } else {
            let expr = self.parse_expression()?;
            self.expect(TokenKind::Delimiter, ";")?;
            Some(Box::new(Stmt::ExprStmt(expr)))
        };

        let condition = if self.check(TokenKind::Delimiter, ";") {
            Expr::Bool(true)
        } else {
            self.parse_expression()?
        };
        self.expect(TokenKind::Delimiter, ";")?;

        let update = if self.check(TokenKind::Delimiter, ")") {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect(TokenKind::Delimiter, ")")?;

        let body = self.parse_statement_or_block()?;

        Ok(Stmt::For {
            init,
            condition,
            update,
            body,
        })
    }

    /// Parse return statement
    fn parse_return_statement(&mut self) -> Result<Stmt, ParseError> {
        self.position += 1; // consume 'return'

        let value = if self.check(TokenKind::Delimiter, ";") {
            None
        } else {
            Some(self.parse_expression()?)
        };

        self.expect(TokenKind::Delimiter, ";")?;
        Ok(Stmt::Return(value))
    }

    /// Attempt a bare expression statement. Any failure on this path is
    /// reported as an invalid statement naming the leading token; the
    /// original error is retained as the cause.
    fn parse_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let leading = self.found_description();

        self.try_expression_statement()
            .map_err(|cause| ParseError::InvalidStatement {
                token: leading,
                cause: Box::new(cause),
            })
    }

    fn try_expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;

        // The shallow type check applies only to a top-level assignment
        // to a plain name; nested assignments fall through unchecked.
        if let Expr::Assign { target, value } = &expr {
            if let Expr::Ident(name) = target.as_ref() {
                self.symbols.check_assignment(name, value)?;
            }
        }

        self.expect(TokenKind::Delimiter, ";")?;
        Ok(Stmt::ExprStmt(expr))
    }
}

/// Extract the bracketed path from an `#include <...>` token.
fn include_path(text: &str) -> String {
    match (text.find('<'), text.rfind('>')) {
        (Some(open), Some(close)) if open + 1 <= close => text[open + 1..close].to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Vec<Stmt> {
        Parser::new(source).unwrap().parse_program().unwrap()
    }

    #[test]
    fn test_input_statement() {
        let program = parse("int a; int b; cin >> a >> b;");

        match &program[2] {
            Stmt::Input { targets } => {
                assert_eq!(targets.len(), 2);
                assert_eq!(targets[0], Expr::Ident("a".to_string()));
                assert_eq!(targets[1], Expr::Ident("b".to_string()));
            }
            other => panic!("Expected input statement, got {:?}", other),
        }
    }

    #[test]
    fn test_print_statement_with_endl() {
        let program = parse("int a; cout << a << endl;");

        match &program[1] {
            Stmt::Print { parts } => {
                assert_eq!(parts.len(), 2);
                assert_eq!(parts[0], Expr::Ident("a".to_string()));
                assert!(parts[1].is_newline_literal());
            }
            other => panic!("Expected print statement, got {:?}", other),
        }
    }

    #[test]
    fn test_print_operand_keeps_additive() {
        // `a + b` is one part; the following `<<` belongs to the statement
        let program = parse("int a; int b; cout << a + b << endl;");

        match &program[2] {
            Stmt::Print { parts } => {
                assert_eq!(parts.len(), 2);
                assert_eq!(parts[0].to_string(), "(a + b)");
            }
            other => panic!("Expected print statement, got {:?}", other),
        }
    }

    #[test]
    fn test_if_else() {
        let program = parse("int x; if (x > 0) x = 1; else { x = 2; }");

        match &program[1] {
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                assert_eq!(condition.to_string(), "(x > 0)");
                assert!(matches!(then_branch.as_ref(), Stmt::ExprStmt(_)));
                assert!(matches!(
                    else_branch.as_deref(),
                    Some(Stmt::Block(stmts)) if stmts.len() == 1
                ));
            }
            other => panic!("Expected if statement, got {:?}", other),
        }
    }

    #[test]
    fn test_do_while() {
        let program = parse("int i; do { i++; } while (i < 3);");
        assert!(matches!(&program[1], Stmt::DoWhile { .. }));
    }

    #[test]
    fn test_for_with_all_clauses() {
        let program = parse("for (int i = 0; i < 3; i++) cout << i;");

        match &program[0] {
            Stmt::For {
                init,
                condition,
                update,
                body,
            } => {
                assert!(matches!(
                    init.as_deref(),
                    Some(Stmt::Declaration { name, .. }) if name == "i"
                ));
                assert_eq!(condition.to_string(), "(i < 3)");
                assert_eq!(update.as_ref().unwrap().to_string(), "(i++)");
                assert!(matches!(body.as_ref(), Stmt::Print { .. }));
            }
            other => panic!("Expected for statement, got {:?}", other),
        }
    }

    #[test]
    fn test_for_missing_condition_defaults_true() {
        let program = parse("for (;;) break;");

        match &program[0] {
            Stmt::For {
                init,
                condition,
                update,
                ..
            } => {
                assert!(init.is_none());
                assert_eq!(*condition, Expr::Bool(true));
                assert!(update.is_none());
            }
            other => panic!("Expected for statement, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_statement_wraps_cause() {
        let err = Parser::new("int x; x = ;")
            .unwrap()
            .parse_program()
            .unwrap_err();

        match err {
            ParseError::InvalidStatement { token, cause } => {
                assert_eq!(token, "IDENTIFIER 'x'");
                assert!(matches!(*cause, ParseError::UnexpectedToken { .. }));
            }
            other => panic!("Expected InvalidStatement, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_assignment_not_type_checked() {
        // `a = b = 1` has a nested assignment on the right; no literal
        // pattern applies, so it passes.
        let program = parse("int a; int b; a = b = 1;");
        assert!(matches!(&program[2], Stmt::ExprStmt(Expr::Assign { .. })));
    }

    #[test]
    fn test_include_path_extraction() {
        assert_eq!(include_path("#include <iostream>"), "iostream");
        assert_eq!(include_path("#include<vector>"), "vector");
    }
}
