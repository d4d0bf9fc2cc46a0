//! Declaration parsing implementation
//!
//! This module handles declarations of variables and functions:
//!
//! - Variable declarations: `int x = 42;`
//! - Bare prototypes: `int add(int a, int b);`
//! - Function definitions: `int add(int a, int b) { ... }`
//! - Type parsing: modifier keywords, base types, `*`/`&` suffixes
//!
//! # Grammar
//!
//! ```text
//! declaration ::= type identifier ( var_tail | func_tail )
//! var_tail    ::= ( "=" expression )? ";"
//! func_tail   ::= "(" params ")" ( block | ";" )
//! type        ::= ("const" | "static")* base_type ("*" | "&")*
//! ```
//!
//! Every declared name is recorded in the symbol table at the point of
//! declaration; re-declaration overwrites silently.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::{Param, Stmt};
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{ParseError, Parser};

/// Primitive type keywords that can open a declaration.
const TYPE_KEYWORDS: &[&str] = &[
    "int", "float", "double", "char", "bool", "string", "void", "auto",
];

/// Modifier keywords absorbed into the declared type string.
const MODIFIER_KEYWORDS: &[&str] = &["const", "static"];

impl Parser {
    /// True when the current token can start a declaration.
    pub(crate) fn is_declaration_start(&self) -> bool {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Keyword => {
                TYPE_KEYWORDS.contains(&t.text.as_str())
                    || MODIFIER_KEYWORDS.contains(&t.text.as_str())
            }
            _ => false,
        }
    }

    /// Parse a type: modifier keywords, a base type keyword, then any
    /// number of `*`/`&` suffixes, all absorbed into one type string.
    pub(crate) fn parse_type(&mut self) -> Result<String, ParseError> {
        let mut parts: Vec<String> = Vec::new();

        while let Some(t) = self.peek() {
            if t.kind == TokenKind::Keyword && MODIFIER_KEYWORDS.contains(&t.text.as_str()) {
                parts.push(t.text.clone());
                self.position += 1;
            } else {
                break;
            }
        }

        match self.peek() {
            Some(t) if t.kind == TokenKind::Keyword && TYPE_KEYWORDS.contains(&t.text.as_str()) => {
                parts.push(t.text.clone());
                self.position += 1;
            }
            _ => return Err(self.unexpected("a type keyword")),
        }

        let mut var_type = parts.join(" ");
        loop {
            if self.match_token(TokenKind::Operator, "*") {
                var_type.push('*');
            } else if self.match_token(TokenKind::Operator, "&") {
                var_type.push('&');
            } else {
                break;
            }
        }

        Ok(var_type)
    }

    /// Parse a declaration statement: variable, prototype, or full function.
    pub(crate) fn parse_declaration(&mut self) -> Result<Stmt, ParseError> {
        let var_type = self.parse_type()?;
        let name = self.expect_identifier()?;

        // Recorded immediately, before the initializer or body is parsed.
        self.symbols.declare(&name, &var_type);

        if self.match_token(TokenKind::Delimiter, "(") {
            let params = self.parse_parameter_list()?;
            self.expect(TokenKind::Delimiter, ")")?;

            if self.check(TokenKind::Delimiter, "{") {
                let body = self.parse_brace_block()?;
                return Ok(Stmt::Function {
                    return_type: var_type,
                    name,
                    params,
                    body,
                });
            }

            self.expect(TokenKind::Delimiter, ";")?;
            return Ok(Stmt::FunctionDecl {
                return_type: var_type,
                name,
                params,
            });
        }

        let init = if self.match_token(TokenKind::Operator, "=") {
            Some(self.parse_expression()?)
        } else {
            None
        };

        self.expect(TokenKind::Delimiter, ";")?;

        Ok(Stmt::Declaration {
            var_type,
            name,
            init,
        })
    }

    /// Parse a parameter list: `type name, type name, ...` (possibly empty).
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();

        if self.check(TokenKind::Delimiter, ")") {
            return Ok(params);
        }

        loop {
            let param_type = self.parse_type()?;
            let name = self.expect_identifier()?;
            params.push(Param { param_type, name });

            if !self.match_token(TokenKind::Delimiter, ",") {
                break;
            }
        }

        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::Expr;

    fn parse(source: &str) -> Vec<Stmt> {
        Parser::new(source).unwrap().parse_program().unwrap()
    }

    #[test]
    fn test_variable_declaration_with_init() {
        let program = parse("int x = 1 + 2;");

        match &program[0] {
            Stmt::Declaration {
                var_type,
                name,
                init,
            } => {
                assert_eq!(var_type, "int");
                assert_eq!(name, "x");
                assert_eq!(init.as_ref().unwrap().to_string(), "(1 + 2)");
            }
            other => panic!("Expected declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_type_modifiers_and_suffixes() {
        let program = parse("const int* p; static float f;");

        assert!(matches!(
            &program[0],
            Stmt::Declaration { var_type, .. } if var_type == "const int*"
        ));
        assert!(matches!(
            &program[1],
            Stmt::Declaration { var_type, .. } if var_type == "static float"
        ));
    }

    #[test]
    fn test_declaration_initializer_not_type_checked() {
        // Only assignment statements are checked, never initializers.
        let program = parse("int x = \"hi\";");
        assert!(matches!(
            &program[0],
            Stmt::Declaration { init: Some(Expr::Str(_)), .. }
        ));
    }

    #[test]
    fn test_function_definition_records_name() {
        let mut parser = Parser::new("void f() { }").unwrap();
        parser.parse_program().unwrap();
        assert_eq!(parser.symbols.lookup("f"), Some("void"));
    }
}
