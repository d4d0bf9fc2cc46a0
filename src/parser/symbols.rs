//! Flat symbol table and shallow assignment type checks
//!
//! The table maps a declared name to its declared type string and lives for
//! exactly one parse: it is created empty by [`Parser::new`], filled at
//! declaration sites, and consulted only for the restricted assignment-site
//! checks below. There is no scoping — one flat table for the whole program,
//! and re-declaring a name silently overwrites the previous entry (a known
//! gap preserved from the source semantics, see DESIGN.md).
//!
//! [`Parser::new`]: crate::parser::parse::Parser::new

use crate::parser::ast::Expr;
use rustc_hash::FxHashMap;
use std::fmt;

/// The restricted set of literal/declared-type mismatches caught at
/// assignment sites. These are pattern checks over literals, not type
/// inference; anything that is not a literal on the right-hand side
/// passes unchecked.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeError {
    /// Assignment to a name that was never declared
    UndeclaredAssignment { name: String },
    /// A quoted string assigned to an `int`/`float`/`double` variable
    StringToNumeric { name: String, declared: String },
    /// A decimal (or exponent) literal assigned to an `int` variable
    DecimalToInt { name: String },
    /// A bare numeric literal assigned to a `string` variable
    NumericToString { name: String },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeError::UndeclaredAssignment { name } => {
                write!(f, "Type error: assignment to undeclared variable '{}'", name)
            }
            TypeError::StringToNumeric { name, declared } => {
                write!(
                    f,
                    "Type error: cannot assign a string literal to '{}' declared as {}",
                    name, declared
                )
            }
            TypeError::DecimalToInt { name } => {
                write!(
                    f,
                    "Type error: cannot assign a decimal literal to '{}' declared as int",
                    name
                )
            }
            TypeError::NumericToString { name } => {
                write!(
                    f,
                    "Type error: cannot assign a numeric literal to '{}' declared as string",
                    name
                )
            }
        }
    }
}

impl std::error::Error for TypeError {}

/// Flat name → declared-type-string mapping.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: FxHashMap<String, String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Record a declaration. Re-declaration overwrites without diagnostic.
    pub fn declare(&mut self, name: &str, var_type: &str) {
        self.entries.insert(name.to_string(), var_type.to_string());
    }

    /// Look up the declared type string for a name.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Shallow compatibility check for a `name = <literal>` assignment
    /// statement. Declaration initializers and nested assignments are
    /// never checked.
    pub fn check_assignment(&self, name: &str, value: &Expr) -> Result<(), TypeError> {
        let declared = self
            .lookup(name)
            .ok_or_else(|| TypeError::UndeclaredAssignment {
                name: name.to_string(),
            })?;
        let base = base_type(declared);

        match value {
            Expr::Str(_) if matches!(base, "int" | "float" | "double") => {
                Err(TypeError::StringToNumeric {
                    name: name.to_string(),
                    declared: declared.to_string(),
                })
            }
            Expr::Number(text)
                if base == "int" && text.contains(['.', 'e', 'E']) =>
            {
                Err(TypeError::DecimalToInt {
                    name: name.to_string(),
                })
            }
            Expr::Number(_) if base == "string" => Err(TypeError::NumericToString {
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Strip modifier keywords and pointer/reference suffixes from a declared
/// type string, leaving the base type name (`const int*` → `int`).
fn base_type(declared: &str) -> &str {
    declared
        .split_whitespace()
        .find(|word| !matches!(*word, "const" | "static"))
        .unwrap_or(declared)
        .trim_end_matches(['*', '&'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redeclaration_overwrites() {
        let mut table = SymbolTable::new();
        table.declare("x", "int");
        table.declare("x", "string");
        assert_eq!(table.lookup("x"), Some("string"));
    }

    #[test]
    fn test_string_to_int_rejected() {
        let mut table = SymbolTable::new();
        table.declare("x", "int");
        let err = table
            .check_assignment("x", &Expr::Str("\"hi\"".to_string()))
            .unwrap_err();
        assert!(matches!(err, TypeError::StringToNumeric { .. }));
    }

    #[test]
    fn test_decimal_to_int_rejected() {
        let mut table = SymbolTable::new();
        table.declare("x", "int");
        let err = table
            .check_assignment("x", &Expr::Number("3.5".to_string()))
            .unwrap_err();
        assert!(matches!(err, TypeError::DecimalToInt { .. }));

        // A decimal is fine for a float
        table.declare("f", "float");
        assert!(table
            .check_assignment("f", &Expr::Number("3.5".to_string()))
            .is_ok());
    }

    #[test]
    fn test_numeric_to_string_rejected() {
        let mut table = SymbolTable::new();
        table.declare("s", "string");
        let err = table
            .check_assignment("s", &Expr::Number("5".to_string()))
            .unwrap_err();
        assert!(matches!(err, TypeError::NumericToString { .. }));
    }

    #[test]
    fn test_undeclared_rejected_unconditionally() {
        let table = SymbolTable::new();
        let err = table
            .check_assignment("y", &Expr::Ident("z".to_string()))
            .unwrap_err();
        assert!(matches!(err, TypeError::UndeclaredAssignment { .. }));
    }

    #[test]
    fn test_modifiers_stripped_for_check() {
        let mut table = SymbolTable::new();
        table.declare("p", "const int*");
        let err = table
            .check_assignment("p", &Expr::Str("\"no\"".to_string()))
            .unwrap_err();
        assert!(matches!(err, TypeError::StringToNumeric { .. }));
    }

    #[test]
    fn test_non_literal_rhs_unchecked() {
        let mut table = SymbolTable::new();
        table.declare("x", "int");
        assert!(table
            .check_assignment("x", &Expr::Ident("y".to_string()))
            .is_ok());
    }
}
