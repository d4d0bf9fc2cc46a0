// AST (Abstract Syntax Tree) definitions for the transpiler

use std::fmt;

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub param_type: String,
    pub name: String,
}

/// Expression tree.
///
/// Expressions are structured nodes rather than pre-rendered text; the
/// fully-parenthesized rendering (`(1 + (2 * 3))`) is available through
/// [`fmt::Display`], and the JavaScript rendering lives in the code
/// generator. Literal variants keep the literal's source text verbatim
/// (string and character literals include their quotes) so they can be
/// re-emitted without an escaping round trip.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(String),
    Str(String),
    Char(String),
    Bool(bool),
    Ident(String),
    /// Prefix `++ -- + - ! ~`
    Unary { op: String, operand: Box<Expr> },
    /// Postfix `++` / `--`
    Postfix { op: String, operand: Box<Expr> },
    /// Any binary operator from the precedence table except `=`,
    /// including member access (`.`, `->`, `::`).
    Binary {
        op: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Right-associative assignment
    Assign { target: Box<Expr>, value: Box<Expr> },
    Call { callee: String, args: Vec<Expr> },
    Index { object: Box<Expr>, index: Box<Expr> },
    /// `new Type` or `new Type[size]`
    New {
        class: String,
        size: Option<Box<Expr>>,
    },
}

/// The string literal an `endl` keyword is rewritten to.
pub const NEWLINE_LITERAL: &str = "\"\\n\"";

impl Expr {
    /// The `"\n"` literal produced by rewriting `endl`.
    pub fn newline() -> Expr {
        Expr::Str(NEWLINE_LITERAL.to_string())
    }

    /// True for the rewritten `endl` part of a print statement.
    pub fn is_newline_literal(&self) -> bool {
        matches!(self, Expr::Str(s) if s == NEWLINE_LITERAL)
    }
}

fn is_member_op(op: &str) -> bool {
    matches!(op, "." | "->" | "::")
}

impl fmt::Display for Expr {
    /// Fully-parenthesized source-level rendering, e.g. `(1 + (2 * 3))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(text) | Expr::Str(text) | Expr::Char(text) | Expr::Ident(text) => {
                write!(f, "{}", text)
            }
            Expr::Bool(value) => write!(f, "{}", value),
            Expr::Unary { op, operand } => write!(f, "({}{})", op, operand),
            Expr::Postfix { op, operand } => write!(f, "({}{})", operand, op),
            Expr::Binary { op, left, right } if is_member_op(op) => {
                write!(f, "({}{}{})", left, op, right)
            }
            Expr::Binary { op, left, right } => write!(f, "({} {} {})", left, op, right),
            Expr::Assign { target, value } => write!(f, "({} = {})", target, value),
            Expr::Call { callee, args } => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Index { object, index } => write!(f, "({}[{}])", object, index),
            Expr::New { class, size } => match size {
                Some(size) => write!(f, "(new {}[{}])", class, size),
                None => write!(f, "(new {})", class),
            },
        }
    }
}

/// AST nodes representing statements.
///
/// The tree is strictly owned top-down: each child belongs to exactly one
/// parent, statements are never mutated after parsing, and the whole
/// program is a flat `Vec<Stmt>` handed to the code generator.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `#include <path>` — carried through for bookkeeping only
    Include { path: String },
    /// `int x;` / `int x = 1;`
    Declaration {
        var_type: String,
        name: String,
        init: Option<Expr>,
    },
    /// Bare prototype: `int f(int a);`
    FunctionDecl {
        return_type: String,
        name: String,
        params: Vec<Param>,
    },
    /// Full definition: `int f(int a) { ... }`
    Function {
        return_type: String,
        name: String,
        params: Vec<Param>,
        body: Vec<Stmt>,
    },
    Block(Vec<Stmt>),
    /// `cin >> a >> b;` — one input token consumed per target, left to right
    Input { targets: Vec<Expr> },
    /// `cout << a << endl;`
    Print { parts: Vec<Expr> },
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While { condition: Expr, body: Box<Stmt> },
    DoWhile { body: Box<Stmt>, condition: Expr },
    /// A missing condition has already been defaulted to `true` by the parser.
    For {
        init: Option<Box<Stmt>>,
        condition: Expr,
        update: Option<Expr>,
        body: Box<Stmt>,
    },
    Return(Option<Expr>),
    Break,
    Continue,
    ExprStmt(Expr),
}
