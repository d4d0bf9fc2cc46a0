//! Source parser for the C++ subset
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//! - [`symbols`]: Flat symbol table and shallow assignment type checks
//!
//! # Supported Subset
//!
//! - Types: `int`, `float`, `double`, `char`, `bool`, `string`, `void`,
//!   `auto`, with `const`/`static` modifiers and `*`/`&` suffixes
//! - Statements: declarations, prototypes, functions, `cin`/`cout` stream
//!   I/O, control flow (`if`, `while`, `do-while`, `for`), jumps
//! - Expressions: arithmetic, logical, bitwise, shift, member access,
//!   calls, indexing, `new`
//! - `class`/`struct` are tokenized but not parsed; `#include` directives
//!   are carried through as bookkeeping only
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent for statements with precedence climbing
//! for expressions. No external parser generator dependencies.

pub mod ast;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod symbols;
