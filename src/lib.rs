//! # Introduction
//!
//! cpp2js compiles a restricted C++-like subset (`cin`/`cout` stream I/O,
//! C-style control flow, `#include` directives) into a self-contained
//! JavaScript program fragment, ready to be handed to an external
//! execution sandbox together with a whitespace-tokenized input list.
//!
//! ## Compilation pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → Code Generator → JavaScript
//! ```
//!
//! 1. [`parser`] — tokenises the source with an ordered first-match rule
//!    table and builds an AST with recursive descent plus precedence
//!    climbing for expressions. A flat symbol table performs shallow
//!    literal-type checks at assignment sites, then is discarded.
//! 2. [`codegen`] — walks the AST and emits the target program: a hoist
//!    pass for prototypes and includes, an input-provider/output-
//!    accumulator prologue, a structural body translation, and an
//!    epilogue that invokes `main` and returns the output string.
//! 3. [`runner`] — the fixed contracts at the execution boundary: input
//!    tokenization and the [`runner::Sandbox`] trait the host implements.
//!
//! The pipeline is synchronous and stateless across invocations: each
//! [`compile`] call lexes, parses, and generates from scratch.
//!
//! ## Supported subset
//!
//! Types: `int`, `float`, `double`, `char`, `bool`, `string`, `void`,
//! `auto`. Control flow: `if/else`, `while`, `do-while`, `for`, `break`,
//! `continue`, `return`. I/O: `cin >>`, `cout <<`, `endl`.
//! `class`/`struct` and pointer semantics are recognized lexically only.

pub mod codegen;
pub mod parser;
pub mod runner;

use parser::parse::{ParseError, Parser};

/// Compile source text into a JavaScript program fragment.
///
/// The fragment is a function expression taking the program-input token
/// list and returning the program's output string. All compile-stage
/// failures (lexical, syntax, shallow type mismatches) abort the attempt.
pub fn compile(source: &str) -> Result<String, ParseError> {
    let mut parser = Parser::new(source)?;
    let program = parser.parse_program()?;
    Ok(codegen::generate(&program, true))
}
