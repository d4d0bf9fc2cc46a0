//! Execution-boundary contract
//!
//! The pipeline stops at generated JavaScript text; actually running it is
//! the host's job. This module fixes the two contracts that cross that
//! boundary: how the raw program-input blob becomes the ordered token list
//! the generated program consumes, and what an execution attempt reports
//! back.

use crate::parser::parse::ParseError;
use std::fmt;

/// Split the raw program-input blob on runs of whitespace into the ordered
/// token list. Input statements consume these one at a time, left to
/// right, in source order.
pub fn split_input(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_owned).collect()
}

/// The result of executing a generated program.
///
/// Execution faults (input exhaustion, invoking a bare prototype, any
/// other host-runtime fault) arrive as a runtime-error string, distinct
/// from pipeline errors: by then code generation has already succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The program's concatenated output string
    Output(String),
    /// A runtime fault raised while executing the generated code
    RuntimeError(String),
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Output(output) => write!(f, "{}", output),
            RunOutcome::RuntimeError(message) => write!(f, "Runtime error: {}", message),
        }
    }
}

/// An execution sandbox for generated JavaScript.
///
/// Implemented by the host (for example around an embedded JS engine):
/// it receives the generated function-expression text and the input token
/// list, and reports either the program's output or a runtime-error string.
pub trait Sandbox {
    fn execute(&self, code: &str, input: &[String]) -> RunOutcome;
}

/// Compile `source` and hand the generated program to `sandbox` together
/// with the tokenized program input.
pub fn compile_and_run<S: Sandbox>(
    source: &str,
    raw_input: &str,
    sandbox: &S,
) -> Result<RunOutcome, ParseError> {
    let code = crate::compile(source)?;
    Ok(sandbox.execute(&code, &split_input(raw_input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_input_on_whitespace_runs() {
        assert_eq!(split_input("7"), vec!["7"]);
        assert_eq!(split_input("  1 \t 2\n\n3  "), vec!["1", "2", "3"]);
        assert!(split_input("   ").is_empty());
        assert!(split_input("").is_empty());
    }

    struct EchoSandbox;

    impl Sandbox for EchoSandbox {
        fn execute(&self, _code: &str, input: &[String]) -> RunOutcome {
            RunOutcome::Output(input.join(","))
        }
    }

    #[test]
    fn test_compile_and_run_passes_tokens() {
        let outcome = compile_and_run("int x;", "1 2 3", &EchoSandbox).unwrap();
        assert_eq!(outcome, RunOutcome::Output("1,2,3".to_string()));
    }

    #[test]
    fn test_compile_and_run_surfaces_pipeline_errors() {
        assert!(compile_and_run("class C;", "", &EchoSandbox).is_err());
    }
}
