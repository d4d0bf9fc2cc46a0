//! JavaScript code generation
//!
//! Walks the AST produced by the parser and emits the target program as a
//! single JavaScript function expression:
//!
//! ```text
//! (function (__input) {
//!   // include bookkeeping and prototype stubs   (hoist pass)
//!   var __tokens = (__input || []).slice();      (prologue)
//!   function __read() { ... }
//!   var __out = "";
//!   ...translated statements...                  (body pass)
//!   main();                                      (epilogue)
//!   return __out;
//! })
//! ```
//!
//! The generator assumes a well-formed AST and has no failure modes of its
//! own. Its sole external parameter is the ordered program-input token
//! list; its sole result is the concatenated output string. Runtime faults
//! (input exhaustion, calling a bare prototype) are thrown inside the
//! generated program and belong to the execution sandbox.

mod expressions;

use crate::parser::ast::{Param, Stmt};
use expressions::js_expr;
use rustc_hash::FxHashSet;

/// Generate JavaScript for a statement sequence.
///
/// With `top_level` set, the full program shell is emitted: hoist pass,
/// input/output prologue, the implicit-`main` decision, and the epilogue
/// that invokes `main` and returns the accumulated output. Without it,
/// only the translated statements themselves are produced.
pub fn generate(statements: &[Stmt], top_level: bool) -> String {
    let mut gen = CodeGen::new();

    if top_level {
        gen.emit_program(statements);
    } else {
        for statement in statements {
            gen.emit_statement(statement);
        }
    }

    gen.finish()
}

struct CodeGen {
    lines: Vec<String>,
    indent: usize,
}

impl CodeGen {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            indent: 0,
        }
    }

    fn push(&mut self, line: impl AsRef<str>) {
        let mut text = "  ".repeat(self.indent);
        text.push_str(line.as_ref());
        self.lines.push(text);
    }

    fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// Emit the whole top-level program shell.
    fn emit_program(&mut self, statements: &[Stmt]) {
        self.push("(function (__input) {");
        self.indent += 1;

        // Hoist pass: include bookkeeping, then a throwing stub for every
        // bare prototype that never receives a full definition.
        let defined: FxHashSet<&str> = statements
            .iter()
            .filter_map(|s| match s {
                Stmt::Function { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();

        for statement in statements {
            match statement {
                Stmt::Include { path } => self.push(format!("// #include <{}>", path)),
                Stmt::FunctionDecl { name, params, .. } if !defined.contains(name.as_str()) => {
                    self.emit_prototype_stub(name, params);
                }
                _ => {}
            }
        }

        // Prologue: input provider and output accumulator.
        self.push("var __tokens = (__input || []).slice();");
        self.push("function __read() {");
        self.indent += 1;
        self.push("if (__tokens.length === 0) { throw new Error(\"input exhausted\"); }");
        self.push("return __tokens.shift();");
        self.indent -= 1;
        self.push("}");
        self.push("var __out = \"\";");

        // No user-defined main: wrap the remaining top-level statements in one.
        let has_main = defined.contains("main");
        if !has_main {
            self.push("function main() {");
            self.indent += 1;
        }

        // Body pass.
        for statement in statements {
            match statement {
                Stmt::Include { .. } | Stmt::FunctionDecl { .. } => {}
                _ => self.emit_statement(statement),
            }
        }

        if !has_main {
            self.indent -= 1;
            self.push("}");
        }

        // Epilogue.
        self.push("main();");
        self.push("return __out;");
        self.indent -= 1;
        self.push("})");
    }

    fn emit_prototype_stub(&mut self, name: &str, params: &[Param]) {
        self.push(format!("function {}({}) {{", name, param_names(params)));
        self.indent += 1;
        self.push(format!(
            "throw new Error(\"unimplemented function '{}'\");",
            name
        ));
        self.indent -= 1;
        self.push("}");
    }

    fn emit_statement(&mut self, statement: &Stmt) {
        match statement {
            Stmt::Include { path } => self.push(format!("// #include <{}>", path)),

            Stmt::Declaration { name, init, .. } => match init {
                Some(init) => self.push(format!("let {} = {};", name, js_expr(init))),
                None => self.push(format!("let {};", name)),
            },

            // A nested prototype gets its stub inline; the top-level hoist
            // pass has already handled top-level ones.
            Stmt::FunctionDecl { name, params, .. } => self.emit_prototype_stub(name, params),

            Stmt::Function {
                name, params, body, ..
            } => {
                self.push(format!("function {}({}) {{", name, param_names(params)));
                self.indent += 1;
                for statement in body {
                    self.emit_statement(statement);
                }
                self.indent -= 1;
                self.push("}");
            }

            Stmt::Block(statements) => {
                self.push("{");
                self.indent += 1;
                for statement in statements {
                    self.emit_statement(statement);
                }
                self.indent -= 1;
                self.push("}");
            }

            // One numeric input token per target, strictly left to right.
            Stmt::Input { targets } => {
                for target in targets {
                    self.push(format!("{} = Number(__read());", js_expr(target)));
                }
            }

            Stmt::Print { parts } => self.emit_print(parts),

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.push(format!("if ({}) {{", js_expr(condition)));
                self.indent += 1;
                self.emit_body(then_branch);
                self.indent -= 1;
                if let Some(else_branch) = else_branch {
                    self.push("} else {");
                    self.indent += 1;
                    self.emit_body(else_branch);
                    self.indent -= 1;
                }
                self.push("}");
            }

            Stmt::While { condition, body } => {
                self.push(format!("while ({}) {{", js_expr(condition)));
                self.indent += 1;
                self.emit_body(body);
                self.indent -= 1;
                self.push("}");
            }

            Stmt::DoWhile { body, condition } => {
                self.push("do {");
                self.indent += 1;
                self.emit_body(body);
                self.indent -= 1;
                self.push(format!("}} while ({});", js_expr(condition)));
            }

            // Desugared: initializer, while loop, trailing update, wrapped
            // in a scope so the initializer's bindings don't leak.
            Stmt::For {
                init,
                condition,
                update,
                body,
            } => {
                self.push("{");
                self.indent += 1;
                if let Some(init) = init {
                    self.emit_statement(init);
                }
                self.push(format!("while ({}) {{", js_expr(condition)));
                self.indent += 1;
                self.emit_body(body);
                if let Some(update) = update {
                    self.push(format!("{};", js_expr(update)));
                }
                self.indent -= 1;
                self.push("}");
                self.indent -= 1;
                self.push("}");
            }

            Stmt::Return(value) => match value {
                Some(value) => self.push(format!("return {};", js_expr(value))),
                None => self.push("return;"),
            },

            Stmt::Break => self.push("break;"),
            Stmt::Continue => self.push("continue;"),

            Stmt::ExprStmt(expr) => self.push(format!("{};", js_expr(expr))),
        }
    }

    /// Emit the statements of a control-flow body without an extra brace
    /// level (the caller already opened one).
    fn emit_body(&mut self, body: &Stmt) {
        match body {
            Stmt::Block(statements) => {
                for statement in statements {
                    self.emit_statement(statement);
                }
            }
            single => self.emit_statement(single),
        }
    }

    /// Append a print statement's parts to the output accumulator.
    ///
    /// Parts are space-joined, except that a newline part (from `endl`)
    /// attaches without surrounding spaces: `cout << a << endl;` yields
    /// `"7\n"`, not `"7 \n"`.
    fn emit_print(&mut self, parts: &[crate::parser::ast::Expr]) {
        if parts.is_empty() {
            return;
        }

        let mut rendered = String::new();
        for (i, part) in parts.iter().enumerate() {
            if i > 0 {
                if !part.is_newline_literal() && !parts[i - 1].is_newline_literal() {
                    rendered.push_str(" + \" \"");
                }
                rendered.push_str(" + ");
            }
            rendered.push_str(&format!("String({})", js_expr(part)));
        }

        self.push(format!("__out += {};", rendered));
    }
}

fn param_names(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
