//! JavaScript rendering of expression trees
//!
//! Mostly a 1:1 mapping: literal texts are carried through verbatim
//! (single-quoted character literals are valid JavaScript strings), and the
//! few constructs JavaScript spells differently are rewritten here:
//!
//! - `->` and `::` member access become `.`
//! - `new Type[size]` becomes `new Array(size)`, `new Type` becomes `new Type()`
//!
//! Stream-operator tokens only reach this renderer as shift operators,
//! which JavaScript shares.

use crate::parser::ast::Expr;

/// Render an expression as JavaScript source text.
pub(crate) fn js_expr(expr: &Expr) -> String {
    match expr {
        Expr::Number(text) | Expr::Str(text) | Expr::Char(text) | Expr::Ident(text) => text.clone(),
        Expr::Bool(value) => value.to_string(),
        Expr::Unary { op, operand } => format!("({}{})", op, js_expr(operand)),
        Expr::Postfix { op, operand } => format!("({}{})", js_expr(operand), op),
        Expr::Binary { op, left, right } if matches!(op.as_str(), "." | "->" | "::") => {
            format!("{}.{}", js_expr(left), js_expr(right))
        }
        Expr::Binary { op, left, right } => {
            format!("({} {} {})", js_expr(left), op, js_expr(right))
        }
        Expr::Assign { target, value } => format!("({} = {})", js_expr(target), js_expr(value)),
        Expr::Call { callee, args } => {
            let args: Vec<String> = args.iter().map(js_expr).collect();
            format!("{}({})", callee, args.join(", "))
        }
        Expr::Index { object, index } => format!("{}[{}]", js_expr(object), js_expr(index)),
        Expr::New { class, size } => match size {
            Some(size) => format!("new Array({})", js_expr(size)),
            None => format!("new {}()", class),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_ops_become_dot() {
        let expr = Expr::Binary {
            op: "->".to_string(),
            left: Box::new(Expr::Ident("p".to_string())),
            right: Box::new(Expr::Ident("x".to_string())),
        };
        assert_eq!(js_expr(&expr), "p.x");

        let expr = Expr::Binary {
            op: "::".to_string(),
            left: Box::new(Expr::Ident("a".to_string())),
            right: Box::new(Expr::Ident("b".to_string())),
        };
        assert_eq!(js_expr(&expr), "a.b");
    }

    #[test]
    fn test_new_forms() {
        let expr = Expr::New {
            class: "Thing".to_string(),
            size: Some(Box::new(Expr::Number("5".to_string()))),
        };
        assert_eq!(js_expr(&expr), "new Array(5)");

        let expr = Expr::New {
            class: "Thing".to_string(),
            size: None,
        };
        assert_eq!(js_expr(&expr), "new Thing()");
    }

    #[test]
    fn test_literals_verbatim() {
        assert_eq!(js_expr(&Expr::Str("\"hi\\n\"".to_string())), "\"hi\\n\"");
        assert_eq!(js_expr(&Expr::Char("'a'".to_string())), "'a'");
        assert_eq!(js_expr(&Expr::Number("3.14e2".to_string())), "3.14e2");
    }
}
