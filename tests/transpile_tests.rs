// End-to-end checks of the generated JavaScript text: expression
// structure, stream statements, literal handling, and the shallow typing
// errors surfaced through compile().

use cpp2js::compile;
use cpp2js::parser::parse::ParseError;
use cpp2js::parser::symbols::TypeError;
use std::error::Error;

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let code = compile("int main() { int x = 1 + 2 * 3; return x; }").expect("Compilation failed");
    assert!(code.contains("let x = (1 + (2 * 3));"));
}

#[test]
fn test_parenthesized_grouping_preserved() {
    let code = compile("int main() { int x = (1 + 2) * 3; return x; }").expect("Compilation failed");
    assert!(code.contains("let x = ((1 + 2) * 3);"));
}

#[test]
fn test_assignment_is_right_associative() {
    let code = compile("int main() { int a; int b; a = b = 1; return a; }")
        .expect("Compilation failed");
    assert!(code.contains("(a = (b = 1));"));
}

#[test]
fn test_comparison_and_logic_chain() {
    let code = compile("int main() { int a = 1; bool ok = a > 0 && a < 10; return 0; }")
        .expect("Compilation failed");
    assert!(code.contains("let ok = ((a > 0) && (a < 10));"));
}

#[test]
fn test_shift_in_expression_context() {
    // Inside an initializer the stream token is an ordinary shift operator.
    let code = compile("int main() { int a = 1; int x = a << 2; return x; }")
        .expect("Compilation failed");
    assert!(code.contains("let x = (a << 2);"));
}

#[test]
fn test_prefix_and_postfix_increment() {
    let code = compile("int main() { int i = 0; ++i; i++; return i; }").expect("Compilation failed");
    assert!(code.contains("(++i);"));
    assert!(code.contains("(i++);"));
}

#[test]
fn test_member_access_rewritten_to_dot() {
    let code = compile("int main() { int a; obj->field = 1; a = 0; return a; }");
    let code = code.expect("Compilation failed");
    assert!(code.contains("(obj.field = 1);"));
}

#[test]
fn test_scope_resolution_rewritten_to_dot() {
    let code =
        compile("int main() { int x = ns::value; return x; }").expect("Compilation failed");
    assert!(code.contains("let x = ns.value;"));
}

#[test]
fn test_new_array_and_new_object() {
    let source = r#"
        int main() {
            auto arr = new Thing[5];
            auto one = new Thing;
            return 0;
        }
    "#;

    let code = compile(source).expect("Compilation failed");
    assert!(code.contains("let arr = new Array(5);"));
    assert!(code.contains("let one = new Thing();"));
}

#[test]
fn test_string_and_char_literals_verbatim() {
    let source = r#"
        int main() {
            string s = "hi there";
            char c = 'x';
            cout << s << c;
            return 0;
        }
    "#;

    let code = compile(source).expect("Compilation failed");
    assert!(code.contains("let s = \"hi there\";"));
    assert!(code.contains("let c = 'x';"));
    assert!(code.contains("__out += String(s) + \" \" + String(c);"));
}

#[test]
fn test_print_literal_then_endl() {
    let code = compile("int main() { cout << 7 << endl; return 0; }").expect("Compilation failed");
    assert!(code.contains("__out += String(7) + String(\"\\n\");"));
}

#[test]
fn test_bare_endl_statement() {
    let code = compile("int main() { cout << endl; return 0; }").expect("Compilation failed");
    assert!(code.contains("__out += String(\"\\n\");"));
}

#[test]
fn test_endl_between_parts_attaches_without_spaces() {
    let code = compile("int main() { int a = 1; int b = 2; cout << a << endl << b; return 0; }")
        .expect("Compilation failed");
    assert!(code.contains("__out += String(a) + String(\"\\n\") + String(b);"));
}

#[test]
fn test_comments_are_skipped() {
    let source = r#"
        // leading comment
        int main() {
            /* block
               comment */
            return 0; // trailing
        }
    "#;

    assert!(compile(source).is_ok());
}

// ===== Typing errors =====

fn type_mismatch_cause(err: &ParseError) -> &TypeError {
    match err {
        ParseError::InvalidStatement { cause, .. } => match cause.as_ref() {
            ParseError::TypeMismatch(type_err) => type_err,
            other => panic!("Expected TypeMismatch cause, got {:?}", other),
        },
        other => panic!("Expected InvalidStatement, got {:?}", other),
    }
}

#[test]
fn test_string_literal_to_int_rejected() {
    let err = compile("int main() { int x; x = \"hi\"; return 0; }").unwrap_err();
    assert!(matches!(
        type_mismatch_cause(&err),
        TypeError::StringToNumeric { name, .. } if name == "x"
    ));
}

#[test]
fn test_decimal_literal_to_int_rejected() {
    let err = compile("int main() { int x; x = 3.14; return 0; }").unwrap_err();
    assert!(matches!(
        type_mismatch_cause(&err),
        TypeError::DecimalToInt { name } if name == "x"
    ));
}

#[test]
fn test_numeric_literal_to_string_rejected() {
    let err = compile("int main() { string s; s = 5; return 0; }").unwrap_err();
    assert!(matches!(
        type_mismatch_cause(&err),
        TypeError::NumericToString { name } if name == "s"
    ));
}

#[test]
fn test_assignment_to_undeclared_rejected() {
    let err = compile("int main() { y = 1; return 0; }").unwrap_err();
    assert!(matches!(
        type_mismatch_cause(&err),
        TypeError::UndeclaredAssignment { name } if name == "y"
    ));
}

#[test]
fn test_declaration_initializer_not_type_checked() {
    // Only assignment statements are checked, never initializers.
    assert!(compile("int main() { int x = \"hi\"; return 0; }").is_ok());
}

#[test]
fn test_invalid_statement_keeps_cause_chain() {
    let err = compile("int main() { int x; x = 3.14; return 0; }").unwrap_err();

    assert!(err.to_string().starts_with("Invalid statement starting with"));
    let cause = err.source().expect("cause should be preserved");
    assert!(cause.to_string().contains("decimal literal"));
}

#[test]
fn test_lex_error_reports_offset() {
    let err = compile("int x = @1;").unwrap_err();

    match err {
        ParseError::Lex(lex_err) => {
            let message = lex_err.to_string();
            assert!(message.contains('@'), "message should name the character");
        }
        other => panic!("Expected Lex error, got {:?}", other),
    }
}
