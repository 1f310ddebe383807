//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs
//! including:
//! - Operator precedence and associativity
//! - Assignment chains
//! - Call expressions and argument lists
//! - Conditionals, closures, function definitions and extern declarations
//! - Program blocks and the top-level driver
//! - Error cases

use std::rc::Rc;

use crate::ast::ast::{Ast, Expr, ExprType, ExprWrapper};
use crate::ast::expressions::{
    AssignmentExpr, BinaryExpr, BooleanExpr, CallExpr, CharacterExpr, ClosureExpr, FunctionExpr,
    IfExpr, NumberExpr, ProgramExpr, StringExpr, SymbolExpr,
};
use crate::errors::errors::Error;
use crate::lexer::lexer::tokenize;

use super::parser::parse;

fn parse_source(source: &str) -> Result<Ast, Error> {
    let tokens = tokenize(source.to_string(), Some("test.tern".to_string())).unwrap();
    parse(tokens, Rc::new("test.tern".to_string()))
}

fn parse_one(source: &str) -> ExprWrapper {
    let ast = parse_source(source).unwrap();
    assert_eq!(ast.body.len(), 1);
    ast.body.into_iter().next().unwrap()
}

fn number_value(expr: &ExprWrapper) -> i64 {
    expr.as_any().downcast_ref::<NumberExpr>().unwrap().value
}

fn symbol_value(expr: &ExprWrapper) -> &str {
    &expr.as_any().downcast_ref::<SymbolExpr>().unwrap().value
}

#[test]
fn test_parse_number_literal() {
    let expr = parse_one("42;");
    assert_eq!(number_value(&expr), 42);
}

#[test]
fn test_parse_boolean_literals() {
    let expr = parse_one("true;");
    assert!(expr.as_any().downcast_ref::<BooleanExpr>().unwrap().value);

    let expr = parse_one("false;");
    assert!(!expr.as_any().downcast_ref::<BooleanExpr>().unwrap().value);
}

#[test]
fn test_parse_character_literal() {
    let expr = parse_one("'a';");
    let character = expr.as_any().downcast_ref::<CharacterExpr>().unwrap();
    assert_eq!(character.value, 'a' as u32);
}

#[test]
fn test_parse_string_literal() {
    let expr = parse_one(r#""hello";"#);
    let string = expr.as_any().downcast_ref::<StringExpr>().unwrap();
    assert_eq!(string.value, "hello");
}

#[test]
fn test_parse_identifier() {
    let expr = parse_one("foo;");
    assert_eq!(symbol_value(&expr), "foo");
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    // 1 + 2 * 3 => 1 + (2 * 3)
    let expr = parse_one("1 + 2 * 3;");
    let add = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(add.operator.value, "+");
    assert_eq!(number_value(&add.left), 1);

    let mul = add.right.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(mul.operator.value, "*");
    assert_eq!(number_value(&mul.left), 2);
    assert_eq!(number_value(&mul.right), 3);
}

#[test]
fn test_equal_precedence_associates_left() {
    // 1 - 2 - 3 => (1 - 2) - 3
    let expr = parse_one("1 - 2 - 3;");
    let outer = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(outer.operator.value, "-");
    assert_eq!(number_value(&outer.right), 3);

    let inner = outer.left.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(inner.operator.value, "-");
    assert_eq!(number_value(&inner.left), 1);
    assert_eq!(number_value(&inner.right), 2);
}

#[test]
fn test_comparison_precedence() {
    // a + 1 < b * 2 => (a + 1) < (b * 2)
    let expr = parse_one("a + 1 < b * 2;");
    let cmp = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(cmp.operator.value, "<");
    assert_eq!(cmp.left.get_expr_type(), ExprType::Binary);
    assert_eq!(cmp.right.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_logical_operator_precedence() {
    // a || b && c => a || (b && c)
    let expr = parse_one("a || b && c;");
    let or = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(or.operator.value, "||");
    assert_eq!(symbol_value(&or.left), "a");

    let and = or.right.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(and.operator.value, "&&");
}

#[test]
fn test_assignment_chains_right() {
    // a = b = 1 => a = (b = 1)
    let expr = parse_one("a = b = 1;");
    let outer = expr.as_any().downcast_ref::<AssignmentExpr>().unwrap();
    assert_eq!(outer.operator.value, "=");
    assert_eq!(symbol_value(&outer.assignee), "a");

    let inner = outer.value.as_any().downcast_ref::<AssignmentExpr>().unwrap();
    assert_eq!(symbol_value(&inner.assignee), "b");
    assert_eq!(number_value(&inner.value), 1);
}

#[test]
fn test_assignment_has_lowest_precedence() {
    // a = 1 + 2 => a = (1 + 2)
    let expr = parse_one("a = 1 + 2;");
    let assign = expr.as_any().downcast_ref::<AssignmentExpr>().unwrap();
    assert_eq!(symbol_value(&assign.assignee), "a");
    assert_eq!(assign.value.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_grouping_has_no_node() {
    // (1 + 2) * 3 => the grouped sum is the bare left operand
    let expr = parse_one("(1 + 2) * 3;");
    let mul = expr.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(mul.operator.value, "*");
    assert_eq!(mul.left.get_expr_type(), ExprType::Binary);
    assert_eq!(number_value(&mul.right), 3);
}

#[test]
fn test_parse_call_with_arguments() {
    let expr = parse_one("f(1, 2);");
    let call = expr.as_any().downcast_ref::<CallExpr>().unwrap();
    assert_eq!(symbol_value(&call.callee), "f");
    assert_eq!(call.arguments.len(), 2);
    assert_eq!(number_value(&call.arguments[0]), 1);
    assert_eq!(number_value(&call.arguments[1]), 2);
}

#[test]
fn test_parse_call_without_arguments() {
    let expr = parse_one("f();");
    let call = expr.as_any().downcast_ref::<CallExpr>().unwrap();
    assert_eq!(symbol_value(&call.callee), "f");
    assert!(call.arguments.is_empty());
}

#[test]
fn test_parse_call_trailing_comma() {
    let expr = parse_one("f(1, 2,);");
    let call = expr.as_any().downcast_ref::<CallExpr>().unwrap();
    assert_eq!(call.arguments.len(), 2);
}

#[test]
fn test_parse_call_of_call_result() {
    // One wrap happens at the atom, a second around the whole expression.
    let expr = parse_one("f()();");
    let outer = expr.as_any().downcast_ref::<CallExpr>().unwrap();
    assert!(outer.arguments.is_empty());

    let inner = outer.callee.as_any().downcast_ref::<CallExpr>().unwrap();
    assert_eq!(symbol_value(&inner.callee), "f");
}

#[test]
fn test_parse_call_of_grouped_expression() {
    let expr = parse_one("(a + b)(1);");
    let call = expr.as_any().downcast_ref::<CallExpr>().unwrap();
    assert_eq!(call.callee.get_expr_type(), ExprType::Binary);
    assert_eq!(call.arguments.len(), 1);
}

#[test]
fn test_call_argument_with_operators() {
    let expr = parse_one("f(1 + 2 * 3, g());");
    let call = expr.as_any().downcast_ref::<CallExpr>().unwrap();
    assert_eq!(call.arguments.len(), 2);
    assert_eq!(call.arguments[0].get_expr_type(), ExprType::Binary);
    assert_eq!(call.arguments[1].get_expr_type(), ExprType::Call);
}

#[test]
fn test_parse_if_with_else() {
    let expr = parse_one("if true 1 else 2;");
    let if_expr = expr.as_any().downcast_ref::<IfExpr>().unwrap();
    assert!(if_expr
        .condition
        .as_any()
        .downcast_ref::<BooleanExpr>()
        .unwrap()
        .value);
    assert_eq!(number_value(&if_expr.then_branch), 1);
    assert_eq!(number_value(if_expr.else_branch.as_ref().unwrap()), 2);
}

#[test]
fn test_parse_if_without_else() {
    let expr = parse_one("if true 1;");
    let if_expr = expr.as_any().downcast_ref::<IfExpr>().unwrap();
    assert_eq!(number_value(&if_expr.then_branch), 1);
    assert!(if_expr.else_branch.is_none());
}

#[test]
fn test_parse_program_block() {
    let expr = parse_one("{1; 2; 3};");
    let program = expr.as_any().downcast_ref::<ProgramExpr>().unwrap();
    let block = program.body.as_ref().unwrap();
    assert_eq!(block.body.len(), 3);
    assert_eq!(number_value(&block.body[0]), 1);
    assert_eq!(number_value(&block.body[1]), 2);
    assert_eq!(number_value(&block.body[2]), 3);
}

#[test]
fn test_parse_empty_braces_yield_absent_block() {
    let expr = parse_one("{};");
    let program = expr.as_any().downcast_ref::<ProgramExpr>().unwrap();
    assert!(program.body.is_none());
}

#[test]
fn test_parse_block_trailing_semicolon() {
    let expr = parse_one("{1; 2;};");
    let program = expr.as_any().downcast_ref::<ProgramExpr>().unwrap();
    assert_eq!(program.body.as_ref().unwrap().body.len(), 2);
}

#[test]
fn test_parse_closure() {
    let expr = parse_one("cls(x) {x};");
    let closure = expr.as_any().downcast_ref::<ClosureExpr>().unwrap();
    assert_eq!(closure.parameters, vec!["x".to_string()]);

    let program = closure.body.as_any().downcast_ref::<ProgramExpr>().unwrap();
    let block = program.body.as_ref().unwrap();
    assert_eq!(block.body.len(), 1);
    assert_eq!(symbol_value(&block.body[0]), "x");
}

#[test]
fn test_parse_closure_multiple_parameters() {
    let expr = parse_one("cls(a, b, c) {a + b + c};");
    let closure = expr.as_any().downcast_ref::<ClosureExpr>().unwrap();
    assert_eq!(closure.parameters.len(), 3);
}

#[test]
fn test_closure_parameter_must_be_identifier() {
    let result = parse_source("cls(1) {1};");
    assert_eq!(result.err().unwrap().get_error_name(), "InvalidName");
}

#[test]
fn test_parse_extern_declaration() {
    let expr = parse_one("ext f(int x);");
    let function = expr.as_any().downcast_ref::<FunctionExpr>().unwrap();
    assert_eq!(function.name, "f");
    assert!(function.body.is_none());
    assert_eq!(function.parameters.len(), 1);
    assert_eq!(function.parameters[0].type_name, "int");
    assert_eq!(function.parameters[0].name, Some("x".to_string()));
}

#[test]
fn test_parse_extern_parameter_without_name() {
    let expr = parse_one("ext puts(str);");
    let function = expr.as_any().downcast_ref::<FunctionExpr>().unwrap();
    assert_eq!(function.parameters[0].type_name, "str");
    assert!(function.parameters[0].name.is_none());
}

#[test]
fn test_extern_name_must_be_identifier() {
    let result = parse_source("ext 5(int);");
    assert_eq!(result.err().unwrap().get_error_name(), "InvalidName");
}

#[test]
fn test_parse_function_definition() {
    let expr = parse_one("def add(int a, int b) a + b;");
    let function = expr.as_any().downcast_ref::<FunctionExpr>().unwrap();
    assert_eq!(function.name, "add");
    assert_eq!(function.parameters.len(), 2);
    assert_eq!(
        function.body.as_ref().unwrap().get_expr_type(),
        ExprType::Binary
    );
}

#[test]
fn test_parse_function_without_parameter_list() {
    let expr = parse_one("def answer 42;");
    let function = expr.as_any().downcast_ref::<FunctionExpr>().unwrap();
    assert_eq!(function.name, "answer");
    assert!(function.parameters.is_empty());
    assert_eq!(number_value(function.body.as_ref().unwrap()), 42);
}

#[test]
fn test_parse_function_with_block_body() {
    let expr = parse_one("def f(int a) {a; a + 1};");
    let function = expr.as_any().downcast_ref::<FunctionExpr>().unwrap();
    assert_eq!(
        function.body.as_ref().unwrap().get_expr_type(),
        ExprType::Program
    );
}

#[test]
fn test_function_name_is_not_validated() {
    // Unlike `ext`, `def` takes the name token as-is.
    let expr = parse_one("def 5 1;");
    let function = expr.as_any().downcast_ref::<FunctionExpr>().unwrap();
    assert_eq!(function.name, "5");
}

#[test]
fn test_top_level_trailing_semicolon_optional() {
    let ast = parse_source("1; 2; 3").unwrap();
    assert_eq!(ast.body.len(), 3);

    let ast = parse_source("1; 2; 3;").unwrap();
    assert_eq!(ast.body.len(), 3);
}

#[test]
fn test_top_level_missing_semicolon() {
    let result = parse_source("1 2");
    assert_eq!(result.err().unwrap().get_error_name(), "MissingPunctuation");
}

#[test]
fn test_parse_empty_source() {
    let ast = parse_source("").unwrap();
    assert!(ast.body.is_empty());
}

#[test]
fn test_unexpected_token_error() {
    let result = parse_source("else;");
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedToken");
}

#[test]
fn test_unterminated_argument_list() {
    let result = parse_source("f(1, 2");
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnexpectedEndOfInput"
    );
}

#[test]
fn test_unterminated_parameter_list() {
    let result = parse_source("ext f(int x");
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnexpectedEndOfInput"
    );
}

#[test]
fn test_unterminated_block() {
    let result = parse_source("{1; 2");
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "UnexpectedEndOfInput"
    );
}

#[test]
fn test_missing_close_paren_after_grouping() {
    let result = parse_source("(1 + 2;");
    assert_eq!(result.err().unwrap().get_error_name(), "MissingPunctuation");
}

#[test]
fn test_function_keyword_at_end_of_input() {
    // The name and body productions run out of tokens; that must surface
    // as an error, not a panic past the EOF terminator.
    let result = parse_source("def");
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedToken");
}

#[test]
fn test_function_keyword_at_end_of_argument_list() {
    let result = parse_source("f(def");
    assert_eq!(result.err().unwrap().get_error_name(), "UnexpectedToken");
}

#[test]
fn test_extern_keyword_at_end_of_input() {
    let result = parse_source("ext");
    assert_eq!(result.err().unwrap().get_error_name(), "InvalidName");
}

#[test]
fn test_numeric_literal_overflow() {
    let result = parse_source("99999999999999999999999999;");
    assert_eq!(
        result.err().unwrap().get_error_name(),
        "InvalidNumericLiteral"
    );
}

#[test]
fn test_cloned_tree_matches() {
    let expr = parse_one("f(1 + 2, cls(x) {x});");
    let cloned = expr.clone();
    assert_eq!(cloned.get_expr_type(), ExprType::Call);

    let call = cloned.as_any().downcast_ref::<CallExpr>().unwrap();
    assert_eq!(call.arguments.len(), 2);
}
