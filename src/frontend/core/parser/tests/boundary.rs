//! 边界情况测试

use super::{parse_single, parse_source};
use crate::frontend::core::parser::ast::*;

#[test]
fn test_deeply_nested_parentheses() {
    let source = format!("{}1{};", "(".repeat(64), ")".repeat(64));
    assert_eq!(parse_single(&source), Node::IntegerLiteral(1));
}

#[test]
fn test_long_operator_chain_is_left_leaning() {
    let source = (0..50).map(|i| i.to_string()).collect::<Vec<_>>().join(" + ");
    let mut node = parse_single(&format!("{};", source));

    let mut depth = 0;
    while let Node::BinaryOperation { lhs, rhs, .. } = node {
        assert!(!matches!(*rhs, Node::BinaryOperation { .. }));
        node = *lhs;
        depth += 1;
    }
    assert_eq!(depth, 49);
    assert_eq!(node, Node::IntegerLiteral(0));
}

#[test]
fn test_keywords_as_type_names_only() {
    // `Int` is a keyword, so it is never an expression
    assert!(parse_source("Int;").is_err());
}

#[test]
fn test_stray_semicolon_is_not_a_statement() {
    assert!(parse_source(";").is_err());
}

#[test]
fn test_negative_literal_not_supported() {
    // no unary minus: `-1` has no primary before the operator
    assert!(parse_source("let x: Int = -1;").is_err());
}

#[test]
fn test_top_level_mix() {
    let source = r#"
        enum Shape { case circle(r: Float); }
        func area(r: Float) -> Float { return r * r * 3.14; }
        let s: Shape = .circle(2.0);
        if let s: Shape = .circle(r: Float) { print(area(r)); }
    "#;
    let program = parse_source(source).unwrap();
    let kinds: Vec<&str> = program.iter().map(Node::kind_name).collect();
    assert_eq!(kinds, vec!["enum", "function", "assignment", "if let"]);
}
