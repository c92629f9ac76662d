//! 运算符优先级与结合性测试

use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::{ast::*, parse_expression, ParseError};

fn expr(source: &str) -> Node {
    parse_expression(&tokenize(source).unwrap()).unwrap()
}

fn int(n: i64) -> Node {
    Node::IntegerLiteral(n)
}

#[test]
fn test_mul_binds_tighter_than_add() {
    assert_eq!(
        expr("2 + 3 * 4"),
        Node::binary(int(2), BinOp::Add, Node::binary(int(3), BinOp::Mul, int(4)))
    );
    assert_eq!(
        expr("2 * 3 + 4"),
        Node::binary(Node::binary(int(2), BinOp::Mul, int(3)), BinOp::Add, int(4))
    );
}

#[test]
fn test_equal_precedence_is_left_associative() {
    assert_eq!(
        expr("10 - 4 - 3"),
        Node::binary(Node::binary(int(10), BinOp::Sub, int(4)), BinOp::Sub, int(3))
    );
    assert_eq!(
        expr("8 / 4 / 2"),
        Node::binary(Node::binary(int(8), BinOp::Div, int(4)), BinOp::Div, int(2))
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        expr("(2 + 3) * 4"),
        Node::binary(Node::binary(int(2), BinOp::Add, int(3)), BinOp::Mul, int(4))
    );
    assert_eq!(
        expr("10 - (4 - 3)"),
        Node::binary(int(10), BinOp::Sub, Node::binary(int(4), BinOp::Sub, int(3)))
    );
}

#[test]
fn test_mixed_chain() {
    // a + b * c - d  =>  (a + (b * c)) - d
    assert_eq!(
        expr("a + b * c - d"),
        Node::binary(
            Node::binary(
                Node::field("a"),
                BinOp::Add,
                Node::binary(Node::field("b"), BinOp::Mul, Node::field("c"))
            ),
            BinOp::Sub,
            Node::field("d")
        )
    );
}

#[test]
fn test_call_arguments_are_expressions() {
    assert_eq!(
        expr("f(1 + 2) * 3"),
        Node::binary(
            Node::Call {
                identifier: "f".to_string(),
                args: vec![Node::binary(int(1), BinOp::Add, int(2))],
            },
            BinOp::Mul,
            int(3)
        )
    );
}

#[test]
fn test_trailing_tokens_rejected() {
    let tokens = tokenize("1 2").unwrap();
    assert_eq!(parse_expression(&tokens), Err(ParseError::ExpectedOperator));
}
