//! 函数定义测试

use super::{parse_single, parse_source};
use crate::frontend::core::parser::ast::*;

#[test]
fn test_add_function() {
    let node = parse_single("func add(a: Int, b: Int) -> Int { return a + b; }");

    let Node::Function(func) = node else {
        panic!("Expected function");
    };
    assert_eq!(func.prototype.name, "add");
    assert_eq!(
        func.prototype.formals,
        vec![Variable::immutable(Type::INT, "a"), Variable::immutable(Type::INT, "b")]
    );
    assert_eq!(func.prototype.return_type, Type::INT);
    assert_eq!(
        func.body,
        vec![Node::Return(Box::new(Node::binary(
            Node::field("a"),
            BinOp::Add,
            Node::field("b")
        )))]
    );
}

#[test]
fn test_function_without_formals() {
    let Node::Function(func) = parse_single("func main() -> Void { }") else {
        panic!("Expected function");
    };
    assert!(func.prototype.formals.is_empty());
    assert_eq!(func.prototype.return_type, Type::VOID);
    assert!(func.body.is_empty());
}

#[test]
fn test_function_body_statements() {
    let source = r#"
        func main() -> Int {
            var count: Int = 1;
            let name: String = "teddy";
            print(name, count);
            helper(count)
            return 0;
        }
    "#;
    let Node::Function(func) = parse_single(source) else {
        panic!("Expected function");
    };
    assert_eq!(func.body.len(), 5);
    assert!(matches!(func.body[0], Node::Assign(_)));
    assert!(matches!(func.body[2], Node::Print(_)));
    assert!(matches!(func.body[3], Node::Call { .. }));
    assert_eq!(func.body[4], Node::Return(Box::new(Node::IntegerLiteral(0))));
}

#[test]
fn test_multiple_functions_keep_order() {
    let program = parse_source(
        "func a() -> Int { return 1; } func b() -> Int { return a(); }",
    )
    .unwrap();
    let names: Vec<&str> = program
        .iter()
        .map(|node| match node {
            Node::Function(f) => f.prototype.name.as_str(),
            other => panic!("Expected function, got {:?}", other),
        })
        .collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[test]
fn test_nested_if_in_function() {
    let source = "func f(x: Bool) -> Void { if x { if x { print(1); } } }";
    let Node::Function(func) = parse_single(source) else {
        panic!("Expected function");
    };
    let Node::If(outer) = &func.body[0] else {
        panic!("Expected if");
    };
    assert!(matches!(outer.body[0], Node::If(_)));
}
