//! Parser tests module
//!
//! - basic: 基础测试（空程序、字面量、变量声明、print/return）
//! - precedence: 运算符优先级与结合性测试
//! - fn_def: 函数定义测试
//! - enums: 枚举定义、构造与 if let 测试
//! - errors: 错误处理测试
//! - boundary: 边界情况测试

mod boundary;
mod fn_def;
mod precedence;

use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::{parse, Node, ParseError};

/// Tokenize and parse, panicking on lexical errors
pub(crate) fn parse_source(source: &str) -> Result<Vec<Node>, ParseError> {
    let tokens = tokenize(source).expect("source should tokenize");
    parse(&tokens)
}

/// Parse a program that must consist of exactly one statement
pub(crate) fn parse_single(source: &str) -> Node {
    let mut program = parse_source(source).expect("source should parse");
    assert_eq!(program.len(), 1, "expected one statement in {:?}", source);
    program.remove(0)
}
