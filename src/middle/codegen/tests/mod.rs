//! 代码生成测试
//!
//! - basic: 头文件、函数、声明、表达式
//! - enums: 枚举降级、构造与 if let
//! - print: print 降级与 printf 格式推断
//! - errors: 代码生成错误


use crate::frontend::core::lexer::tokenize;
use crate::frontend::core::parser::parse;
use crate::middle::codegen::{generate, CodegenError, Target};

/// 从源码生成目标代码
pub(crate) fn emit(
    source: &str,
    target: Target,
) -> Result<String, CodegenError> {
    let tokens = tokenize(source).expect("source should tokenize");
    let ast = parse(&tokens).expect("source should parse");
    generate(&ast, target)
}

/// 生成 C 代码并去掉头文件
pub(crate) fn emit_c_body(source: &str) -> String {
    let code = emit(source, Target::C).expect("generation should succeed");
    code.lines()
        .filter(|line| !line.starts_with("#include"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 去除全部空白，用于忽略格式的比较
pub(crate) fn squash(code: &str) -> String {
    code.chars().filter(|c| !c.is_whitespace()).collect()
}
