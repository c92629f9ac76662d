//! Lexer tests module
//!
//! - basic: 基础测试（空输入、空白符、位置）
//! - literals: 字面量测试（整数、浮点、字符串、布尔）
//! - operators: 运算符与分隔符测试
//! - keywords: 关键字测试
//! - errors: 错误处理测试
//! - idempotence: 重新拼接后再次分词的性质测试
