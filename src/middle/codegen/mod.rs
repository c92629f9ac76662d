//! 代码生成器
//!
//! 将 AST 转换为 C 或 C++ 源代码。
//! 核心设计原则：
//! 1. 逐节点降级：每个 AST 节点都能独立输出为目标方言文本
//! 2. 枚举布局表：(枚举, 分支) 到生成标识符的映射在定义处建立并校验
//! 3. 不做语义检查：调用参数个数、类型一致性等原样交给 C 编译器

pub mod enum_lowering;
pub mod expr;
pub mod stmt;
pub mod target;

pub use enum_lowering::{CaseLayout, EnumLayout};
pub use target::Target;

use crate::frontend::core::parser::ast::{Node, Type};
use indexmap::IndexMap;
use std::collections::HashMap;
use tracing::{debug, warn};

/// 生成目标代码
pub fn generate(
    ast: &[Node],
    target: Target,
) -> Result<String, CodegenError> {
    CodegenContext::new(target).generate(ast)
}

/// 代码生成上下文
///
/// 只持有单次生成的状态，不同编译单元互不影响。
pub struct CodegenContext {
    /// 输出方言
    target: Target,

    /// 已定义枚举的布局，按定义顺序
    enums: IndexMap<String, EnumLayout>,

    /// 顶层函数的返回类型，用于推断 printf 格式
    functions: HashMap<String, Type>,

    /// 变量作用域栈，最外层为全局
    scopes: Vec<HashMap<String, Type>>,
}

/// 代码生成错误
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    /// 同一枚举中分支重名
    #[error("Duplicate case '{case_name}' in enum '{enum_name}'")]
    DuplicateEnumCase {
        enum_name: String,
        case_name: String,
    },

    /// 已知枚举中不存在的分支
    #[error("Enum '{enum_name}' has no case '{case_name}'")]
    UnknownEnumCase {
        enum_name: String,
        case_name: String,
    },

    /// 分支或字段名与生成代码的固定名字冲突
    #[error("Enum '{enum_name}' uses the generated name '{identifier}'")]
    ReservedIdentifier {
        enum_name: String,
        identifier: String,
    },

    /// 顶层调用语句，C 文件作用域不允许
    #[error("Expression statement ({0}) is not allowed at top level")]
    TopLevelExpression(String),

    /// `if let` 针对未定义的枚举
    #[error("Unknown enum '{0}' in 'if let'")]
    UnknownEnum(String),

    /// `if let` 绑定的变量多于分支的载荷
    #[error("Pattern for '{enum_name}.{case_name}' binds {found} values, but the case carries {expected}")]
    PatternArity {
        enum_name: String,
        case_name: String,
        expected: usize,
        found: usize,
    },
}

impl CodegenContext {
    /// 创建新的代码生成上下文
    pub fn new(target: Target) -> Self {
        CodegenContext {
            target,
            enums: IndexMap::new(),
            functions: HashMap::new(),
            scopes: vec![HashMap::new()],
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// 生成完整翻译单元：头文件、命名空间，然后逐个顶层节点
    pub fn generate(
        &mut self,
        ast: &[Node],
    ) -> Result<String, CodegenError> {
        debug!("Generating {} code for {} top-level nodes", self.target, ast.len());

        // 预先登记函数返回类型，调用可以出现在定义之前
        for node in ast {
            if let Node::Function(func) = node {
                self.functions.insert(
                    func.prototype.name.clone(),
                    func.prototype.return_type.clone(),
                );
            }
        }

        let mut output = self.generate_prelude();
        for node in ast {
            // C 文件作用域没有语句：无副作用的表达式丢弃，调用报错
            if node.is_expression() {
                if matches!(node, Node::Call { .. }) {
                    return Err(CodegenError::TopLevelExpression(node.kind_name().to_string()));
                }
                warn!("Dropping top-level {} with no effect", node.kind_name());
                continue;
            }
            output.push('\n');
            output.push_str(&self.generate_statement(node)?);
            output.push('\n');
        }

        debug!("Generated {} bytes", output.len());
        Ok(output)
    }

    /// `#include` 行与 C++ 的 `using namespace std;`
    fn generate_prelude(&self) -> String {
        let mut prelude: String = self
            .target
            .headers()
            .iter()
            .map(|header| format!("#include <{}>\n", header))
            .collect();
        if self.target.uses_namespace_std() {
            prelude.push_str("using namespace std;\n");
        }
        prelude
    }

    fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    /// 在当前作用域登记变量类型
    fn declare(
        &mut self,
        identifier: &str,
        ty: &Type,
    ) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(identifier.to_string(), ty.clone());
        }
    }

    /// 由内向外查找变量类型
    fn lookup(
        &self,
        identifier: &str,
    ) -> Option<&Type> {
        self.scopes.iter().rev().find_map(|scope| scope.get(identifier))
    }
}

#[cfg(test)]
mod tests;
