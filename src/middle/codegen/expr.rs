//! 表达式代码生成
//!
//! 将表达式转换为目标方言文本，并推断可静态确定的类型。

use super::enum_lowering::capitalize;
use super::{CodegenContext, CodegenError};
use crate::frontend::core::lexer::quote;
use crate::frontend::core::parser::ast::*;

/// 表达式代码生成实现
impl CodegenContext {
    /// 生成表达式；语句类节点交给 `generate_statement`
    pub fn generate_expr(
        &mut self,
        node: &Node,
    ) -> Result<String, CodegenError> {
        match node {
            Node::IntegerLiteral(value) => Ok(value.to_string()),
            Node::FloatLiteral(value) => Ok(format!("{:?}", value)),
            Node::StringLiteral(value) => Ok(quote(value)),
            Node::BoolLiteral(value) => Ok(value.to_string()),
            Node::FieldAccess(identifier) => Ok(identifier.clone()),
            Node::Call { identifier, args } => {
                Ok(format!("{}({})", identifier, self.generate_args(args)?))
            }
            Node::BinaryOperation { lhs, op, rhs } => self.generate_binop(lhs, *op, rhs),
            Node::EnumConstruction(construction) => self.generate_enum_construction(construction),
            other => self.generate_statement(other),
        }
    }

    fn generate_args(
        &mut self,
        args: &[Node],
    ) -> Result<String, CodegenError> {
        let args = args
            .iter()
            .map(|arg| self.generate_expr(arg))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(args.join(", "))
    }

    /// `lhs op rhs`，仅在子表达式结合更松时加括号
    ///
    /// 右操作数与父节点同级时也加括号，保持左结合语义。
    fn generate_binop(
        &mut self,
        lhs: &Node,
        op: BinOp,
        rhs: &Node,
    ) -> Result<String, CodegenError> {
        let precedence = op.precedence();
        let lhs_text = self.generate_operand(lhs, |p| p < precedence)?;
        let rhs_text = self.generate_operand(rhs, |p| p <= precedence)?;
        Ok(format!("{} {} {}", lhs_text, op, rhs_text))
    }

    fn generate_operand(
        &mut self,
        node: &Node,
        needs_parens: impl Fn(u8) -> bool,
    ) -> Result<String, CodegenError> {
        let text = self.generate_expr(node)?;
        match node {
            Node::BinaryOperation { op, .. } if needs_parens(op.precedence()) => {
                Ok(format!("({})", text))
            }
            _ => Ok(text),
        }
    }

    /// `_ShapeCreateCircleCase(args)`；已定义的枚举会校验分支名
    fn generate_enum_construction(
        &mut self,
        construction: &EnumConstruction,
    ) -> Result<String, CodegenError> {
        let constructor = match self.enum_layout(&construction.enum_name) {
            Some(layout) => layout.case(&construction.case_name)?.constructor.clone(),
            None => {
                tracing::warn!(
                    "Constructing case '{}' of enum '{}' which is not defined in this unit",
                    construction.case_name,
                    construction.enum_name
                );
                format!(
                    "_{}Create{}Case",
                    construction.enum_name,
                    capitalize(&construction.case_name)
                )
            }
        };
        Ok(format!("{}({})", constructor, self.generate_args(&construction.args)?))
    }

    /// 表达式可静态确定的类型
    pub fn static_type(
        &self,
        node: &Node,
    ) -> Option<Type> {
        match node {
            Node::IntegerLiteral(_) => Some(Type::INT),
            Node::FloatLiteral(_) => Some(Type::FLOAT),
            Node::StringLiteral(_) => Some(Type::STRING),
            Node::BoolLiteral(_) => Some(Type::BOOL),
            Node::FieldAccess(identifier) => self.lookup(identifier).cloned(),
            Node::Call { identifier, .. } => self.functions.get(identifier).cloned(),
            Node::EnumConstruction(c) => Some(Type::named(c.enum_name.clone())),
            Node::BinaryOperation { lhs, rhs, .. } => {
                match (self.static_type(lhs), self.static_type(rhs)) {
                    (Some(l), Some(r)) if l == Type::FLOAT || r == Type::FLOAT => {
                        Some(Type::FLOAT)
                    }
                    (Some(l), _) => Some(l),
                    (None, r) => r,
                }
            }
            _ => None,
        }
    }
}
