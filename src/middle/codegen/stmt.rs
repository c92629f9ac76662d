//! 语句代码生成
//!
//! 将声明、函数、控制流和 print 转换为目标方言语句。

use super::enum_lowering::braced;
use super::{CodegenContext, CodegenError, Target};
use crate::frontend::core::parser::ast::*;

/// 语句代码生成实现
impl CodegenContext {
    /// 生成语句；表达式节点补上 `;`
    pub fn generate_statement(
        &mut self,
        node: &Node,
    ) -> Result<String, CodegenError> {
        match node {
            Node::Function(func) => self.generate_function(func),
            Node::Prototype(proto) => Ok(format!("{};", self.signature(proto))),
            Node::Variable(var) => {
                self.declare(&var.identifier, &var.ty);
                Ok(self.declaration(var))
            }
            Node::Assign(assign) => self.generate_assign(assign),
            Node::Return(value) => Ok(format!("return {};", self.generate_expr(value)?)),
            Node::Print(args) => self.generate_print(args),
            Node::If(stmt) => self.generate_if(stmt),
            Node::IfLet(if_let) => self.generate_if_let(if_let),
            Node::EnumDefinition(def) => self.generate_enum_definition(def),
            Node::Type(ty) => Ok(self.target.render_type(ty)),
            expr => Ok(format!("{};", self.generate_expr(expr)?)),
        }
    }

    /// 变量声明：`int x;`
    pub fn declaration(
        &self,
        var: &Variable,
    ) -> String {
        format!("{} {};", self.target.render_type(&var.ty), var.identifier)
    }

    /// 形参列表，每个形参都带 `const`；C 的空列表写作 `void`
    pub fn formal_list(
        &self,
        formals: &[Variable],
    ) -> String {
        if formals.is_empty() {
            return match self.target {
                Target::C => "void".to_string(),
                Target::Cpp => String::new(),
            };
        }
        formals
            .iter()
            .map(|f| format!("{} {}", self.target.render_const_type(&f.ty), f.identifier))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// 函数签名，不带 `;`
    fn signature(
        &self,
        proto: &Prototype,
    ) -> String {
        format!(
            "{} {}({})",
            self.target.render_type(&proto.return_type),
            proto.name,
            self.formal_list(&proto.formals)
        )
    }

    fn generate_function(
        &mut self,
        func: &Function,
    ) -> Result<String, CodegenError> {
        self.functions.insert(
            func.prototype.name.clone(),
            func.prototype.return_type.clone(),
        );

        self.push_scope();
        for formal in &func.prototype.formals {
            self.declare(&formal.identifier, &formal.ty);
        }
        let body = self.generate_body(&func.body);
        self.pop_scope();

        Ok(format!("{} {}", self.signature(&func.prototype), braced(&body?)))
    }

    /// 语句序列，每条一行
    fn generate_body(
        &mut self,
        body: &[Node],
    ) -> Result<String, CodegenError> {
        let lines = body
            .iter()
            .map(|node| self.generate_statement(node))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(lines.join("\n"))
    }

    /// 带独立作用域的花括号块
    fn generate_scoped_block(
        &mut self,
        prologue: Vec<String>,
        body: &[Node],
    ) -> Result<String, CodegenError> {
        self.push_scope();
        let result = self.generate_body(body);
        self.pop_scope();

        let mut lines = prologue;
        let body = result?;
        if !body.is_empty() {
            lines.push(body);
        }
        Ok(braced(&lines.join("\n")))
    }

    /// `int x = value;`
    fn generate_assign(
        &mut self,
        assign: &AssignExpression,
    ) -> Result<String, CodegenError> {
        let value = self.generate_expr(&assign.value)?;
        self.declare(&assign.variable.identifier, &assign.variable.ty);

        let declaration = self.declaration(&assign.variable);
        let declaration = declaration.strip_suffix(';').unwrap_or(&declaration);
        Ok(format!("{} = {};", declaration, value))
    }

    /// 每个参数一条输出语句，各自换行
    fn generate_print(
        &mut self,
        args: &[Node],
    ) -> Result<String, CodegenError> {
        let mut lines = Vec::with_capacity(args.len());
        for arg in args {
            let value = self.generate_expr(arg)?;
            let line = match self.target {
                Target::Cpp => format!("cout << {} << endl;", value),
                Target::C => {
                    let specifier = printf_specifier(self.static_type(arg).as_ref());
                    format!("printf(\"{}\\n\", {});", specifier, value)
                }
            };
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn generate_if(
        &mut self,
        stmt: &IfStatement,
    ) -> Result<String, CodegenError> {
        let condition = self.generate_expr(&stmt.conditional)?;
        let block = self.generate_scoped_block(Vec::new(), &stmt.body)?;
        Ok(format!("if ({}) {}", condition, block))
    }

    /// `if (x.tag == _ShapeCircleTag) { const float r = x.circle.r; ... }`
    fn generate_if_let(
        &mut self,
        if_let: &IfLet,
    ) -> Result<String, CodegenError> {
        let enum_name = if_let.test_variable.ty.name();
        let layout = self
            .enum_layout(enum_name)
            .ok_or_else(|| CodegenError::UnknownEnum(enum_name.to_string()))?;
        let case = layout.case(&if_let.case_name)?;

        if if_let.unwrapped_variables.len() > case.fields.len() {
            return Err(CodegenError::PatternArity {
                enum_name: enum_name.to_string(),
                case_name: if_let.case_name.clone(),
                expected: case.fields.len(),
                found: if_let.unwrapped_variables.len(),
            });
        }

        let subject = &if_let.test_variable.identifier;
        let condition = format!("{}.tag == {}", subject, case.tag_name);
        let bindings: Vec<String> = if_let
            .unwrapped_variables
            .iter()
            .zip(&case.fields)
            .map(|(binding, field)| {
                format!(
                    "{} {} = {}.{}.{};",
                    self.target.render_const_type(&binding.ty),
                    binding.identifier,
                    subject,
                    case.member_name,
                    field.identifier
                )
            })
            .collect();

        // 绑定变量只在块内可见
        self.push_scope();
        for binding in &if_let.unwrapped_variables {
            self.declare(&binding.identifier, &binding.ty);
        }
        let block = self.generate_scoped_block(bindings, &if_let.body);
        self.pop_scope();

        Ok(format!("if ({}) {}", condition, block?))
    }
}

/// 按静态类型选择 printf 格式；未知类型按字符串处理
fn printf_specifier(ty: Option<&Type>) -> &'static str {
    match ty.map(Type::name) {
        Some("Int") | Some("Bool") => "%d",
        Some("Float") => "%f",
        _ => "%s",
    }
}
