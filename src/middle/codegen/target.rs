//! 目标方言
//!
//! C 与 C++ 只在头文件、命名空间、类型渲染和 print 降级上有区别。

use crate::frontend::core::parser::ast::Type;
use serde::{Deserialize, Serialize};

/// 输出方言
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    #[default]
    C,
    Cpp,
}

impl Target {
    /// 文件开头的 `#include` 头文件
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            Target::C => &["stdio.h", "stdlib.h", "stdbool.h", "string.h"],
            Target::Cpp => &["iostream", "string", "cstdlib", "cstring"],
        }
    }

    pub fn uses_namespace_std(self) -> bool {
        matches!(self, Target::Cpp)
    }

    /// 输出文件扩展名
    pub fn extension(self) -> &'static str {
        match self {
            Target::C => "c",
            Target::Cpp => "cpp",
        }
    }

    /// 渲染类型名；非内置类型原样输出
    pub fn render_type(
        self,
        ty: &Type,
    ) -> String {
        let rendered = match ty.name() {
            "Int" => "int",
            "Float" => "float",
            "Bool" => "bool",
            "Void" => "void",
            "String" => match self {
                Target::C => "char*",
                Target::Cpp => "string",
            },
            other => other,
        };
        rendered.to_string()
    }

    /// `const` 限定的类型；指针类型限定指针本身
    pub fn render_const_type(
        self,
        ty: &Type,
    ) -> String {
        let rendered = self.render_type(ty);
        if rendered.ends_with('*') {
            format!("{} const", rendered)
        } else {
            format!("const {}", rendered)
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            Target::C => write!(f, "c"),
            Target::Cpp => write!(f, "cpp"),
        }
    }
}
