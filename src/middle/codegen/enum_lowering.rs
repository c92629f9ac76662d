//! 枚举降级
//!
//! 每个枚举降级为带显式 `tag` 判别字段的 C 结构体：
//!
//! ```c
//! typedef struct _ShapeCircle { float r; } _ShapeCircle;
//! typedef enum _ShapeTag { _ShapeCircleTag } _ShapeTag;
//! typedef struct Shape { _ShapeTag tag; _ShapeCircle circle; } Shape;
//! Shape _ShapeCreateCircleCase(const float r) { ... }
//! ```
//!
//! `EnumLayout` 是 (枚举, 分支) 到生成标识符的映射表，构造、`if let`
//! 都通过它查询名字。

use super::{CodegenContext, CodegenError, Target};
use crate::frontend::core::parser::ast::{EnumDefinition, Variable};
use indexmap::IndexMap;
use tracing::debug;

/// 单个分支的生成标识符
#[derive(Debug, Clone, PartialEq)]
pub struct CaseLayout {
    pub case_name: String,
    /// 分支载荷结构体：`_ShapeCircle`
    pub struct_name: String,
    /// 判别常量：`_ShapeCircleTag`
    pub tag_name: String,
    /// 外层结构体中的成员名：`circle`
    pub member_name: String,
    /// 构造函数：`_ShapeCreateCircleCase`
    pub constructor: String,
    pub fields: Vec<Variable>,
}

/// 枚举布局表
#[derive(Debug, Clone, PartialEq)]
pub struct EnumLayout {
    pub name: String,
    /// 判别枚举类型：`_ShapeTag`
    pub tag_enum: String,
    pub cases: IndexMap<String, CaseLayout>,
}

impl EnumLayout {
    /// 从定义构建布局，拒绝重名分支
    ///
    /// 首字母大写后撞名的分支（`a` 与 `A`）同样视为重名。
    /// 与生成代码自身的名字冲突的分支或字段报 `ReservedIdentifier`：
    /// 分支 `tag`/`Tag` 的成员会与判别字段 `tag` 重名，载荷结构体会与
    /// `_<Enum>Tag` 重名；字段 `_value` 与构造函数的局部变量重名。
    pub fn from_definition(def: &EnumDefinition) -> Result<Self, CodegenError> {
        let mut cases: IndexMap<String, CaseLayout> = IndexMap::new();

        for case in &def.cases {
            let capitalized = capitalize(&case.case_name);
            let layout = CaseLayout {
                case_name: case.case_name.clone(),
                struct_name: format!("_{}{}", def.name, capitalized),
                tag_name: format!("_{}{}Tag", def.name, capitalized),
                member_name: decapitalize(&case.case_name),
                constructor: format!("_{}Create{}Case", def.name, capitalized),
                fields: case.associated_values.clone(),
            };

            if let Some(identifier) = reserved_clash(&layout) {
                return Err(CodegenError::ReservedIdentifier {
                    enum_name: def.name.clone(),
                    identifier,
                });
            }

            let collides = cases.contains_key(&case.case_name)
                || cases.values().any(|c| c.struct_name == layout.struct_name);
            if collides {
                return Err(CodegenError::DuplicateEnumCase {
                    enum_name: def.name.clone(),
                    case_name: case.case_name.clone(),
                });
            }
            cases.insert(case.case_name.clone(), layout);
        }

        Ok(EnumLayout {
            name: def.name.clone(),
            tag_enum: format!("_{}Tag", def.name),
            cases,
        })
    }

    pub fn case(
        &self,
        case_name: &str,
    ) -> Result<&CaseLayout, CodegenError> {
        self.cases
            .get(case_name)
            .ok_or_else(|| CodegenError::UnknownEnumCase {
                enum_name: self.name.clone(),
                case_name: case_name.to_string(),
            })
    }
}

/// 分支布局中与生成代码固定名字冲突的标识符
fn reserved_clash(case: &CaseLayout) -> Option<String> {
    if case.member_name == "tag" {
        return Some(case.member_name.clone());
    }
    case.fields
        .iter()
        .find(|field| field.identifier == "_value")
        .map(|field| field.identifier.clone())
}

pub(crate) fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// 枚举代码生成实现
impl CodegenContext {
    /// 生成枚举定义并登记布局
    pub fn generate_enum_definition(
        &mut self,
        def: &EnumDefinition,
    ) -> Result<String, CodegenError> {
        let layout = EnumLayout::from_definition(def)?;
        debug!(
            "Enum layout '{}': {}",
            layout.name,
            layout
                .cases
                .values()
                .map(|c| c.tag_name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut parts = Vec::new();

        // 分支载荷结构体
        for case in layout.cases.values() {
            let members = if case.fields.is_empty() {
                vec!["char _unused;".to_string()]
            } else {
                case.fields
                    .iter()
                    .map(|field| self.declaration(field))
                    .collect()
            };
            parts.push(typedef_block("struct", &case.struct_name, &members, ""));
        }

        // 判别枚举，空枚举退化为 int
        let tag_type = if layout.cases.is_empty() {
            "int".to_string()
        } else {
            let tags: Vec<String> = layout.cases.values().map(|c| c.tag_name.clone()).collect();
            parts.push(typedef_block("enum", &layout.tag_enum, &tags, ","));
            layout.tag_enum.clone()
        };

        // 外层结构体
        let mut members = vec![format!("{} tag;", tag_type)];
        members.extend(
            layout
                .cases
                .values()
                .map(|c| format!("{} {};", c.struct_name, c.member_name)),
        );
        parts.push(typedef_block("struct", &layout.name, &members, ""));

        for case in layout.cases.values() {
            parts.push(self.constructor(&layout, case));
        }

        self.enums.insert(layout.name.clone(), layout);
        Ok(parts.join("\n\n"))
    }

    /// 分支构造函数：零初始化整个外层值，填充载荷，设置 tag
    fn constructor(
        &self,
        layout: &EnumLayout,
        case: &CaseLayout,
    ) -> String {
        let params = self.formal_list(&case.fields);

        // C++ 载荷可能含 `std::string`，只能值初始化，不能 memset
        let mut body = match self.target {
            Target::C => vec![
                format!("{} _value;", layout.name),
                "memset(&_value, 0, sizeof _value);".to_string(),
            ],
            Target::Cpp => vec![format!("{} _value{{}};", layout.name)],
        };
        for field in &case.fields {
            body.push(format!(
                "_value.{}.{} = {};",
                case.member_name, field.identifier, field.identifier
            ));
        }
        body.push(format!("_value.tag = {};", case.tag_name));
        body.push("return _value;".to_string());

        format!(
            "{} {}({}) {}",
            layout.name,
            case.constructor,
            params,
            braced(&body.join("\n"))
        )
    }

    /// 查询已定义枚举的布局
    pub fn enum_layout(
        &self,
        name: &str,
    ) -> Option<&EnumLayout> {
        self.enums.get(name)
    }
}

/// `typedef <keyword> Name {\n\tm1\n\tm2\n} Name;`
fn typedef_block(
    keyword: &str,
    name: &str,
    members: &[String],
    separator: &str,
) -> String {
    let body = members
        .iter()
        .map(|m| format!("\t{}", m))
        .collect::<Vec<_>>()
        .join(&format!("{}\n", separator));
    format!("typedef {} {} {{\n{}\n}} {};", keyword, name, body, name)
}

/// 花括号块，每行缩进一级
pub(crate) fn braced(body: &str) -> String {
    if body.is_empty() {
        return "{\n}".to_string();
    }
    let indented = body
        .lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("\t{}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{{\n{}\n}}", indented)
}
