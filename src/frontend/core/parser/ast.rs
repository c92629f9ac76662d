//! Abstract Syntax Tree types
//!
//! Every construct of the language is one variant of the closed [`Node`] sum
//! type. Nodes are built once by the parser and never mutated afterwards.

pub use crate::frontend::core::lexer::tokens::BinOp;
use std::borrow::Cow;
use std::fmt;

/// Whether a declared variable may be reassigned (`var`) or not (`let`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mutability {
    Immutable,
    Mutable,
}

/// Nominal type reference
///
/// Types compare and hash by name only, so `Type::INT` and
/// `Type::named("Int")` are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Type {
    name: Cow<'static, str>,
}

impl Type {
    pub const INT: Type = Type::builtin("Int");
    pub const FLOAT: Type = Type::builtin("Float");
    pub const STRING: Type = Type::builtin("String");
    pub const BOOL: Type = Type::builtin("Bool");
    pub const VOID: Type = Type::builtin("Void");

    const fn builtin(name: &'static str) -> Self {
        Type {
            name: Cow::Borrowed(name),
        }
    }

    /// User-defined type, such as an enum name
    pub fn named(name: impl Into<String>) -> Self {
        Type {
            name: Cow::Owned(name.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_builtin(&self) -> bool {
        [Type::INT, Type::FLOAT, Type::STRING, Type::BOOL, Type::VOID].contains(self)
    }
}

impl fmt::Display for Type {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Typed variable: a declaration, a formal parameter or an enum payload field
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub mutability: Mutability,
    pub ty: Type,
    pub identifier: String,
}

impl Variable {
    pub fn new(
        mutability: Mutability,
        ty: Type,
        identifier: impl Into<String>,
    ) -> Self {
        Self {
            mutability,
            ty,
            identifier: identifier.into(),
        }
    }

    /// Immutable variable, as used for formals and payload fields
    pub fn immutable(
        ty: Type,
        identifier: impl Into<String>,
    ) -> Self {
        Self::new(Mutability::Immutable, ty, identifier)
    }
}

/// Function signature: `name(formals) -> return_type`
#[derive(Debug, Clone, PartialEq)]
pub struct Prototype {
    pub name: String,
    pub formals: Vec<Variable>,
    pub return_type: Type,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub prototype: Prototype,
    pub body: Vec<Node>,
}

/// Declaration with an initial value: `let x: Int = 1;`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpression {
    pub variable: Variable,
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub conditional: Box<Node>,
    pub body: Vec<Node>,
}

/// `if let x: Shape = .circle(r: Float) { ... }`
///
/// Runs `body` when the existing variable `x` holds case `case_name`, with
/// each unwrapped variable bound by position to the case's payload.
#[derive(Debug, Clone, PartialEq)]
pub struct IfLet {
    pub test_variable: Variable,
    pub case_name: String,
    pub unwrapped_variables: Vec<Variable>,
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumCaseDefinition {
    pub case_name: String,
    pub associated_values: Vec<Variable>,
}

/// Sum type with named, struct-like cases
#[derive(Debug, Clone, PartialEq)]
pub struct EnumDefinition {
    pub name: String,
    pub cases: Vec<EnumCaseDefinition>,
}

impl EnumDefinition {
    pub fn case(
        &self,
        case_name: &str,
    ) -> Option<&EnumCaseDefinition> {
        self.cases.iter().find(|c| c.case_name == case_name)
    }
}

/// Constructor invocation for one case: `.circle(5.0)` declared as `Shape`
#[derive(Debug, Clone, PartialEq)]
pub struct EnumConstruction {
    pub enum_name: String,
    pub case_name: String,
    pub args: Vec<Node>,
}

/// AST node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Function(Function),
    Prototype(Prototype),
    Variable(Variable),
    Assign(AssignExpression),
    Return(Box<Node>),
    Print(Vec<Node>),
    Call {
        identifier: String,
        args: Vec<Node>,
    },
    FieldAccess(String),
    If(IfStatement),
    IfLet(IfLet),
    Type(Type),
    IntegerLiteral(i64),
    FloatLiteral(f64),
    StringLiteral(String),
    BoolLiteral(bool),
    BinaryOperation {
        lhs: Box<Node>,
        op: BinOp,
        rhs: Box<Node>,
    },
    EnumDefinition(EnumDefinition),
    EnumConstruction(EnumConstruction),
}

impl Node {
    pub fn binary(
        lhs: Node,
        op: BinOp,
        rhs: Node,
    ) -> Self {
        Node::BinaryOperation {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    pub fn field(identifier: impl Into<String>) -> Self {
        Node::FieldAccess(identifier.into())
    }

    /// Nodes that produce a value and need a `;` when used as a statement
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            Node::Call { .. }
                | Node::FieldAccess(_)
                | Node::IntegerLiteral(_)
                | Node::FloatLiteral(_)
                | Node::StringLiteral(_)
                | Node::BoolLiteral(_)
                | Node::BinaryOperation { .. }
                | Node::EnumConstruction(_)
        )
    }

    /// Short variant name for logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Function(_) => "function",
            Node::Prototype(_) => "prototype",
            Node::Variable(_) => "variable",
            Node::Assign(_) => "assignment",
            Node::Return(_) => "return",
            Node::Print(_) => "print",
            Node::Call { .. } => "call",
            Node::FieldAccess(_) => "field access",
            Node::If(_) => "if",
            Node::IfLet(_) => "if let",
            Node::Type(_) => "type",
            Node::IntegerLiteral(_) => "integer",
            Node::FloatLiteral(_) => "float",
            Node::StringLiteral(_) => "string",
            Node::BoolLiteral(_) => "bool",
            Node::BinaryOperation { .. } => "binary operation",
            Node::EnumDefinition(_) => "enum",
            Node::EnumConstruction(_) => "enum construction",
        }
    }
}
