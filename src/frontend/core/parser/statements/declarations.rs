//! Declaration parsing
//! Handles functions, prototypes, variables and expression statements

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::{ParseError, ParserState, BP_LOWEST};

use super::control_flow::parse_block;
use super::enums::parse_enum_construction;

/// Parse function definition: `func name(a: Int) -> Int { ... }`
pub fn parse_function_def(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(&TokenKind::KwFunc)?;

    let prototype = parse_prototype(state)?;
    let body = parse_block(state)?;

    tracing::debug!(
        "Parsed function '{}' ({} statements)",
        prototype.name,
        body.len()
    );
    Ok(Node::Function(Function { prototype, body }))
}

/// Parse prototype: `name(formals) -> Type`
pub fn parse_prototype(state: &mut ParserState<'_>) -> Result<Prototype, ParseError> {
    let name = state.expect_identifier()?;
    let formals = parse_argument_list(state)?;
    state.expect(&TokenKind::Arrow)?;
    let return_type = parse_type(state)?;

    Ok(Prototype {
        name,
        formals,
        return_type,
    })
}

/// Parse typed parameter list: `(a: Int, b: Float)`
///
/// Shared by prototypes, enum cases and `if let` patterns. Every entry is
/// immutable.
pub fn parse_argument_list(state: &mut ParserState<'_>) -> Result<Vec<Variable>, ParseError> {
    state.expect(&TokenKind::LParen)?;

    let mut formals = Vec::new();
    if state.skip(&TokenKind::RParen) {
        return Ok(formals);
    }

    loop {
        let identifier = state.expect_identifier()?;
        state.expect(&TokenKind::Colon)?;
        let ty = parse_type(state)?;
        formals.push(Variable::immutable(ty, identifier));

        if !state.skip(&TokenKind::Comma) {
            break;
        }
    }

    state.expect(&TokenKind::RParen)?;
    Ok(formals)
}

/// Parse a type: a built-in keyword or a user-defined name
pub fn parse_type(state: &mut ParserState<'_>) -> Result<Type, ParseError> {
    let ty = match state.current_kind() {
        Some(TokenKind::KwInt) => Type::INT,
        Some(TokenKind::KwFloat) => Type::FLOAT,
        Some(TokenKind::KwString) => Type::STRING,
        Some(TokenKind::KwBool) => Type::BOOL,
        Some(TokenKind::KwVoid) => Type::VOID,
        Some(TokenKind::Identifier(name)) => Type::named(name.clone()),
        _ => return Err(ParseError::ExpectedType),
    };
    state.bump();
    Ok(ty)
}

/// Parse variable declaration: `let x: Int;`, `var x: Int = expr;` or
/// `let s: Shape = .circle(1.0);`
pub fn parse_var_decl(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let mutability = match state.current_kind() {
        Some(TokenKind::KwLet) => Mutability::Immutable,
        Some(TokenKind::KwVar) => Mutability::Mutable,
        _ => return Err(ParseError::ExpectedVariableDeclaration),
    };
    state.bump();

    let identifier = state.expect_identifier()?;
    state.expect(&TokenKind::Colon)?;
    let ty = parse_type(state)?;
    let variable = Variable::new(mutability, ty, identifier);

    if state.skip(&TokenKind::Semicolon) {
        return Ok(Node::Variable(variable));
    }

    if !state.skip(&TokenKind::Eq) {
        return Err(ParseError::expected_char(&TokenKind::Semicolon));
    }

    let value = if state.at(&TokenKind::Dot) {
        parse_enum_construction(state, &variable.ty)?
    } else {
        state.parse_expression(BP_LOWEST)?
    };
    state.expect(&TokenKind::Semicolon)?;

    Ok(Node::Assign(AssignExpression {
        variable,
        value: Box::new(value),
    }))
}

/// Parse expression statement; the trailing `;` is optional
pub fn parse_expr_stmt(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    let expr = state.parse_expression(BP_LOWEST)?;
    state.skip(&TokenKind::Semicolon);
    Ok(expr)
}
