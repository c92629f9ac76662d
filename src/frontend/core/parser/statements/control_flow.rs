//! Control flow statement parsing
//! Handles blocks, if / if let, return and print

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::{ParseError, ParserState, StatementParser, BP_LOWEST};

use super::declarations::{parse_argument_list, parse_type};

/// Parse block: `{ stmt* }`
pub fn parse_block(state: &mut ParserState<'_>) -> Result<Vec<Node>, ParseError> {
    state.expect(&TokenKind::LBrace)?;

    let mut body = Vec::new();
    while !state.skip(&TokenKind::RBrace) {
        if state.at_end() {
            return Err(ParseError::expected_char(&TokenKind::RBrace));
        }
        body.push(state.parse_statement()?);
    }

    Ok(body)
}

/// Parse if statement: `if cond { ... }` or `if let ...`
pub fn parse_if_stmt(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(&TokenKind::KwIf)?;

    if state.at(&TokenKind::KwLet) {
        return parse_if_let(state);
    }

    let conditional = state.parse_expression(BP_LOWEST)?;
    let body = parse_block(state)?;

    Ok(Node::If(IfStatement {
        conditional: Box::new(conditional),
        body,
    }))
}

/// Parse enum case test: `let x: Shape = .circle(r: Float) { ... }`
///
/// `if` has already been consumed.
fn parse_if_let(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect(&TokenKind::KwLet)?;

    let identifier = state.expect_identifier()?;
    state.expect(&TokenKind::Colon)?;
    let ty = parse_type(state)?;
    state.expect(&TokenKind::Eq)?;
    state.expect(&TokenKind::Dot)?;
    let case_name = state.expect_identifier()?;

    let unwrapped_variables = if state.at(&TokenKind::LParen) {
        parse_argument_list(state)?
    } else {
        Vec::new()
    };
    let body = parse_block(state)?;

    Ok(Node::IfLet(IfLet {
        test_variable: Variable::immutable(ty, identifier),
        case_name,
        unwrapped_variables,
        body,
    }))
}

/// Parse return statement: `return expr;`
pub fn parse_return_stmt(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect_or(&TokenKind::KwReturn, ParseError::ExpectedReturn)?;

    let value = state.parse_expression(BP_LOWEST)?;
    state.expect(&TokenKind::Semicolon)?;

    Ok(Node::Return(Box::new(value)))
}

/// Parse print statement: `print(expr, ...);`
pub fn parse_print_stmt(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect_or(&TokenKind::KwPrint, ParseError::ExpectedPrint)?;

    let args = state.parse_expression_list()?;
    state.expect(&TokenKind::Semicolon)?;

    Ok(Node::Print(args))
}
