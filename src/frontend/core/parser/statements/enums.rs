//! Enum parsing: definitions and case construction

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::{ParseError, ParserState};

use super::declarations::parse_argument_list;

/// Parse enum definition: `enum Shape { case circle(r: Float); case none; }`
pub fn parse_enum_def(state: &mut ParserState<'_>) -> Result<Node, ParseError> {
    state.expect_or(&TokenKind::KwEnum, ParseError::ExpectedEnum)?;

    let name = state.expect_identifier()?;
    state.expect(&TokenKind::LBrace)?;

    let mut cases: Vec<EnumCaseDefinition> = Vec::new();
    while !state.skip(&TokenKind::RBrace) {
        if state.at_end() {
            return Err(ParseError::expected_char(&TokenKind::RBrace));
        }
        let case = parse_enum_case(state)?;

        if cases.iter().any(|c| c.case_name == case.case_name) {
            return Err(ParseError::DuplicateEnumCase {
                enum_name: name,
                case_name: case.case_name,
            });
        }
        cases.push(case);
    }

    tracing::debug!("Parsed enum '{}' with {} cases", name, cases.len());
    Ok(Node::EnumDefinition(EnumDefinition { name, cases }))
}

/// Parse one case: `case name(a: T, ...);` or `case name;`
fn parse_enum_case(state: &mut ParserState<'_>) -> Result<EnumCaseDefinition, ParseError> {
    state.expect_or(&TokenKind::KwCase, ParseError::ExpectedCase)?;

    let case_name = state.expect_identifier()?;
    let associated_values = if state.at(&TokenKind::LParen) {
        parse_argument_list(state)?
    } else {
        Vec::new()
    };
    state.expect(&TokenKind::Semicolon)?;

    Ok(EnumCaseDefinition {
        case_name,
        associated_values,
    })
}

/// Parse case construction `.name(args)`; the enum is the declared type
pub fn parse_enum_construction(
    state: &mut ParserState<'_>,
    enum_type: &Type,
) -> Result<Node, ParseError> {
    state.expect(&TokenKind::Dot)?;

    let case_name = state.expect_identifier()?;
    let args = if state.at(&TokenKind::LParen) {
        state.parse_expression_list()?
    } else {
        Vec::new()
    };

    Ok(Node::EnumConstruction(EnumConstruction {
        enum_name: enum_type.name().to_string(),
        case_name,
        args,
    }))
}
