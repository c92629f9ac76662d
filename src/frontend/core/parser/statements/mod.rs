//! Statement parsing modules
//! Contains specialized modules for different statement types

pub mod control_flow;
pub mod declarations;
pub mod enums;

pub use control_flow::*;
pub use declarations::*;
pub use enums::*;

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::{ParseError, ParserState};

/// Statement parsing, dispatched on the leading token
pub trait StatementParser {
    fn parse_statement(&mut self) -> Result<Node, ParseError>;
}

impl StatementParser for ParserState<'_> {
    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        match self.current_kind() {
            Some(TokenKind::KwFunc) => declarations::parse_function_def(self),
            Some(TokenKind::KwIf) => control_flow::parse_if_stmt(self),
            Some(TokenKind::KwEnum) => enums::parse_enum_def(self),
            Some(TokenKind::KwLet) | Some(TokenKind::KwVar) => declarations::parse_var_decl(self),
            Some(TokenKind::KwReturn) => control_flow::parse_return_stmt(self),
            Some(TokenKind::KwPrint) => control_flow::parse_print_stmt(self),
            _ => declarations::parse_expr_stmt(self),
        }
    }
}
