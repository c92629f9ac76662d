//! Primary expressions: literals, identifiers, calls and parentheses

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::{ParseError, ParserState, BP_LOWEST};

impl ParserState<'_> {
    pub fn parse_primary(&mut self) -> Result<Node, ParseError> {
        match self.current_kind() {
            Some(TokenKind::Identifier(_)) => self.parse_identifier(),
            Some(TokenKind::IntLiteral(_)) | Some(TokenKind::FloatLiteral(_)) => {
                self.parse_number()
            }
            Some(TokenKind::StringLiteral(_)) => self.parse_string(),
            Some(TokenKind::BoolLiteral(_)) => self.parse_bool(),
            Some(TokenKind::LParen) => self.parse_parens(),
            _ => Err(ParseError::ExpectedExpression),
        }
    }

    /// `name` or `name(args)`
    fn parse_identifier(&mut self) -> Result<Node, ParseError> {
        let identifier = self.expect_identifier()?;

        if self.at(&TokenKind::LParen) {
            let args = self.parse_expression_list()?;
            return Ok(Node::Call { identifier, args });
        }

        Ok(Node::FieldAccess(identifier))
    }

    fn parse_number(&mut self) -> Result<Node, ParseError> {
        let node = match self.current_kind() {
            Some(TokenKind::IntLiteral(value)) => Node::IntegerLiteral(*value),
            Some(TokenKind::FloatLiteral(value)) => Node::FloatLiteral(*value),
            _ => return Err(ParseError::ExpectedNumber),
        };
        self.bump();
        Ok(node)
    }

    fn parse_string(&mut self) -> Result<Node, ParseError> {
        match self.current_kind() {
            Some(TokenKind::StringLiteral(value)) => {
                self.bump();
                Ok(Node::StringLiteral(value.clone()))
            }
            _ => Err(ParseError::ExpectedString),
        }
    }

    fn parse_bool(&mut self) -> Result<Node, ParseError> {
        match self.current_kind() {
            Some(TokenKind::BoolLiteral(value)) => {
                self.bump();
                Ok(Node::BoolLiteral(*value))
            }
            _ => Err(ParseError::ExpectedBool),
        }
    }

    /// Parenthesized sub-expression; grouping leaves no node of its own
    fn parse_parens(&mut self) -> Result<Node, ParseError> {
        self.expect(&TokenKind::LParen)?;
        let expr = self.parse_expression(BP_LOWEST)?;
        self.expect(&TokenKind::RParen)?;
        Ok(expr)
    }

    /// `( [expr {, expr}] )`
    pub fn parse_expression_list(&mut self) -> Result<Vec<Node>, ParseError> {
        self.expect(&TokenKind::LParen)?;

        let mut exprs = Vec::new();
        if self.skip(&TokenKind::RParen) {
            return Ok(exprs);
        }

        loop {
            exprs.push(self.parse_expression(BP_LOWEST)?);
            if !self.skip(&TokenKind::Comma) {
                break;
            }
        }

        self.expect(&TokenKind::RParen)?;
        Ok(exprs)
    }
}
