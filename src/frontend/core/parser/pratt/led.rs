//! Infix handling: folds one binary operator into the left operand

use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::{ParseError, ParserState};

impl ParserState<'_> {
    /// Consume the operator at the cursor and parse its right operand
    pub fn parse_infix(
        &mut self,
        lhs: Node,
        rhs_min_bp: u8,
    ) -> Result<Node, ParseError> {
        let op = self.current_operator().ok_or(ParseError::ExpectedOperator)?;
        self.bump();

        let rhs = self.parse_expression(rhs_min_bp)?;
        Ok(Node::binary(lhs, op, rhs))
    }
}
