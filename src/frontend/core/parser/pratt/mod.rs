//! Expression parsing by precedence climbing
//! Primaries live in `nud`, the binary fold in `led`

pub mod led;
pub mod nud;
pub mod precedence;

pub use precedence::*;

use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::parser::ast::*;
use crate::frontend::core::parser::{ParseError, ParserState};

impl ParserState<'_> {
    /// Parse an expression whose operators all bind at least `min_bp`
    pub fn parse_expression(
        &mut self,
        min_bp: u8,
    ) -> Result<Node, ParseError> {
        let mut lhs = self.parse_primary()?;

        while let Some(op) = self.current_operator() {
            let bp = op.precedence();
            if bp < min_bp {
                break;
            }
            lhs = self.parse_infix(lhs, right_bp(bp))?;
        }

        Ok(lhs)
    }

    /// Binary operator at the cursor, if any
    pub fn current_operator(&self) -> Option<BinOp> {
        match self.current_kind() {
            Some(TokenKind::Operator(op)) => Some(*op),
            _ => None,
        }
    }
}
