//! Parser module
//!
//! Recursive-descent statement parser with a precedence-climbing expression
//! parser. Parsing is fail-fast: the first violated expectation is returned
//! and no partial AST is produced.

pub mod ast;
pub mod parser_state;
pub mod pratt;
pub mod statements;
#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use ast::*;
pub use parser_state::{ParseError, ParserState};
pub use pratt::precedence::*;
pub use statements::StatementParser;

use crate::frontend::core::lexer::tokens::*;

/// Parse tokens into a program: an ordered list of top-level statements
///
/// # Example
/// ```teddy
/// func add(a: Int, b: Int) -> Int {
///     return a + b;
/// }
/// ```
pub fn parse(tokens: &[Token]) -> Result<Vec<Node>, ParseError> {
    let mut state = ParserState::new(tokens);
    let mut program = Vec::new();

    while !state.at_end() {
        let node = state.parse_statement()?;
        tracing::trace!("Parsed top-level {}", node.kind_name());
        program.push(node);
    }

    tracing::debug!("Parsing complete: {} top-level statements", program.len());
    Ok(program)
}

/// Parse a single expression; every token must be consumed
pub fn parse_expression(tokens: &[Token]) -> Result<Node, ParseError> {
    let mut state = ParserState::new(tokens);
    let expr = state.parse_expression(BP_LOWEST)?;

    if !state.at_end() {
        return Err(ParseError::ExpectedOperator);
    }
    Ok(expr)
}
