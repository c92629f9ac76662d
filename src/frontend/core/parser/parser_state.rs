//! Parser state and error handling

use crate::frontend::core::lexer::tokens::*;

/// Parse error types
///
/// Parsing stops at the first error; no recovery is attempted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A specific punctuation or keyword was required
    #[error("Expected '{0}'")]
    ExpectedCharacter(String),
    #[error("Expected identifier")]
    ExpectedIdentifier,
    #[error("Expected number")]
    ExpectedNumber,
    #[error("Expected string literal")]
    ExpectedString,
    #[error("Expected boolean literal")]
    ExpectedBool,
    #[error("Expected expression")]
    ExpectedExpression,
    #[error("Expected 'print'")]
    ExpectedPrint,
    #[error("Expected operator")]
    ExpectedOperator,
    #[error("Expected type")]
    ExpectedType,
    #[error("Expected 'return'")]
    ExpectedReturn,
    #[error("Expected variable declaration")]
    ExpectedVariableDeclaration,
    #[error("Expected 'enum'")]
    ExpectedEnum,
    #[error("Expected 'case'")]
    ExpectedCase,
    #[error("Duplicate case '{case_name}' in enum '{enum_name}'")]
    DuplicateEnumCase {
        enum_name: String,
        case_name: String,
    },
}

impl ParseError {
    pub fn expected_char(kind: &TokenKind) -> Self {
        ParseError::ExpectedCharacter(kind.lexeme())
    }
}

/// Cursor over a token slice
pub struct ParserState<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> ParserState<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub fn current(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_kind(&self) -> Option<&'a TokenKind> {
        self.current().map(|t| &t.kind)
    }

    pub fn bump(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    pub fn at(
        &self,
        kind: &TokenKind,
    ) -> bool {
        self.current_kind() == Some(kind)
    }

    pub fn skip(
        &mut self,
        kind: &TokenKind,
    ) -> bool {
        if self.at(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `kind` or fail with `ExpectedCharacter`
    pub fn expect(
        &mut self,
        kind: &TokenKind,
    ) -> Result<(), ParseError> {
        self.expect_or(kind, ParseError::expected_char(kind))
    }

    /// Consume `kind` or fail with the given error
    pub fn expect_or(
        &mut self,
        kind: &TokenKind,
        error: ParseError,
    ) -> Result<(), ParseError> {
        if self.skip(kind) {
            Ok(())
        } else {
            Err(error)
        }
    }

    pub fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.current_kind() {
            Some(TokenKind::Identifier(name)) => {
                self.bump();
                Ok(name.clone())
            }
            _ => Err(ParseError::ExpectedIdentifier),
        }
    }
}
