//! Lexer state management
//! Handles keyword recognition and the unmatched-input policy

use crate::frontend::core::lexer::tokens::TokenKind;
use serde::{Deserialize, Serialize};

/// What the lexer does with input no rule matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LexPolicy {
    /// Stop with `LexError::UnexpectedChar`
    #[default]
    Strict,
    /// Drop the character, log a warning and keep scanning
    Skip,
}

/// Lexer state management
pub struct LexerState {
    policy: LexPolicy,
}

impl LexerState {
    /// Create new lexer state
    pub fn new(policy: LexPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> LexPolicy {
        self.policy
    }

    /// Convert a whole word to its keyword or boolean literal token
    pub fn keyword_from_str(
        &self,
        s: &str,
    ) -> Option<TokenKind> {
        match s {
            // Declarations
            "func" => Some(TokenKind::KwFunc),
            "let" => Some(TokenKind::KwLet),
            "var" => Some(TokenKind::KwVar),
            "enum" => Some(TokenKind::KwEnum),
            "case" => Some(TokenKind::KwCase),

            // Built-in types
            "Int" => Some(TokenKind::KwInt),
            "Float" => Some(TokenKind::KwFloat),
            "Void" => Some(TokenKind::KwVoid),
            "Bool" => Some(TokenKind::KwBool),
            "String" => Some(TokenKind::KwString),

            // Statements
            "return" => Some(TokenKind::KwReturn),
            "print" => Some(TokenKind::KwPrint),
            "if" => Some(TokenKind::KwIf),

            // Boolean literals
            "true" => Some(TokenKind::BoolLiteral(true)),
            "false" => Some(TokenKind::BoolLiteral(false)),

            _ => None,
        }
    }
}

impl Default for LexerState {
    fn default() -> Self {
        Self::new(LexPolicy::default())
    }
}
