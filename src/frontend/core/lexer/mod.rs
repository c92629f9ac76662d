//! Lexer module
//! Split into keyword state, lexical rules and the cursor-driven tokenizer

pub mod literals;
pub mod state;
pub mod tokenizer;
pub mod tokens;
#[cfg(test)]
mod tests;

// Re-export types
pub use state::LexPolicy;
pub use tokenizer::Lexer;
pub use tokens::{quote, BinOp, LexError, Token, TokenKind};

/// Tokenize source code, failing on the first unmatched character
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with_policy(source, LexPolicy::Strict)
}

/// Tokenize source code with an explicit unmatched-input policy
pub fn tokenize_with_policy(
    source: &str,
    policy: LexPolicy,
) -> Result<Vec<Token>, LexError> {
    tracing::debug!("Lexing {} bytes ({:?} policy)", source.len(), policy);

    let mut lexer = Lexer::with_policy(source, policy);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next_token()? {
        log_token(&token);
        tokens.push(token);
    }

    tracing::debug!("Lexing complete: {} tokens", tokens.len());
    Ok(tokens)
}

/// Log a token for debugging
fn log_token(token: &Token) {
    let category = match &token.kind {
        TokenKind::Identifier(_) => "identifier",
        TokenKind::KwFunc
        | TokenKind::KwLet
        | TokenKind::KwVar
        | TokenKind::KwInt
        | TokenKind::KwFloat
        | TokenKind::KwVoid
        | TokenKind::KwBool
        | TokenKind::KwString
        | TokenKind::KwReturn
        | TokenKind::KwPrint
        | TokenKind::KwEnum
        | TokenKind::KwCase
        | TokenKind::KwIf => "keyword",
        TokenKind::IntLiteral(_) | TokenKind::FloatLiteral(_) => "number",
        TokenKind::StringLiteral(_) => "string",
        TokenKind::BoolLiteral(_) => "bool",
        TokenKind::Operator(_) | TokenKind::Eq | TokenKind::Arrow => "operator",
        _ => "punctuation",
    };
    tracing::trace!("{} {} at {}", category, token.kind, token.span.start);
}
