//! Tokenizer implementation
//! Main lexer structure and token generation logic

use super::literals::{
    is_whitespace, match_multi_char_operator, match_number, match_single_char_symbol,
    match_string, match_word, RuleMatch,
};
use super::state::{LexPolicy, LexerState};
use crate::frontend::core::lexer::tokens::*;
use crate::util::span::{Position, Span};

/// Main lexer structure
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
    state: LexerState,
}

impl<'a> Lexer<'a> {
    /// Create a lexer with an explicit unmatched-input policy
    pub fn with_policy(
        source: &'a str,
        policy: LexPolicy,
    ) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
            state: LexerState::new(policy),
        }
    }

    /// Get current position
    pub fn position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.offset)
    }

    /// Input not yet consumed
    fn rest(&self) -> &'a str {
        &self.source[self.offset..]
    }

    /// Advance the cursor by `len` bytes, keeping line and column in step
    fn advance_by(
        &mut self,
        len: usize,
    ) {
        let consumed = &self.source[self.offset..self.offset + len];
        for c in consumed.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += len;
    }

    fn skip_whitespace(&mut self) {
        let len = self
            .rest()
            .find(|c: char| !is_whitespace(c))
            .unwrap_or(self.rest().len());
        self.advance_by(len);
    }

    /// Try every rule in priority order at the cursor
    fn match_rule(&self) -> Result<Option<RuleMatch>, LexError> {
        let rest = self.rest();
        let at = self.position();

        if let Some(m) = match_word(&self.state, rest) {
            return Ok(Some(m));
        }
        if let Some(m) = match_multi_char_operator(rest) {
            return Ok(Some(m));
        }
        if let Some(m) = match_single_char_symbol(rest) {
            return Ok(Some(m));
        }
        if let Some(m) = match_number(rest, at)? {
            return Ok(Some(m));
        }
        match_string(rest, at)
    }

    /// Generate next token, `Ok(None)` at end of input
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        loop {
            self.skip_whitespace();

            let Some(c) = self.rest().chars().next() else {
                return Ok(None);
            };

            let start = self.position();
            match self.match_rule()? {
                Some((kind, len)) => {
                    self.advance_by(len);
                    return Ok(Some(Token {
                        kind,
                        span: Span::new(start, self.position()),
                    }));
                }
                None => match self.state.policy() {
                    LexPolicy::Strict => {
                        return Err(LexError::UnexpectedChar {
                            ch: c,
                            position: start,
                        });
                    }
                    LexPolicy::Skip => {
                        tracing::warn!("Skipping unexpected character '{}' at {}", c, start);
                        self.advance_by(c.len_utf8());
                    }
                },
            }
        }
    }
}
