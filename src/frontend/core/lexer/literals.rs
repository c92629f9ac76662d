//! Lexical rules for symbols, words, numbers and strings
//!
//! Every rule looks at the remaining input anchored at the cursor and, on a
//! match, returns the token kind together with the number of bytes it spans.
//! The tokenizer advances by exactly that length.

use crate::frontend::core::lexer::state::LexerState;
use crate::frontend::core::lexer::tokens::*;
use crate::util::span::Position;

/// A matched token kind and its raw length in bytes
pub type RuleMatch = (TokenKind, usize);

#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Keywords, booleans and identifiers
///
/// The whole word is taken before the keyword table is consulted, so
/// `letter` is an identifier rather than `let` followed by `ter`.
pub fn match_word(
    state: &LexerState,
    rest: &str,
) -> Option<RuleMatch> {
    let first = rest.chars().next()?;
    if !is_identifier_start(first) {
        return None;
    }
    let len = rest
        .find(|c: char| !is_identifier_char(c))
        .unwrap_or(rest.len());
    let word = &rest[..len];
    let kind = state
        .keyword_from_str(word)
        .unwrap_or_else(|| TokenKind::Identifier(word.to_string()));
    Some((kind, len))
}

/// `->`
pub fn match_multi_char_operator(rest: &str) -> Option<RuleMatch> {
    if rest.starts_with("->") {
        Some((TokenKind::Arrow, 2))
    } else {
        None
    }
}

/// `= + - * / : ; ( ) { } , .`
pub fn match_single_char_symbol(rest: &str) -> Option<RuleMatch> {
    let c = rest.chars().next()?;
    if let Some(op) = BinOp::from_char(c) {
        return Some((TokenKind::Operator(op), 1));
    }
    let kind = match c {
        '=' => TokenKind::Eq,
        ':' => TokenKind::Colon,
        ';' => TokenKind::Semicolon,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        _ => return None,
    };
    Some((kind, 1))
}

/// Float (`digits.digits`) or integer (`digits`)
///
/// A trailing dot without digits is not part of the number: `5.` is an
/// integer followed by a period.
pub fn match_number(
    rest: &str,
    at: Position,
) -> Result<Option<RuleMatch>, LexError> {
    let int_len = rest.find(|c: char| !is_digit(c)).unwrap_or(rest.len());
    if int_len == 0 {
        return Ok(None);
    }

    let after = &rest[int_len..];
    if let Some(fraction) = after.strip_prefix('.') {
        let frac_len = fraction
            .find(|c: char| !is_digit(c))
            .unwrap_or(fraction.len());
        if frac_len > 0 {
            let len = int_len + 1 + frac_len;
            let text = &rest[..len];
            let value = text
                .parse::<f64>()
                .map_err(|_| LexError::InvalidNumber {
                    text: text.to_string(),
                    position: at,
                })?;
            return Ok(Some((TokenKind::FloatLiteral(value), len)));
        }
    }

    let text = &rest[..int_len];
    let value = text.parse::<i64>().map_err(|_| LexError::InvalidNumber {
        text: text.to_string(),
        position: at,
    })?;
    Ok(Some((TokenKind::IntLiteral(value), int_len)))
}

/// Double-quoted string on a single line
///
/// Supported escapes: `\"`, `\\`, `\n`, `\t`.
pub fn match_string(
    rest: &str,
    at: Position,
) -> Result<Option<RuleMatch>, LexError> {
    if !rest.starts_with('"') {
        return Ok(None);
    }

    let mut value = String::new();
    let mut chars = rest.char_indices().skip(1);
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Ok(Some((TokenKind::StringLiteral(value), i + 1))),
            '\n' => break,
            '\\' => match chars.next() {
                Some((_, '"')) => value.push('"'),
                Some((_, '\\')) => value.push('\\'),
                Some((_, 'n')) => value.push('\n'),
                Some((_, 't')) => value.push('\t'),
                Some((j, other)) if other != '\n' => {
                    let column = at.column + rest[..j].chars().count() - 1;
                    return Err(LexError::InvalidEscape {
                        ch: other,
                        position: Position::with_offset(at.line, column, at.offset + j - 1),
                    });
                }
                _ => break,
            },
            c => value.push(c),
        }
    }

    Err(LexError::UnterminatedString { position: at })
}
