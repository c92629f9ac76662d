//! Token types

use crate::frontend::core::parser::pratt::precedence::{BP_FACTOR, BP_TERM};
use crate::util::span::{Position, Span};
use std::fmt;

/// Lexer error
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}' at {position}")]
    UnexpectedChar { ch: char, position: Position },
    #[error("Unterminated string starting at {position}")]
    UnterminatedString { position: Position },
    #[error("Invalid escape sequence '\\{ch}' at {position}")]
    InvalidEscape { ch: char, position: Position },
    #[error("Invalid number literal '{text}' at {position}")]
    InvalidNumber { text: String, position: Position },
}

impl LexError {
    /// Where in the source the error was detected
    pub fn position(&self) -> Position {
        match self {
            LexError::UnexpectedChar { position, .. }
            | LexError::UnterminatedString { position }
            | LexError::InvalidEscape { position, .. }
            | LexError::InvalidNumber { position, .. } => *position,
        }
    }
}

/// Binary operator carried by an operator token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// Operator symbol as written in source and in C
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Binding power; higher binds tighter
    pub fn precedence(self) -> u8 {
        match self {
            BinOp::Add | BinOp::Sub => BP_TERM,
            BinOp::Mul | BinOp::Div => BP_FACTOR,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(BinOp::Add),
            '-' => Some(BinOp::Sub),
            '*' => Some(BinOp::Mul),
            '/' => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Token kind
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords
    KwFunc,
    KwLet,
    KwVar,
    KwInt,
    KwFloat,
    KwVoid,
    KwBool,
    KwString,
    KwReturn,
    KwPrint,
    KwEnum,
    KwCase,
    KwIf,

    // Identifiers
    Identifier(String),

    // Literals
    IntLiteral(i64),
    FloatLiteral(f64),
    BoolLiteral(bool),
    StringLiteral(String),

    // Operators
    Operator(BinOp),
    Eq,
    Arrow,

    // Delimiters
    Colon,
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Dot,
}

impl TokenKind {
    /// Source text that lexes back to this token kind
    pub fn lexeme(&self) -> String {
        match self {
            TokenKind::KwFunc => "func".to_string(),
            TokenKind::KwLet => "let".to_string(),
            TokenKind::KwVar => "var".to_string(),
            TokenKind::KwInt => "Int".to_string(),
            TokenKind::KwFloat => "Float".to_string(),
            TokenKind::KwVoid => "Void".to_string(),
            TokenKind::KwBool => "Bool".to_string(),
            TokenKind::KwString => "String".to_string(),
            TokenKind::KwReturn => "return".to_string(),
            TokenKind::KwPrint => "print".to_string(),
            TokenKind::KwEnum => "enum".to_string(),
            TokenKind::KwCase => "case".to_string(),
            TokenKind::KwIf => "if".to_string(),
            TokenKind::Identifier(name) => name.clone(),
            TokenKind::IntLiteral(n) => n.to_string(),
            // `{:?}` keeps the fractional part: 5.0 stays "5.0"
            TokenKind::FloatLiteral(f) => format!("{:?}", f),
            TokenKind::BoolLiteral(b) => b.to_string(),
            TokenKind::StringLiteral(s) => quote(s),
            TokenKind::Operator(op) => op.symbol().to_string(),
            TokenKind::Eq => "=".to_string(),
            TokenKind::Arrow => "->".to_string(),
            TokenKind::Colon => ":".to_string(),
            TokenKind::Semicolon => ";".to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
            TokenKind::LBrace => "{".to_string(),
            TokenKind::RBrace => "}".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Dot => ".".to_string(),
        }
    }

    /// Whether this kind names one of the built-in types
    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::KwInt
                | TokenKind::KwFloat
                | TokenKind::KwVoid
                | TokenKind::KwBool
                | TokenKind::KwString
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.lexeme())
    }
}

/// Wrap string contents in double quotes, escaping what the lexer unescapes
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Token
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Number of source bytes this token was read from
    pub fn raw_len(&self) -> usize {
        if self.span.is_dummy() {
            self.kind.lexeme().len()
        } else {
            self.span.len()
        }
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::dummy(),
        }
    }
}
