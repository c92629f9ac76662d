//! Core algorithm layer
//! Tokenizer and parser, split into specialized modules

pub mod lexer;
pub mod parser;

// Re-export commonly used items
pub use lexer::tokenize;
pub use parser::parse;
