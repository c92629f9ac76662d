//! Frontend compilation pipeline
//!
//! This module contains the comment stripper, the tokenizer and the parser,
//! and drives them together with the code generator.

use crate::middle::codegen::{self, CodegenError, Target};
use crate::util::banner;
use thiserror::Error;
use tracing::debug;

pub mod config;
pub mod core;
pub mod loader;
pub mod preprocess;

pub use config::{CompileConfig, ConfigError};
pub use self::core::lexer::{LexError, LexPolicy};
pub use self::core::parser::ParseError;

/// Compiler context
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    config: CompileConfig,
}

impl Compiler {
    /// Create a new compiler with default configuration
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_config(config: CompileConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// Compile source code to the configured target dialect
    ///
    /// Either the whole translation unit is produced or the first error is
    /// returned; there is no partial output.
    pub fn compile(
        &self,
        source: &str,
    ) -> Result<String, CompileError> {
        debug!("Compiling source code ({} bytes)", source.len());

        let source = if self.config.strip_comments {
            preprocess::strip_comments(source)
        } else {
            source.to_string()
        };

        // Lexical analysis
        let tokens =
            crate::frontend::core::lexer::tokenize_with_policy(&source, self.config.lex_policy)?;
        debug!("Tokenized into {} tokens", tokens.len());

        // Parsing
        let ast = crate::frontend::core::parser::parse(&tokens)?;
        debug!("Parsing successful, got {} statements", ast.len());

        // Code generation
        let code = codegen::generate(&ast, self.config.target)?;

        if self.config.emit_header {
            let header = banner::comment_header(
                &format!("Generated by {} {}", crate::NAME, crate::VERSION),
                banner::DEFAULT_WIDTH,
            );
            Ok(format!("{}{}", header, code))
        } else {
            Ok(code)
        }
    }

    pub fn target(&self) -> Target {
        self.config.target
    }
}

/// Compilation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    #[error("Lexical error: {0}")]
    Lex(#[from] LexError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Codegen error: {0}")]
    Codegen(#[from] CodegenError),
}
