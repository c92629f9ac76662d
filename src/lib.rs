//! Teddy Programming Language
//!
//! A small statically-typed teaching language compiled to C or C++ source.
//!
//! # Example
//!
//! ```teddy
//! func add(a: Int, b: Int) -> Int {
//!     return a + b;
//! }
//! ```
//!
//! The pipeline is `strip_comments` → [`tokenize`] → [`parse`] → [`generate`],
//! wrapped by [`compile`] and [`frontend::Compiler`].

#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod middle;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::core::lexer::{tokenize, LexError, LexPolicy, Token, TokenKind};
pub use frontend::core::parser::{parse, Node, ParseError};
pub use frontend::loader::read_source;
pub use frontend::preprocess::strip_comments;
pub use frontend::{CompileConfig, CompileError, Compiler, ConfigError};
pub use middle::codegen::{generate, CodegenError, Target};

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Language version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Language name
pub const NAME: &str = "Teddy";

/// Compile source code with default settings for `target`
///
/// # Example
///
/// ```
/// use teddy::{compile, Target};
///
/// let code = compile("func one() -> Int { return 1; }", Target::C).unwrap();
/// assert!(code.contains("int one(void)"));
/// ```
pub fn compile(
    source: &str,
    target: Target,
) -> ::std::result::Result<String, CompileError> {
    let config = CompileConfig::new()
        .with_target(target)
        .with_emit_header(false);
    Compiler::with_config(config).compile(source)
}

/// Compile a source file to a string
pub fn compile_file(
    compiler: &Compiler,
    path: &Path,
) -> Result<String> {
    debug!("Compiling file {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let code = compiler
        .compile(&source)
        .with_context(|| format!("Failed to compile: {}", path.display()))?;
    Ok(code)
}

/// Default output path: the source path with the target's extension
pub fn output_path_for(
    source_path: &Path,
    target: Target,
) -> PathBuf {
    source_path.with_extension(target.extension())
}

/// Compile a source file and write the result
///
/// Writes to `output_path` when given, else next to the source file.
/// Returns the path written.
pub fn build_file(
    compiler: &Compiler,
    source_path: &Path,
    output_path: Option<&Path>,
) -> Result<PathBuf> {
    let code = compile_file(compiler, source_path)?;

    let output_path = match output_path {
        Some(path) => path.to_path_buf(),
        None => output_path_for(source_path, compiler.target()),
    };
    fs::write(&output_path, code)
        .with_context(|| format!("Failed to write output: {}", output_path.display()))?;

    debug!("Wrote {}", output_path.display());
    Ok(output_path)
}
