//! Code generation
//!
//! This module handles the transformation from AST to C or C++ source.

pub mod codegen;

pub use codegen::{generate, CodegenContext, CodegenError, Target};
