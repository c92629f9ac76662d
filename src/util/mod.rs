//! Utility types and functions

pub mod banner;
pub mod logger;
pub mod span;
