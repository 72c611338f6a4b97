//! Secret backends and the chain builder.

pub mod chain;
pub mod env;
pub mod file;
