//! Shared domain types for mbtigen.
//!
//! This crate contains the core domain types used across the workspace:
//! personality types and their display metadata, themes, generation
//! results, LLM request/response shapes, configuration, and error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod generation;
pub mod llm;
pub mod personality;
pub mod secret;
pub mod theme;
