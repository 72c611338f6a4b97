//! LLM provider abstractions for mbtigen.
//!
//! - `LlmProvider` / `ImageProvider`: RPITIT traits for concrete backends
//! - `BoxLlmProvider` / `BoxImageProvider`: object-safe wrappers for dynamic dispatch
//! - `CompletionClient`: the request/response adapter the services call

pub mod box_provider;
pub mod client;
pub mod provider;

#[cfg(test)]
pub(crate) mod mock;
