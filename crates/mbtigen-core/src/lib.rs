//! Business logic and port definitions for mbtigen.
//!
//! This crate defines the provider traits that the infrastructure layer
//! implements, plus the pure registry and prompt logic and the services
//! that sequence external calls. It depends only on `mbtigen-types` --
//! never on `mbtigen-infra` or any HTTP/IO crate.

pub mod credential;
pub mod generation;
pub mod llm;
pub mod prompt;
pub mod registry;
pub mod repository;
pub mod service;
