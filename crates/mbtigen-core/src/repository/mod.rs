//! Storage port definitions implemented by mbtigen-infra.

pub mod secret;
