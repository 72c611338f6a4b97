//! Generation services for the two request shapes.
//!
//! - `MessageService`: one text call per (type, theme)
//! - `CharacterService`: description call, then an image call that may fail on its own

pub mod character;
pub mod message;
