//! REST API endpoint handlers.

pub mod character;
pub mod message;
pub mod registry;

use std::time::Instant;

/// Request id plus start time, captured on handler entry.
pub(crate) fn begin() -> (String, Instant) {
    (uuid::Uuid::now_v7().to_string(), Instant::now())
}
