//! Ephemeral generation results.
//!
//! Nothing here is persisted; each value lives for one request/render cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::personality::PersonalityType;
use crate::theme::Theme;

/// A daily message generated for a (type, theme) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedMessage {
    pub personality: PersonalityType,
    pub theme: Theme,
    /// Provider text exactly as returned, line breaks included.
    pub content: String,
    pub generated_at: DateTime<Utc>,
}

/// A fantasy character generated for a personality type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedCharacter {
    pub personality: PersonalityType,
    pub description: String,
    pub image: ImageOutcome,
    pub generated_at: DateTime<Utc>,
}

/// Result of the image step, which may fail independently of the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ImageOutcome {
    Generated { url: String },
    Failed { reason: String },
    Skipped,
}
