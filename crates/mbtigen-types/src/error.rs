use thiserror::Error;

use crate::llm::LlmError;

/// Errors from registry lookups over the fixed type and theme tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("unknown personality type: '{0}'")]
    UnknownType(String),

    #[error("unknown theme: '{0}'")]
    UnknownTheme(String),

    #[error("invalid accent color: '{0}'")]
    InvalidColor(String),
}

/// Errors from prompt construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PromptError {
    #[error("character description is empty")]
    EmptyDescription,
}

/// Failure of a single text or image generation call.
///
/// Wraps the upstream [`LlmError`] taxonomy and adds the cases the
/// completion client detects itself.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Upstream(#[from] LlmError),

    #[error("provider returned an empty response")]
    EmptyResponse,

    #[error("invalid prompt: {0}")]
    InvalidPrompt(#[from] PromptError),
}

impl GenerationError {
    /// Whether the upstream rejected the call for rate limiting.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, GenerationError::Upstream(LlmError::RateLimited { .. }))
    }

    /// Whether the upstream rejected the API key.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, GenerationError::Upstream(LlmError::AuthenticationFailed))
    }
}

/// Errors resolving the API credential.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("no usable value for '{key}' in any secret source")]
    MissingCredential { key: String },

    #[error("secret lookup failed: {0}")]
    Lookup(#[from] RepositoryError),
}

/// Errors from secret storage backends (used by trait definitions in mbtigen-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("query error: {0}")]
    Query(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_display() {
        let err = RegistryError::UnknownType("ABCD".to_string());
        assert_eq!(err.to_string(), "unknown personality type: 'ABCD'");
    }

    #[test]
    fn test_generation_error_wraps_upstream() {
        let err: GenerationError = LlmError::AuthenticationFailed.into();
        assert!(err.is_auth_failure());
        assert!(!err.is_rate_limited());
        assert_eq!(err.to_string(), "authentication failed");
    }

    #[test]
    fn test_generation_error_from_prompt_error() {
        let err: GenerationError = PromptError::EmptyDescription.into();
        assert!(matches!(
            err,
            GenerationError::InvalidPrompt(PromptError::EmptyDescription)
        ));
    }

    #[test]
    fn test_missing_credential_names_key() {
        let err = CredentialError::MissingCredential {
            key: "OPENAI_API_KEY".to_string(),
        };
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
