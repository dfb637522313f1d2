//! Error taxonomy shared by configuration loading and the chat cycle.
//!
//! Every failure the user can see maps to exactly one variant. Configuration
//! variants are fatal and stop the program before the chat starts; the rest
//! are reported inline and leave the conversation usable.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(
        "Configuration file not found. Please create a config.json file with the OpenAI API key.\n\
         Expected location: {}",
        .path.display()
    )]
    ConfigMissing { path: PathBuf },

    #[error(
        "Error decoding config.json. Please ensure it contains valid JSON.\n\
         {}: {reason}",
        .path.display()
    )]
    ConfigMalformed { path: PathBuf, reason: String },

    #[error(
        "Configuration Error: Missing OPENAI_API_KEY in configuration file.\n\
         File: {}",
        .path.display()
    )]
    ConfigIncomplete { path: PathBuf },

    #[error("Please enter a valid message.")]
    ValidationEmptyInput,

    #[error("You have exceeded your current quota. Please check your OpenAI account usage.")]
    QuotaExceeded,

    #[error("Authentication error: Invalid API key. Please check your configuration.")]
    AuthenticationFailed,

    #[error("OpenAI API Error: {0}")]
    EndpointError(String),

    #[error("An unexpected error occurred: {0}")]
    UnexpectedError(String),
}

impl ChatError {
    pub fn endpoint(msg: impl Into<String>) -> Self {
        Self::EndpointError(msg.into())
    }

    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::UnexpectedError(msg.into())
    }

    /// Returns `true` for errors that must halt the program before the chat starts.
    pub const fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ConfigMissing { .. } | Self::ConfigMalformed { .. } | Self::ConfigIncomplete { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_fatal() {
        let path = PathBuf::from("/tmp/config.json");
        assert!(ChatError::ConfigMissing { path: path.clone() }.is_fatal());
        assert!(
            ChatError::ConfigMalformed {
                path: path.clone(),
                reason: "expected value".to_string(),
            }
            .is_fatal()
        );
        assert!(ChatError::ConfigIncomplete { path }.is_fatal());
    }

    #[test]
    fn test_turn_errors_are_recoverable() {
        assert!(!ChatError::ValidationEmptyInput.is_fatal());
        assert!(!ChatError::QuotaExceeded.is_fatal());
        assert!(!ChatError::AuthenticationFailed.is_fatal());
        assert!(!ChatError::endpoint("bad request").is_fatal());
        assert!(!ChatError::unexpected("boom").is_fatal());
    }

    #[test]
    fn test_quota_message_text() {
        let message = ChatError::QuotaExceeded.to_string();
        assert!(message.contains("exceeded your current quota"));
    }

    #[test]
    fn test_endpoint_and_unexpected_pass_text_through() {
        assert_eq!(
            ChatError::endpoint("model not found").to_string(),
            "OpenAI API Error: model not found"
        );
        assert_eq!(
            ChatError::unexpected("connection refused").to_string(),
            "An unexpected error occurred: connection refused"
        );
    }

    #[test]
    fn test_config_missing_mentions_path() {
        let err = ChatError::ConfigMissing {
            path: PathBuf::from("/etc/gpt-chat/config.json"),
        };
        let message = err.to_string();
        assert!(message.starts_with("Configuration file not found."));
        assert!(message.contains("/etc/gpt-chat/config.json"));
    }
}
