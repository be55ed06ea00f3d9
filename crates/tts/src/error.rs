use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Errors raised while building engines or synthesizing speech
#[derive(Debug, Error)]
pub enum TtsError {
    /// Engine could not be built from its configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// No engine with the requested name is configured
    #[error("TTS engine '{0}' not found")]
    ProviderNotFound(String),

    /// Watson rejected the request (unknown voice, bad format, empty text)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// API key rejected
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Any other non-success status from the provider
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Internal error
    /// If Some(message), it came from a provider and can be shown
    /// If None, it's an internal error and should not leak details
    #[error("Internal error")]
    InternalError(Option<String>),
}

impl TtsError {
    /// Message that is safe to show to the person who asked for speech
    pub fn client_message(&self) -> String {
        match self {
            Self::InternalError(Some(provider_msg)) => provider_msg.clone(),
            Self::InternalError(None) => "Internal error".to_string(),
            Self::ConfigError(_) => "TTS engine is misconfigured".to_string(),
            _ => self.to_string(),
        }
    }

    /// Build the error for a non-success provider response
    pub(crate) fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 404 => Self::InvalidRequest(message),
            401 | 403 => Self::AuthenticationFailed(message),
            _ => Self::ProviderApiError { status, message },
        }
    }
}
