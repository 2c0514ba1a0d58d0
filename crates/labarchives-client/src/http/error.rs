/*
[INPUT]:  Error sources (transport, remote application errors, XML decoding, signing)
[OUTPUT]: One tagged error type callers can match on
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::{DecodeError, Node};

/// Main error type for the LabArchives client
#[derive(Error, Debug)]
pub enum LabArchivesError {
    /// The call never produced a usable response body (network, timeout, bare non-2xx)
    #[error("transport error: {message}")]
    Transport { message: String, timeout: bool },

    /// The service answered non-2xx with an XML error document
    #[error("API error (status {status}): {}", .body.error_message().unwrap_or("no message"))]
    Application { status: u16, body: Node },

    /// A response body (success or error) was not valid XML
    #[error("failed to decode response: {0}")]
    Decode(#[from] DecodeError),

    /// The call signature could not be computed
    #[error("signature error: {0}")]
    Signature(String),

    /// Credential material is missing or unusable
    #[error("credential error: {0}")]
    Credential(String),

    /// URL parsing failed
    #[error("invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LabArchivesError {
    pub fn is_transport(&self) -> bool {
        matches!(self, LabArchivesError::Transport { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, LabArchivesError::Transport { timeout: true, .. })
    }

    /// Whether repeating the call could succeed; the client itself never retries
    pub fn is_retryable(&self) -> bool {
        matches!(self, LabArchivesError::Transport { .. })
    }

    pub fn is_application(&self) -> bool {
        matches!(self, LabArchivesError::Application { .. })
    }

    /// Decoded error document, for remote application errors
    pub fn application_body(&self) -> Option<&Node> {
        match self {
            LabArchivesError::Application { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Human readable message, taken from the error document when there is one
    pub fn error_message(&self) -> String {
        match self {
            LabArchivesError::Transport { message, .. } => message.clone(),
            LabArchivesError::Application { body, .. } => body
                .error_message()
                .map(str::to_string)
                .unwrap_or_else(|| self.to_string()),
            other => other.to_string(),
        }
    }

    /// Create an application error from status code and decoded body
    pub fn application(status: StatusCode, body: Node) -> Self {
        LabArchivesError::Application {
            status: status.as_u16(),
            body,
        }
    }
}

impl From<reqwest::Error> for LabArchivesError {
    fn from(err: reqwest::Error) -> Self {
        LabArchivesError::Transport {
            timeout: err.is_timeout(),
            // the request URL carries caller parameters and the signature
            message: err.without_url().to_string(),
        }
    }
}

/// Result type alias for LabArchives operations
pub type Result<T> = std::result::Result<T, LabArchivesError>;
