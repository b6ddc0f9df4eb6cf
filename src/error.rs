// ============================================================================
// ERRORS - Failure taxonomy for backend calls
// ============================================================================

use thiserror::Error;

pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    /// Non-OK status without a usable `message` body
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The backend answered with `success: false`
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Rejected { status, .. } => Some(*status),
            Self::Network(_) | Self::Parse(_) => None,
        }
    }

    /// Text suitable for a toast. Only backend-supplied messages are shown verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => message.clone(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }

    /// Backend message for rejections, `fallback` when the rejection carried none.
    /// Transport and parse failures always read as the generic text.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => message.clone(),
            Self::Rejected { .. } => fallback.to_string(),
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
