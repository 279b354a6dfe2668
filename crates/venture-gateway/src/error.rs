//! Gateway error types.

use thiserror::Error;

/// How a failed action is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The credential is missing; nothing was sent.
    Configuration,
    /// The request failed on the network or the API answered with an error.
    Transport,
    /// The reply could not be decoded into the expected record shape.
    Format,
}

/// Errors that can occur while talking to the completion API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// No usable credential was configured.
    #[error("OpenRouter API key not found; set OPENROUTER_API_KEY")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status or an error object.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code, or the error code from the body.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The reply did not match the expected shape.
    #[error("failed to parse AI response: {reason}")]
    Format {
        /// Decoder message naming the missing or mistyped field.
        reason: String,
        /// Leading excerpt of the raw reply, for display.
        raw: String,
    },
}

impl GatewayError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotConfigured => ErrorKind::Configuration,
            Self::Http(_) | Self::Api { .. } => ErrorKind::Transport,
            Self::Format { .. } => ErrorKind::Format,
        }
    }

    /// HTTP status attached to a transport failure, when one is known.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(error) => error.status().map(|status| status.as_u16()),
            Self::NotConfigured | Self::Format { .. } => None,
        }
    }

    /// Raw reply excerpt for format errors.
    #[must_use]
    pub fn raw_excerpt(&self) -> Option<&str> {
        match self {
            Self::Format { raw, .. } => Some(raw.as_str()),
            _ => None,
        }
    }
}
