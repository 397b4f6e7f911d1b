//! Error types for upstream Census calls.

use census_core::CensusError;

/// Errors that can occur when querying the Census API.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The request never completed or came back with a non-success status.
    ///
    /// `body` holds the raw response text when a response exists, otherwise
    /// the client error text.
    #[error("census request failed{}: {body}", status_suffix(.status))]
    Transport { status: Option<u16>, body: String },

    /// The request succeeded but the body was blank.
    #[error("census returned an empty body")]
    EmptyBody,

    /// The body could not be decoded as a Census table.
    #[error("malformed census payload: {0}")]
    Malformed(#[from] CensusError),

    /// The client could not be built from its configuration.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl UpstreamError {
    /// Creates a transport error without an HTTP status.
    pub fn transport(body: impl Into<String>) -> Self {
        Self::Transport {
            status: None,
            body: body.into(),
        }
    }

    /// Short, stable label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "transport",
            Self::EmptyBody => "empty_body",
            Self::Malformed(e) if e.is_syntax_error() => "invalid_json",
            Self::Malformed(_) => "malformed",
            Self::InvalidConfig(_) => "config",
        }
    }

    /// The text handed back to HTTP callers as `endpointError`.
    pub fn endpoint_error(&self) -> String {
        match self {
            Self::Transport { body, .. } => body.clone(),
            Self::EmptyBody => String::new(),
            Self::Malformed(e) => e.to_string(),
            Self::InvalidConfig(msg) => msg.clone(),
        }
    }

    /// Returns true if this is a connection or status failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" with status {}", code))
        .unwrap_or_default()
}
