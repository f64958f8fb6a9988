//! Transit feed error types.

/// Errors that can occur when fetching the transit network.
///
/// Split into two families: fetch failures (the feed could not be reached
/// or refused the request) and decode failures (the feed answered with
/// something that is not the expected JSON).
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Transport failure: connect, timeout, or reading the body
    #[error("failed to fetch transit network: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed returned a non-success status
    #[error("transit feed returned {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not UTF-8 JSON of the expected shape
    #[error("failed to decode transit network: {message}")]
    Decode {
        message: String,
        body: Option<String>,
    },
}

impl NetworkError {
    /// The feed could not be reached or did not answer successfully.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, NetworkError::Http(_) | NetworkError::Status { .. })
    }

    /// The feed answered, but with garbage.
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, NetworkError::Decode { .. })
    }

    /// Truncated body the feed sent with a decode failure.
    pub fn body_excerpt(&self) -> Option<&str> {
        match self {
            NetworkError::Decode { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}
