//! Domain-level error types.

use thiserror::Error;

/// Failures talking to the upstream movies/auth API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Upstream response could not be decoded: {0}")]
    Decode(String),
}

impl ApiError {
    /// Status code returned by the upstream, when it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing credentials")]
    MissingCredentials,

    #[error("Malformed credentials: {0}")]
    MalformedCredentials(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Upstream(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_only_for_status_errors() {
        let err = ApiError::Status {
            status: 404,
            body: "nope".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(ApiError::Transport("refused".to_string()).status(), None);
    }
}
