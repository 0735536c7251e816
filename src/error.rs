use thiserror::Error;

/// Failures surfaced by the transfer layer and the session store.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Credentials rejected by the authentication endpoint.
    #[error("Authentication failed (status {status})")]
    Auth { status: u16 },

    /// Non-success status on a read.
    #[error("{message}")]
    Fetch { message: String },

    /// Non-success status on a write, or an error encoded in a success body.
    #[error("{message}")]
    Write { message: String },

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl ApiError {
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch { message: message.into() }
    }

    pub fn write<S: Into<String>>(message: S) -> Self {
        Self::Write { message: message.into() }
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_and_write_display_their_message_verbatim() {
        assert_eq!(ApiError::fetch("Failed to fetch question 3").to_string(), "Failed to fetch question 3");
        assert_eq!(ApiError::write("Duplicate questionId").to_string(), "Duplicate questionId");
    }

    #[test]
    fn io_errors_become_storage_errors() {
        let err: ApiError = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, ApiError::Storage(ref m) if m.contains("denied")));
    }

    #[test]
    fn auth_error_mentions_status() {
        assert_eq!(ApiError::Auth { status: 401 }.to_string(), "Authentication failed (status 401)");
    }
}
