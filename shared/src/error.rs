use thiserror::Error;

/// Failure of a single request against the articles service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network failure: {0}")]
    Network(String),
    #[error("not authorized")]
    Unauthorized,
    #[error("server responded {status}: {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            _ => ApiError::Server { status, message: message.unwrap_or_default() },
        }
    }

    /// The token is missing, malformed or expired.
    pub fn is_auth_expiry(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_401_is_auth_expiry() {
        let err = ApiError::from_status(401, Some("Token invalid".to_string()));
        assert_eq!(err, ApiError::Unauthorized);
        assert!(err.is_auth_expiry());
    }

    #[test]
    fn other_statuses_keep_server_message() {
        let err = ApiError::from_status(422, Some("title is required".to_string()));
        assert!(!err.is_auth_expiry());
        assert_eq!(err.to_string(), "server responded 422: title is required");
        assert!(!ApiError::Network("offline".to_string()).is_auth_expiry());
    }
}
