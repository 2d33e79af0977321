use reqwest::StatusCode;

/// Errors raised while talking to a third-party provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Transport level failure: DNS, connect, timeout, body read
    #[error("HTTP Error: {0}")]
    HttpError(String),

    /// The provider answered with something other than 200 OK
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Credentials were not configured for this provider
    #[error("Auth Error: {0}")]
    AuthError(String),

    /// The body parsed but did not have the expected shape
    #[error("Response Format Error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },

    #[error("JSON Parse Error: {0}")]
    JsonError(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::JsonError(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = ProviderError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "invalid key".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Unexpected status 401 Unauthorized: invalid key"
        );
    }

    #[test]
    fn test_auth_error_display() {
        let error = ProviderError::AuthError("SERPER_API_KEY not set".to_string());
        assert_eq!(error.to_string(), "Auth Error: SERPER_API_KEY not set");
    }

    #[test]
    fn test_response_format_error_display() {
        let error = ProviderError::ResponseFormatError {
            message: "No candidates".to_string(),
            raw_response: "{}".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Response Format Error: No candidates. Raw response: {}"
        );
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{\"a\": nope}").unwrap_err();
        let error: ProviderError = json_error.into();

        match error {
            ProviderError::JsonError(msg) => {
                assert!(msg.contains("line"));
                assert!(msg.contains("column"));
            }
            _ => panic!("Expected JsonError"),
        }
    }
}
