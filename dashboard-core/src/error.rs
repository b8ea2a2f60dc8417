use thiserror::Error;

/// Failures surfaced by the dashboard API client.
///
/// Callers never need to branch on transport-specific error types: a
/// structured backend error body is normalized into [`ApiClientError::Api`]
/// with its message and numeric code, and everything else (network
/// failures, timeouts, non-matching error bodies) passes through as
/// [`ApiClientError::Transport`] untouched.
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The backend returned a structured `{error:{code,message,details?}}`
    /// body on a non-2xx response.
    #[error("{message} (Code: {code})")]
    Api {
        code: i64,
        message: String,
        details: Option<String>,
    },

    /// Raw transport-level failure, propagated unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiClientError {
    /// Numeric backend error code, when this is a normalized API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            ApiClientError::Api { code, .. } => Some(*code),
            ApiClientError::Transport(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_embeds_message_and_code() {
        let err = ApiClientError::Api {
            code: 1006,
            message: "No matching location found.".to_string(),
            details: None,
        };

        assert_eq!(err.to_string(), "No matching location found. (Code: 1006)");
    }

    #[test]
    fn api_code_only_set_for_normalized_errors() {
        let err = ApiClientError::Api { code: 42, message: "nope".to_string(), details: None };
        assert_eq!(err.api_code(), Some(42));
    }
}
