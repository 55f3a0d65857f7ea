use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a relay before text reaches stdout.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("ANTHROPIC_API_KEY not found in environment variables or .env file")]
    MissingCredential,

    #[error(transparent)]
    Request(#[from] RequestFailure),
}

/// Failure of the single remote call, classified by where it went wrong.
#[derive(Debug, Error)]
pub enum RequestFailure {
    #[error("authentication rejected ({status}): {message}")]
    Authentication { status: StatusCode, message: String },

    #[error("rate limited by the API: {message}")]
    RateLimited { message: String },

    #[error("request rejected ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("service error ({status}): {message}")]
    Service { status: StatusCode, message: String },

    #[error("request to '{url}' timed out")]
    Timeout { url: String },

    #[error("connection refused by '{url}'; check ANTHROPIC_BASE_URL and that the service is reachable")]
    ConnectionRefused { url: String },

    #[error("failed to connect to '{url}'; check ANTHROPIC_BASE_URL and network connectivity")]
    Connect { url: String },

    #[error("failed to call '{url}': {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("response contained no text content")]
    MissingText,
}

#[cfg(test)]
mod tests {
    use reqwest::StatusCode;

    use super::{RelayError, RequestFailure};

    #[test]
    fn missing_credential_names_the_variable() {
        let msg = RelayError::MissingCredential.to_string();
        assert_eq!(
            msg,
            "ANTHROPIC_API_KEY not found in environment variables or .env file"
        );
    }

    #[test]
    fn request_failure_is_displayed_transparently() {
        let err = RelayError::from(RequestFailure::Rejected {
            status: StatusCode::NOT_FOUND,
            message: "model: claude-nope".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "request rejected (404 Not Found): model: claude-nope"
        );
    }
}
