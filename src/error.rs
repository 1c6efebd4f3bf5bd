use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("OAuth2 authentication error: {0}")]
    Auth(#[from] AuthError),

    #[error("Token renewal failed: {0}")]
    TokenRenewal(#[source] AuthError),

    #[error("{operation}: request failed: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: RequestError,
    },

    #[error("{operation}: failed to decode response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation}: failed to encode request: {source}")]
    Encode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Problems detected before any network I/O takes place.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("client_id is required")]
    MissingClientId,

    #[error("client_secret is required")]
    MissingClientSecret,

    #[error("customer_id is required for the legacy API surface")]
    MissingCustomerId,

    #[error("account ID is required")]
    MissingAccountId,

    #[error("payment ID is required")]
    MissingPaymentId,

    #[error("eFaktura ID is required")]
    MissingEfakturaId,

    #[error("POST payload missing")]
    MissingPostPayload,

    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(reqwest::Method),

    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{0}")]
    File(String),
}

/// Reasons a client-credentials exchange can fail.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("token request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("failed to parse token response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP request failed: {0}")]
    Send(#[source] reqwest::Error),

    #[error("failed to read response body (status {status}): {source}")]
    ReadBody {
        status: u16,
        #[source]
        source: reqwest::Error,
    },
}

/// An error reported by the API itself through the response envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{operation} error: {error_type} (StatusCode: {status_code} / ErrorCode: {code}): {message}"
)]
pub struct ApiError {
    pub operation: &'static str,
    pub error_type: String,
    pub message: String,
    pub code: i64,
    pub status_code: u16,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = ApiError {
            operation: "TestError",
            error_type: "Test".to_string(),
            message: "an error occurred".to_string(),
            code: 0,
            status_code: 500,
        };

        assert_eq!(
            err.to_string(),
            "TestError error: Test (StatusCode: 500 / ErrorCode: 0): an error occurred"
        );
    }

    #[test]
    fn test_api_error_is_transparent() {
        let err: Error = ApiError {
            operation: "Transfer",
            error_type: "Error".to_string(),
            message: "an error occurred".to_string(),
            code: 100,
            status_code: 500,
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Transfer error: Error (StatusCode: 500 / ErrorCode: 100): an error occurred"
        );
    }

    #[test]
    fn test_token_renewal_is_distinct_from_auth() {
        let renewal = Error::TokenRenewal(AuthError::Status(401));
        let initial = Error::Auth(AuthError::Status(401));

        assert_eq!(
            renewal.to_string(),
            "Token renewal failed: unexpected status code: 401"
        );
        assert_eq!(
            initial.to_string(),
            "OAuth2 authentication error: unexpected status code: 401"
        );
    }
}
