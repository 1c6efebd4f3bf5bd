mod auth;
mod http;
#[cfg(test)]
pub(crate) mod mock;

pub use http::HttpTransport;

use crate::error::{ConfigError, Result};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use url::Url;

/// A single outbound API call, built fresh by each operation.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Logical operation name, e.g. `ListAccounts`.
    pub operation: &'static str,
    pub method: Method,
    pub url: Url,
    /// Pre-serialized JSON, sent unmodified.
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(operation: &'static str, url: Url) -> Self {
        Self {
            operation,
            method: Method::GET,
            url,
            body: None,
        }
    }

    pub fn post(operation: &'static str, url: Url, body: Vec<u8>) -> Self {
        Self {
            operation,
            method: Method::POST,
            url,
            body: Some(body),
        }
    }

    /// Only GET and POST are supported, and a POST must carry a payload.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.method == Method::GET {
            return Ok(());
        }

        if self.method != Method::POST {
            return Err(ConfigError::UnsupportedMethod(self.method.clone()));
        }

        match &self.body {
            Some(body) if !body.is_empty() => Ok(()),
            _ => Err(ConfigError::MissingPostPayload),
        }
    }
}

/// Raw response, returned regardless of status code.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse>;
}
