//! Interpretation of the envelope every API response carries.
//!
//! A call only succeeds when the envelope says `isError: false` *and* the
//! status code is 200. The payload is decoded in a second step, and only on
//! success, so a failed call never yields a partial payload.

use crate::error::{ApiError, Error, Result};
use crate::transport::HttpResponse;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Envelope {
    pub trace_id: Option<String>,
    pub error_type: Option<String>,
    pub error_message: Option<String>,
    pub available_items: Option<i64>,
    pub error_code: Option<i64>,
    pub is_error: Option<bool>,
}

impl Envelope {
    pub fn is_error(&self) -> bool {
        self.is_error.unwrap_or(false)
    }

    fn into_error(self, operation: &'static str, status: StatusCode) -> ApiError {
        ApiError {
            operation,
            error_type: self.error_type.unwrap_or_default(),
            message: self.error_message.unwrap_or_default(),
            code: self.error_code.unwrap_or_default(),
            status_code: status.as_u16(),
        }
    }
}

#[derive(Deserialize)]
struct Item<T> {
    item: T,
}

#[derive(Deserialize)]
struct Items<T> {
    items: Option<Vec<T>>,
}

/// Decide success or failure from the envelope and status alone.
pub(crate) fn check(operation: &'static str, response: &HttpResponse) -> Result<Envelope> {
    let envelope: Envelope = decode_body(operation, response)?;

    if envelope.is_error() || response.status != StatusCode::OK {
        debug!(
            operation,
            status = response.status.as_u16(),
            trace_id = envelope.trace_id.as_deref(),
            "API reported an error"
        );
        return Err(envelope.into_error(operation, response.status).into());
    }

    Ok(envelope)
}

/// Decode a single-entity response (`{"item": ...}`).
pub(crate) fn decode_item<T: DeserializeOwned>(
    operation: &'static str,
    response: &HttpResponse,
) -> Result<T> {
    check(operation, response)?;
    let payload: Item<T> = decode_body(operation, response)?;
    Ok(payload.item)
}

/// Decode a list response (`{"items": [...]}`). A missing or null list is empty.
pub(crate) fn decode_items<T: DeserializeOwned>(
    operation: &'static str,
    response: &HttpResponse,
) -> Result<Vec<T>> {
    check(operation, response)?;
    let payload: Items<T> = decode_body(operation, response)?;
    Ok(payload.items.unwrap_or_default())
}

fn decode_body<T: DeserializeOwned>(operation: &'static str, response: &HttpResponse) -> Result<T> {
    serde_json::from_slice(&response.body).map_err(|source| Error::Decode { operation, source })
}
