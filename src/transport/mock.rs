use super::{HttpRequest, HttpResponse, Transport};
use crate::error::Result;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Test double answering requests from a table keyed by full URL.
#[derive(Clone, Default)]
pub(crate) struct MockTransport {
    responses: Arc<Mutex<HashMap<String, HttpResponse>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(self, url: &str, status: u16, body: serde_json::Value) -> Self {
        let response = HttpResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: serde_json::to_vec(&body).unwrap(),
        };
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
        self
    }

    pub(crate) fn respond_raw(self, url: &str, status: u16, body: &str) -> Self {
        let response = HttpResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.as_bytes().to_vec(),
        };
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
        self
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        request.validate()?;
        self.requests.lock().unwrap().push(request.clone());

        let response = self
            .responses
            .lock()
            .unwrap()
            .get(request.url.as_str())
            .cloned()
            .unwrap_or_else(|| HttpResponse {
                status: StatusCode::NOT_FOUND,
                body: format!(
                    r#"{{"isError":true,"errorType":"NotFound","errorMessage":"no mock for {}","errorCode":404}}"#,
                    request.url
                )
                .into_bytes(),
            });

        Ok(response)
    }
}
