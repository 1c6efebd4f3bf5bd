use super::auth::{Authenticator, TokenStore};
use super::{HttpRequest, HttpResponse, Transport};
use crate::config::{Config, Identity};
use crate::error::{AuthError, Error, RequestError, Result};
use async_trait::async_trait;
use oauth2::AccessToken;
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::redirect::Policy;
use tracing::{debug, instrument};

const CUSTOMER_ID_HEADER: &str = "customerId";

/// Transport backed by `reqwest`, attaching a bearer token that is renewed
/// whenever it has expired.
pub struct HttpTransport {
    http_client: reqwest::Client,
    authenticator: Authenticator,
    tokens: TokenStore,
    identity: Identity,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = reqwest::ClientBuilder::new()
            .redirect(Policy::none())
            .build()
            .map_err(AuthError::HttpClient)?;

        Self::with_http_client(config, http_client)
    }

    /// Use a caller-configured client, e.g. with timeouts or a proxy.
    pub fn with_http_client(config: &Config, http_client: reqwest::Client) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            authenticator: Authenticator::new(config, http_client.clone())?,
            http_client,
            tokens: TokenStore::new(),
            identity: config.identity(),
        })
    }

    /// Fetch a fresh token now instead of on the first request.
    pub async fn authorize(&self) -> Result<()> {
        let token = self.authenticator.authorize().await?;
        self.tokens.replace(token).await;

        Ok(())
    }

    async fn access_token(&self) -> Result<AccessToken> {
        self.tokens.get_valid_token(&self.authenticator).await
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(
        name = "Sending request",
        skip_all,
        fields(operation = request.operation, method = %request.method, url = %request.url)
    )]
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse> {
        request.validate()?;

        let token = self.access_token().await?;
        let operation = request.operation;

        let mut builder = self
            .http_client
            .request(request.method, request.url)
            .bearer_auth(token.secret())
            .header(ACCEPT, "application/json");

        builder = match &self.identity {
            Identity::CustomerId(customer_id) => builder.header(CUSTOMER_ID_HEADER, customer_id),
            Identity::UserAgent(user_agent) => builder.header(USER_AGENT, user_agent),
        };

        if let Some(body) = request.body {
            builder = builder.header(CONTENT_TYPE, "application/json").body(body);
        }

        let response = builder.send().await.map_err(|source| Error::Request {
            operation,
            source: RequestError::Send(source),
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|source| Error::Request {
            operation,
            source: RequestError::ReadBody {
                status: status.as_u16(),
                source,
            },
        })?;

        debug!(status = status.as_u16(), bytes = body.len(), "Received response");

        Ok(HttpResponse {
            status,
            body: body.to_vec(),
        })
    }
}
