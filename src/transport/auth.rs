use crate::config::Config;
use crate::error::{AuthError, ConfigError, Error, Result};
use chrono::{DateTime, Duration, Utc};
use oauth2::basic::BasicTokenResponse;
use oauth2::{AccessToken, ClientId, ClientSecret, TokenResponse, TokenUrl};
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tokio::sync::Mutex;
use tracing::{debug, instrument};
use url::form_urlencoded;

const GRANT_CLIENT_CREDENTIALS: &str = "grant_type=client_credentials";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

// A token without expires_in is renewed on its next use
const DEFAULT_EXPIRES_IN: u64 = 0;

#[derive(Debug, Clone)]
pub(crate) struct Token {
    access_token: AccessToken,
    token_type: String,
    scope: Option<String>,
    expires_in: u64,
    expires_at: DateTime<Utc>,
}

impl Token {
    fn from_response(response: &BasicTokenResponse, issued_at: DateTime<Utc>) -> Self {
        let expires_in = response
            .expires_in()
            .map(|d| d.as_secs())
            .unwrap_or(DEFAULT_EXPIRES_IN);

        let scope = response.scopes().map(|scopes| {
            scopes
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(" ")
        });

        Self {
            access_token: response.access_token().clone(),
            token_type: response.token_type().as_ref().to_string(),
            scope,
            expires_in,
            expires_at: issued_at + Duration::seconds(expires_in as i64),
        }
    }

    /// A token is only valid strictly before its expiry instant.
    pub(crate) fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub(crate) fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub(crate) fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub(crate) fn token_type(&self) -> &str {
        &self.token_type
    }

    pub(crate) fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub(crate) fn expires_in(&self) -> u64 {
        self.expires_in
    }

    #[cfg(test)]
    pub(crate) fn expiring_at(access_token: &str, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: AccessToken::new(access_token.to_string()),
            token_type: "bearer".to_string(),
            scope: None,
            expires_in: 0,
            expires_at,
        }
    }
}

/// Performs the client-credentials exchange against the identity server.
pub(crate) struct Authenticator {
    client_id: ClientId,
    client_secret: ClientSecret,
    token_url: TokenUrl,
    http_client: reqwest::Client,
}

impl Authenticator {
    pub(crate) fn new(config: &Config, http_client: reqwest::Client) -> Result<Self> {
        let token_url = TokenUrl::new(config.token_url()).map_err(|e| ConfigError::InvalidUrl {
            url: config.token_url(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client_id: ClientId::new(config.client_id.clone()),
            client_secret: ClientSecret::new(config.client_secret.clone()),
            token_url,
            http_client,
        })
    }

    #[instrument(name = "Authorizing with Sbanken", skip_all)]
    pub(crate) async fn authorize(&self) -> std::result::Result<Token, AuthError> {
        let response = self
            .http_client
            .post(self.token_url.url().clone())
            .basic_auth(
                escape(self.client_id.as_str()),
                Some(escape(self.client_secret.secret())),
            )
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ACCEPT, "application/json")
            .body(GRANT_CLIENT_CREDENTIALS)
            .send()
            .await
            .map_err(AuthError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(AuthError::Status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(AuthError::Transport)?;
        let token_response: BasicTokenResponse = serde_json::from_slice(&body)?;
        let token = Token::from_response(&token_response, Utc::now());

        debug!(
            token_type = token.token_type(),
            scope = token.scope(),
            expires_in = token.expires_in(),
            "Obtained access token"
        );

        Ok(token)
    }
}

/// Credentials are percent-escaped before being placed in the Basic auth header.
fn escape(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Holds the current token. The lock is held across a renewal, so concurrent
/// callers wait for one authorize call instead of each issuing their own.
pub(crate) struct TokenStore {
    token: Mutex<Option<Token>>,
}

impl TokenStore {
    pub(crate) fn new() -> Self {
        Self {
            token: Mutex::new(None),
        }
    }

    pub(crate) async fn replace(&self, token: Token) {
        *self.token.lock().await = Some(token);
    }

    pub(crate) async fn get_valid_token(
        &self,
        authenticator: &Authenticator,
    ) -> Result<AccessToken> {
        let mut current = self.token.lock().await;

        if let Some(token) = current.as_ref().filter(|t| !t.is_expired()) {
            debug!("Using cached access token");
            return Ok(token.access_token().clone());
        }

        debug!("Access token missing or expired, renewing...");

        let token = authenticator
            .authorize()
            .await
            .map_err(Error::TokenRenewal)?;
        let access_token = token.access_token().clone();
        *current = Some(token);

        Ok(access_token)
    }
}
