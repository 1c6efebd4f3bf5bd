mod accounts;
mod cards;
mod customers;
mod efakturas;
mod payments;
mod standing_orders;
mod transactions;
mod transfers;

use crate::config::Config;
use crate::error::{ConfigError, Result};
use crate::models::QueryPairs;
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
use tracing::instrument;
use url::Url;

const API_VERSION: &str = "v1";

/// Client for the Sbanken API.
///
/// Every operation performs at most one token renewal followed by exactly one
/// API call. Nothing is retried.
pub struct Client<T = HttpTransport> {
    transport: T,
    bank_base_url: String,
    customers_base_url: String,
    customer_id: Option<String>,
}

impl Client<HttpTransport> {
    /// Create a new client and authorize straight away, so bad credentials
    /// surface here rather than on the first call.
    #[instrument(name = "Authenticating to Sbanken", skip_all)]
    pub async fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config)?;
        transport.authorize().await?;

        Self::with_transport(config, transport)
    }

    /// Like [`Client::new`], with a caller-configured `reqwest::Client`.
    #[instrument(name = "Authenticating to Sbanken", skip_all)]
    pub async fn with_http_client(config: &Config, http_client: reqwest::Client) -> Result<Self> {
        let transport = HttpTransport::with_http_client(config, http_client)?;
        transport.authorize().await?;

        Self::with_transport(config, transport)
    }
}

impl<T: Transport> Client<T> {
    /// Wrap an existing transport. No authorization is attempted.
    pub fn with_transport(config: &Config, transport: T) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            transport,
            bank_base_url: config.bank_base_url(),
            customers_base_url: config.customers_base_url(),
            customer_id: config.customer_id().map(str::to_string),
        })
    }

    fn bank_url(&self, segments: &[&str], query: &QueryPairs) -> Result<Url> {
        endpoint(&self.bank_base_url, segments, query)
    }

    fn customers_url(&self, segments: &[&str], query: &QueryPairs) -> Result<Url> {
        endpoint(&self.customers_base_url, segments, query)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.transport.request(request).await
    }
}

/// `<base>/v1/<segments...>[?query]`, with each segment percent-encoded.
fn endpoint(base: &str, segments: &[&str], query: &QueryPairs) -> Result<Url> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        url: base.to_string(),
        reason,
    };

    let mut url = Url::parse(base).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("URL cannot be a base".to_string()))?
        .pop_if_empty()
        .push(API_VERSION)
        .extend(segments);

    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    Ok(url)
}

/// Reject empty identifiers before any request is made.
fn require(value: &str, missing: ConfigError) -> Result<()> {
    if value.is_empty() {
        return Err(missing.into());
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiSurface;
    use crate::error::Error;
    use crate::transport::mock::MockTransport;

    #[test]
    fn test_endpoint() {
        let url = endpoint("https://api.sbanken.no/exec.bank/api", &["Accounts"], &vec![]).unwrap();
        assert_eq!(url.as_str(), "https://api.sbanken.no/exec.bank/api/v1/Accounts");

        let url = endpoint("http://127.0.0.1:8080", &["Payments", "a1", "p1"], &vec![]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/v1/Payments/a1/p1");
    }

    #[test]
    fn test_endpoint_escapes_segments_and_query() {
        let query = vec![("startDate", "2024-01-01T00:00:00+01:00".to_string())];
        let url = endpoint("https://api.example.com", &["Accounts", "a/b c"], &query).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.example.com/v1/Accounts/a%2Fb%20c?startDate=2024-01-01T00%3A00%3A00%2B01%3A00"
        );
    }

    #[test]
    fn test_endpoint_invalid_base() {
        let result = endpoint("not a url", &["Accounts"], &vec![]);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidUrl { .. }))
        ));
    }

    #[test]
    fn test_with_transport_validates_config() {
        let cases = [
            (Config::new("", "secret"), "client_id is required"),
            (Config::new("id", ""), "client_secret is required"),
            (
                Config {
                    surface: ApiSurface::Legacy,
                    ..Config::new("id", "secret")
                },
                "customer_id is required for the legacy API surface",
            ),
        ];

        for (config, expected) in cases {
            let transport = MockTransport::new();
            let result = Client::with_transport(&config, transport.clone());

            match result {
                Err(Error::Config(err)) => assert_eq!(err.to_string(), expected),
                _ => panic!("expected config error for {:?}", config),
            }
            assert_eq!(transport.request_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_new_validates_before_network() {
        // Nothing listens on this address, so reaching the network would
        // produce an auth error instead of a config error.
        let config = Config {
            auth_url: Some("http://127.0.0.1:1".to_string()),
            ..Config::new("", "secret")
        };

        let result = Client::new(&config).await;

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingClientId))
        ));
    }

    #[tokio::test]
    async fn test_new_reports_auth_failure() {
        let config = Config {
            auth_url: Some("http://127.0.0.1:1".to_string()),
            ..Config::new("id", "secret")
        };

        let result = Client::new(&config).await;

        assert!(matches!(result, Err(Error::Auth(_))));
    }
}
