//! Typed client for the Sbanken Open Banking API.
//!
//! ```no_run
//! # async fn run() -> sbanken::Result<()> {
//! let config = sbanken::Config::new("client-id", "client-secret");
//! let client = sbanken::Client::new(&config).await?;
//!
//! for account in client.list_accounts().await? {
//!     println!("{} {}", account.name, account.available);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod response;
pub mod transport;

pub use client::Client;
pub use config::{ApiSurface, Config};
pub use error::{ApiError, AuthError, ConfigError, Error, RequestError, Result};
pub use models::*;
pub use response::Envelope;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};
