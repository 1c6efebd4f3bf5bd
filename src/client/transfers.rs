use super::{Client, require};
use crate::error::{ConfigError, Error, Result};
use crate::models::TransferQuery;
use crate::response::check;
use crate::transport::{HttpRequest, Transport};
use tracing::{info, instrument};

impl<T: Transport> Client<T> {
    /// Move money between two of the customer's own accounts. Success
    /// carries no payload.
    #[instrument(name = "Transferring", skip_all)]
    pub async fn transfer(&self, query: &TransferQuery) -> Result<()> {
        const OPERATION: &str = "Transfer";
        require(&query.from_account_id, ConfigError::MissingAccountId)?;
        require(&query.to_account_id, ConfigError::MissingAccountId)?;

        let body = serde_json::to_vec(query).map_err(|source| Error::Encode {
            operation: OPERATION,
            source,
        })?;
        let url = self.bank_url(&["Transfers"], &vec![])?;
        let response = self.send(HttpRequest::post(OPERATION, url, body)).await?;

        check(OPERATION, &response)?;
        info!(
            from = %query.from_account_id,
            to = %query.to_account_id,
            amount = %query.amount,
            "Transfer completed"
        );

        Ok(())
    }
}
