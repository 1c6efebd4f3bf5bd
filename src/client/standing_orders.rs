use super::{Client, require};
use crate::error::{ConfigError, Result};
use crate::models::StandingOrder;
use crate::response::decode_items;
use crate::transport::{HttpRequest, Transport};
use tracing::instrument;

impl<T: Transport> Client<T> {
    #[instrument(name = "Listing standing orders", skip_all, fields(account_id = %account_id))]
    pub async fn list_standing_orders(&self, account_id: &str) -> Result<Vec<StandingOrder>> {
        const OPERATION: &str = "ListStandingOrders";
        require(account_id, ConfigError::MissingAccountId)?;

        let url = self.bank_url(&["StandingOrders", account_id], &vec![])?;
        let response = self.send(HttpRequest::get(OPERATION, url)).await?;

        decode_items(OPERATION, &response)
    }
}
