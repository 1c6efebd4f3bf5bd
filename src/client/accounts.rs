use super::{Client, require};
use crate::error::{ConfigError, Result};
use crate::models::Account;
use crate::response::{decode_item, decode_items};
use crate::transport::{HttpRequest, Transport};
use tracing::instrument;

impl<T: Transport> Client<T> {
    #[instrument(name = "Listing accounts", skip_all)]
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        const OPERATION: &str = "ListAccounts";

        let url = self.bank_url(&["Accounts"], &vec![])?;
        let response = self.send(HttpRequest::get(OPERATION, url)).await?;

        decode_items(OPERATION, &response)
    }

    #[instrument(name = "Reading account", skip_all, fields(account_id = %account_id))]
    pub async fn read_account(&self, account_id: &str) -> Result<Account> {
        const OPERATION: &str = "ReadAccount";
        require(account_id, ConfigError::MissingAccountId)?;

        let url = self.bank_url(&["Accounts", account_id], &vec![])?;
        let response = self.send(HttpRequest::get(OPERATION, url)).await?;

        decode_item(OPERATION, &response)
    }
}
