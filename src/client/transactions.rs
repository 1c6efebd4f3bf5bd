use super::{Client, require};
use crate::error::{ConfigError, Result};
use crate::models::{Transaction, TransactionListQuery};
use crate::response::decode_items;
use crate::transport::{HttpRequest, Transport};
use tracing::instrument;

impl<T: Transport> Client<T> {
    #[instrument(name = "Listing transactions", skip_all, fields(account_id = %account_id))]
    pub async fn list_transactions(
        &self,
        account_id: &str,
        query: Option<&TransactionListQuery>,
    ) -> Result<Vec<Transaction>> {
        self.fetch_transactions(
            "ListTransactions",
            &["Transactions", account_id],
            account_id,
            query,
        )
        .await
    }

    /// Transactions that have been moved to the archive, which the API keeps
    /// apart from recent activity.
    #[instrument(
        name = "Listing archived transactions",
        skip_all,
        fields(account_id = %account_id)
    )]
    pub async fn list_archived_transactions(
        &self,
        account_id: &str,
        query: Option<&TransactionListQuery>,
    ) -> Result<Vec<Transaction>> {
        self.fetch_transactions(
            "ListArchivedTransactions",
            &["Transactions", "archive", account_id],
            account_id,
            query,
        )
        .await
    }

    async fn fetch_transactions(
        &self,
        operation: &'static str,
        segments: &[&str],
        account_id: &str,
        query: Option<&TransactionListQuery>,
    ) -> Result<Vec<Transaction>> {
        require(account_id, ConfigError::MissingAccountId)?;

        let query = query
            .map(TransactionListQuery::query_pairs)
            .unwrap_or_default();
        let url = self.bank_url(segments, &query)?;
        let response = self.send(HttpRequest::get(operation, url)).await?;

        decode_items(operation, &response)
    }
}
