use super::{Client, require};
use crate::error::{ConfigError, Result};
use crate::models::{Payment, PaymentListQuery};
use crate::response::{decode_item, decode_items};
use crate::transport::{HttpRequest, Transport};
use tracing::instrument;

impl<T: Transport> Client<T> {
    #[instrument(name = "Listing payments", skip_all, fields(account_id = %account_id))]
    pub async fn list_payments(
        &self,
        account_id: &str,
        query: Option<&PaymentListQuery>,
    ) -> Result<Vec<Payment>> {
        const OPERATION: &str = "ListPayments";
        require(account_id, ConfigError::MissingAccountId)?;

        let query = query.map(PaymentListQuery::query_pairs).unwrap_or_default();
        let url = self.bank_url(&["Payments", account_id], &query)?;
        let response = self.send(HttpRequest::get(OPERATION, url)).await?;

        decode_items(OPERATION, &response)
    }

    #[instrument(
        name = "Reading payment",
        skip_all,
        fields(account_id = %account_id, payment_id = %payment_id)
    )]
    pub async fn read_payment(&self, account_id: &str, payment_id: &str) -> Result<Payment> {
        const OPERATION: &str = "ReadPayment";
        require(account_id, ConfigError::MissingAccountId)?;
        require(payment_id, ConfigError::MissingPaymentId)?;

        let url = self.bank_url(&["Payments", account_id, payment_id], &vec![])?;
        let response = self.send(HttpRequest::get(OPERATION, url)).await?;

        decode_item(OPERATION, &response)
    }
}
