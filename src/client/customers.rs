use super::Client;
use crate::error::Result;
use crate::models::{ContactInformation, Customer, QueryPairs};
use crate::response::decode_item;
use crate::transport::{HttpRequest, Transport};
use tracing::instrument;

impl<T: Transport> Client<T> {
    #[instrument(name = "Getting customer", skip_all)]
    pub async fn get_customer(&self) -> Result<Customer> {
        const OPERATION: &str = "GetCustomer";

        let url = self.bank_url(&["Customers"], &vec![])?;
        let response = self.send(HttpRequest::get(OPERATION, url)).await?;

        decode_item(OPERATION, &response)
    }

    /// Contact details from the profile service, scoped to the configured
    /// customer when there is one.
    #[instrument(name = "Getting contact information", skip_all)]
    pub async fn get_contact_information(&self) -> Result<ContactInformation> {
        const OPERATION: &str = "GetContactInformation";

        let mut query = QueryPairs::new();
        if let Some(customer_id) = &self.customer_id {
            query.push(("customerId", customer_id.clone()));
        }

        let url = self.customers_url(&["MyProfiles", "contactinformation"], &query)?;
        let response = self.send(HttpRequest::get(OPERATION, url)).await?;

        decode_item(OPERATION, &response)
    }
}
