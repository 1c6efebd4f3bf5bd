use super::Client;
use crate::error::Result;
use crate::models::Card;
use crate::response::decode_items;
use crate::transport::{HttpRequest, Transport};
use tracing::instrument;

impl<T: Transport> Client<T> {
    #[instrument(name = "Listing cards", skip_all)]
    pub async fn list_cards(&self) -> Result<Vec<Card>> {
        const OPERATION: &str = "ListCards";

        let url = self.bank_url(&["Cards"], &vec![])?;
        let response = self.send(HttpRequest::get(OPERATION, url)).await?;

        decode_items(OPERATION, &response)
    }
}
