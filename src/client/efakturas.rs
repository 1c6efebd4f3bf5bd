use super::{Client, require};
use crate::error::{ConfigError, Error, Result};
use crate::models::{Efaktura, EfakturaListQuery, EfakturaPayQuery};
use crate::response::{check, decode_item, decode_items};
use crate::transport::{HttpRequest, Transport};
use tracing::{info, instrument};

impl<T: Transport> Client<T> {
    #[instrument(name = "Listing eFakturas", skip_all)]
    pub async fn list_efakturas(&self, query: Option<&EfakturaListQuery>) -> Result<Vec<Efaktura>> {
        self.fetch_efakturas("ListEfakturas", &["Efakturas"], query).await
    }

    /// eFakturas that have not been processed yet.
    #[instrument(name = "Listing new eFakturas", skip_all)]
    pub async fn list_new_efakturas(
        &self,
        query: Option<&EfakturaListQuery>,
    ) -> Result<Vec<Efaktura>> {
        self.fetch_efakturas("ListNewEfakturas", &["Efakturas", "new"], query)
            .await
    }

    #[instrument(name = "Reading eFaktura", skip_all, fields(efaktura_id = %efaktura_id))]
    pub async fn read_efaktura(&self, efaktura_id: &str) -> Result<Efaktura> {
        const OPERATION: &str = "ReadEfaktura";
        require(efaktura_id, ConfigError::MissingEfakturaId)?;

        let url = self.bank_url(&["Efakturas", efaktura_id], &vec![])?;
        let response = self.send(HttpRequest::get(OPERATION, url)).await?;

        decode_item(OPERATION, &response)
    }

    /// Pay an eFaktura from the given account. Success carries no payload.
    #[instrument(name = "Paying eFaktura", skip_all)]
    pub async fn pay_efaktura(&self, query: &EfakturaPayQuery) -> Result<()> {
        const OPERATION: &str = "PayEfaktura";
        require(&query.efaktura_id, ConfigError::MissingEfakturaId)?;
        require(&query.account_id, ConfigError::MissingAccountId)?;

        let body = serde_json::to_vec(query).map_err(|source| Error::Encode {
            operation: OPERATION,
            source,
        })?;
        let url = self.bank_url(&["Efakturas"], &vec![])?;
        let response = self.send(HttpRequest::post(OPERATION, url, body)).await?;

        check(OPERATION, &response)?;
        info!(efaktura_id = %query.efaktura_id, "Paid eFaktura");

        Ok(())
    }

    async fn fetch_efakturas(
        &self,
        operation: &'static str,
        segments: &[&str],
        query: Option<&EfakturaListQuery>,
    ) -> Result<Vec<Efaktura>> {
        let query = query.map(EfakturaListQuery::query_pairs).unwrap_or_default();
        let url = self.bank_url(segments, &query)?;
        let response = self.send(HttpRequest::get(operation, url)).await?;

        decode_items(operation, &response)
    }
}
