use super::{QueryPairs, format_date};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

// https://api.sbanken.no/exec.bank/swagger/index.html?urls.primaryName=Efakturas%20v1
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Efaktura {
    #[serde(rename = "eFakturaId")]
    #[serde_as(as = "DefaultOnNull")]
    pub efaktura_id: String,
    pub issuer_id: Option<String>,
    #[serde(rename = "eFakturaReference")]
    pub reference: Option<String>,
    pub document_type: Option<String>,
    pub status: Option<String>,
    pub kid: Option<String>,
    pub original_due_date: Option<String>,
    pub updated_due_date: Option<String>,
    pub notification_date: Option<String>,
    pub issuer_name: Option<String>,
    pub original_amount: Option<Decimal>,
    pub updated_amount: Option<Decimal>,
    pub minimum_amount: Option<Decimal>,
    pub credit_account_number: Option<i64>,
}

/// Filters for listing eFakturas. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EfakturaListQuery {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub index: Option<u32>,
    pub length: Option<u32>,
}

impl EfakturaListQuery {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();

        if let Some(start_date) = &self.start_date {
            pairs.push(("startDate", format_date(start_date)));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("endDate", format_date(end_date)));
        }
        if let Some(status) = self.status.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("status", status.to_string()));
        }
        if let Some(index) = self.index {
            pairs.push(("index", index.to_string()));
        }
        if let Some(length) = self.length {
            pairs.push(("length", length.to_string()));
        }

        pairs
    }
}

/// Body of a request to pay an eFaktura.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EfakturaPayQuery {
    #[serde(rename = "eFakturaId")]
    pub efaktura_id: String,
    #[serde(rename = "accountId")]
    pub account_id: String,
    #[serde(rename = "PayOnlyMinimumAmount")]
    pub pay_only_minimum_amount: bool,
}
