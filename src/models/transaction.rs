use super::{QueryPairs, format_date};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

// https://api.sbanken.no/exec.bank/swagger/index.html?urls.primaryName=Transactions%20v1
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Transaction {
    pub card_details: Option<CardDetails>,
    pub transaction_details: Option<TransactionDetails>,
    pub accounting_date: Option<String>,
    pub interest_date: Option<String>,
    pub other_account_number: Option<String>,
    pub text: Option<String>,
    pub transaction_type: Option<String>,
    pub transaction_type_text: Option<String>,
    pub reservation_type: Option<String>,
    pub source: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub amount: Decimal,
    pub transaction_type_code: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    pub is_reservation: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub card_details_specified: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub other_account_number_specified: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub transaction_detail_specified: bool,
}

/// Details about the card used for a card transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardDetails {
    pub card_number: Option<String>,
    pub merchant_category_code: Option<String>,
    pub merchant_category_description: Option<String>,
    pub merchant_city: Option<String>,
    pub merchant_name: Option<String>,
    pub original_currency_code: Option<String>,
    pub purchase_date: Option<String>,
    pub transaction_id: Option<String>,
    pub currency_amount: Option<Decimal>,
    pub currency_rate: Option<Decimal>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    pub transaction_id: Option<String>,
    pub formatted_account_number: Option<String>,
    pub cid: Option<String>,
    pub amount_description: Option<String>,
    pub receiver_name: Option<String>,
    pub payer_name: Option<String>,
    pub registration_date: Option<String>,
    pub numeric_reference: Option<i64>,
}

/// Filters for listing transactions. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionListQuery {
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub index: Option<u32>,
    pub length: Option<u32>,
}

impl TransactionListQuery {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();

        if let Some(start_date) = &self.start_date {
            pairs.push(("startDate", format_date(start_date)));
        }
        if let Some(end_date) = &self.end_date {
            pairs.push(("endDate", format_date(end_date)));
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
