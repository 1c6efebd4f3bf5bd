use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// A repeated transfer or payment.
// https://publicapi.sbanken.no/openapi/apibeta/index.html#/StandingOrders
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StandingOrder {
    #[serde_as(as = "DefaultOnNull")]
    pub free_terms: Vec<String>,
    pub beneficiary_name: Option<String>,
    #[serde(rename = "cId")]
    pub cid: Option<String>,
    pub credit_account_number: Option<String>,
    pub debit_account_number: Option<String>,
    pub frequency: Option<String>,
    pub last_payment_date: Option<String>,
    pub next_due_date: Option<String>,
    pub standing_order_end_date: Option<String>,
    pub standing_order_start_date: Option<String>,
    pub standing_order_type: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub amount: Decimal,
    #[serde_as(as = "DefaultOnNull")]
    pub standing_order_id: i64,
}
