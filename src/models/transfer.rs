use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of a transfer between two of the customer's own accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferQuery {
    pub from_account_id: String,
    pub to_account_id: String,
    pub message: String,
    // The API expects a JSON number here
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
