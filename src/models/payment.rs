use super::QueryPairs;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

// https://api.sbanken.no/exec.bank/swagger/index.html?urls.primaryName=Payments%20v1
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Payment {
    #[serde_as(as = "DefaultOnNull")]
    pub allowed_new_status_types: Vec<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub payment_id: String,
    pub recipient_account_number: Option<String>,
    pub due_date: Option<String>,
    pub kid: Option<String>,
    pub text: Option<String>,
    pub status: Option<String>,
    pub status_details: Option<String>,
    pub product_type: Option<String>,
    pub payment_type: Option<String>,
    pub beneficiary_name: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub amount: Decimal,
    pub payment_number: Option<i64>,
    #[serde_as(as = "DefaultOnNull")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentListQuery {
    pub index: Option<u32>,
    pub length: Option<u32>,
}

impl PaymentListQuery {
    pub fn query_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();

        if let Some(index) = self.index {
            pairs.push(("index", index.to_string()));
        }
        if let Some(length) = self.length {
            pairs.push(("length", length.to_string()));
        }

        pairs
    }
}
