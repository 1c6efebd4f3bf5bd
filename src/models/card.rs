use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

// https://api.sbanken.no/exec.bank/swagger/index.html?urls.primaryName=Cards%20v1
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    #[serde_as(as = "DefaultOnNull")]
    pub card_id: String,
    pub card_number: Option<String>,
    pub expiry_date: Option<String>,
    pub status: Option<String>,
    pub card_type: Option<String>,
    pub product_code: Option<String>,
    pub account_number: Option<String>,
    pub account_owner: Option<String>,
    pub customer_id: Option<String>,
    #[serde(rename = "cardVersionNumber")]
    pub version_number: Option<i64>,
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_card_deserialization() {
        let card: Card = serde_json::from_value(json!({
            "cardId": "test-card",
            "cardNumber": "*** 1234",
            "expiryDate": "2026-01-31T00:00:00",
            "status": "Active",
            "cardType": "Debit",
            "productCode": "VISA",
            "accountNumber": "123456789",
            "accountOwner": "Ola Nordmann",
            "customerId": "12345678901",
            "cardVersionNumber": 2
        }))
        .unwrap();

        assert_eq!(card, test_helpers::mock_card());
    }

    #[test]
    fn test_card_null_id() {
        let card: Card = serde_json::from_value(json!({"cardId": null, "status": "Active"})).unwrap();

        assert_eq!(card.card_id, "");
        assert_eq!(card.status.as_deref(), Some("Active"));
    }
}
