use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

// https://api.sbanken.no/exec.bank/swagger/index.html?urls.primaryName=Accounts%20v1
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    #[serde_as(as = "DefaultOnNull")]
    pub account_id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub account_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub account_number: String,
    pub owner_customer_id: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    pub available: Decimal,
    #[serde_as(as = "DefaultOnNull")]
    pub balance: Decimal,
    #[serde_as(as = "DefaultOnNull")]
    pub credit_limit: Decimal,
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_account_deserialization() {
        let account: Account = serde_json::from_value(json!({
            "accountId": "test-account",
            "name": "My account",
            "accountType": "Account",
            "accountNumber": "123456789",
            "available": 123.45,
            "balance": 123.45,
            "creditLimit": 0.0
        }))
        .unwrap();

        assert_eq!(account, test_helpers::mock_account());
    }

    #[test]
    fn test_account_owner() {
        let account: Account = serde_json::from_value(json!({
            "accountId": "a1",
            "name": "Savings",
            "accountType": "High interest",
            "accountNumber": "97100000000",
            "ownerCustomerId": "12345678901",
            "available": 1000,
            "balance": 1000,
            "creditLimit": 0
        }))
        .unwrap();

        assert_eq!(account.owner_customer_id.as_deref(), Some("12345678901"));
    }

    #[test]
    fn test_account_null_fields() {
        let account: Account = serde_json::from_value(json!({
            "accountId": "a1",
            "name": null,
            "accountType": null,
            "accountNumber": null,
            "ownerCustomerId": null,
            "available": null,
            "balance": 10,
            "creditLimit": null
        }))
        .unwrap();

        assert_eq!(account.account_id, "a1");
        assert_eq!(account.name, "");
        assert_eq!(account.account_type, "");
        assert_eq!(account.available, Decimal::ZERO);
        assert_eq!(account.balance, Decimal::from(10));
        assert_eq!(account.credit_limit, Decimal::ZERO);
    }
}
