use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};
use std::fmt;

// https://api.sbanken.no/exec.customers/swagger/index.html?urls.primaryName=Customers%20v1
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Customer {
    #[serde(alias = "customerID")]
    #[serde_as(as = "DefaultOnNull")]
    pub customer_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email_address: Option<String>,
    pub date_of_birth: Option<String>,
    pub postal_address: Option<Address>,
    pub street_address: Option<Address>,
    #[serde_as(as = "DefaultOnNull")]
    pub phone_numbers: Vec<PhoneNumber>,
}

/// Contact information from `MyProfiles`, which has the same shape as a customer.
pub type ContactInformation = Customer;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumber {
    pub country_code: Option<String>,
    pub number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub address_line3: Option<String>,
    pub address_line4: Option<String>,
    pub country: Option<String>,
    pub zip_code: Option<String>,
    pub city: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl fmt::Display for Address {
    /// Non-empty lines, then "<zip> <city>", then country, joined by ", ".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = [
            &self.address_line1,
            &self.address_line2,
            &self.address_line3,
            &self.address_line4,
        ]
        .into_iter()
        .filter_map(present)
        .map(str::to_string)
        .collect();

        match (present(&self.zip_code), present(&self.city)) {
            (Some(zip), Some(city)) => lines.push(format!("{} {}", zip, city)),
            (Some(zip), None) => lines.push(zip.to_string()),
            (None, Some(city)) => lines.push(city.to_string()),
            (None, None) => {}
        }

        if let Some(country) = present(&self.country) {
            lines.push(country.to_string());
        }

        write!(f, "{}", lines.join(", "))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn address(lines: [&str; 4], zip: &str, city: &str, country: &str) -> Address {
        let opt = |s: &str| Some(s.to_string());
        Address {
            address_line1: opt(lines[0]),
            address_line2: opt(lines[1]),
            address_line3: opt(lines[2]),
            address_line4: opt(lines[3]),
            zip_code: opt(zip),
            city: opt(city),
            country: opt(country),
        }
    }

    #[test]
    fn test_address_display() {
        let cases = [
            (address(["", "", "", ""], "", "", ""), ""),
            (
                address(["Storgata 1", "", "", ""], "0155", "Oslo", "NO"),
                "Storgata 1, 0155 Oslo, NO",
            ),
            (
                address(["c/o Hansen", "Storgata 1", "Leil. 2", "Bakgården"], "0155", "Oslo", ""),
                "c/o Hansen, Storgata 1, Leil. 2, Bakgården, 0155 Oslo",
            ),
            (address(["Storgata 1", "", "", ""], "0155", "", ""), "Storgata 1, 0155"),
            (address(["Storgata 1", "", "", ""], "", "Oslo", "NO"), "Storgata 1, Oslo, NO"),
            (address(["", "Storgata 1", "", ""], "", "", "NO"), "Storgata 1, NO"),
        ];

        for (addr, expected) in cases {
            assert_eq!(addr.to_string(), expected);
        }
    }

    #[test]
    fn test_address_display_missing_fields() {
        assert_eq!(Address::default().to_string(), "");
    }

    #[test]
    fn test_customer_deserialization() {
        let customer: Customer = serde_json::from_value(json!({
            "customerId": "12345678901",
            "firstName": "Ola",
            "lastName": "Nordmann",
            "emailAddress": "ola@example.com",
            "dateOfBirth": "1980-01-01T00:00:00",
            "postalAddress": {
                "addressLine1": "Storgata 1",
                "addressLine2": null,
                "zipCode": "0155",
                "city": "Oslo",
                "country": "NO"
            },
            "streetAddress": null,
            "phoneNumbers": [{"countryCode": "47", "number": "12345678"}]
        }))
        .unwrap();

        assert_eq!(customer, test_helpers::mock_customer());
    }

    #[test]
    fn test_customer_id_alias() {
        let customer: Customer =
            serde_json::from_value(json!({"customerID": "12345678901"})).unwrap();

        assert_eq!(customer.customer_id, "12345678901");
        assert!(customer.phone_numbers.is_empty());
    }

    #[test]
    fn test_customer_null_fields() {
        let customer: Customer = serde_json::from_value(json!({
            "customerId": null,
            "firstName": "Ola",
            "phoneNumbers": null
        }))
        .unwrap();

        assert_eq!(customer.customer_id, "");
        assert_eq!(customer.first_name.as_deref(), Some("Ola"));
        assert!(customer.phone_numbers.is_empty());
    }
}
