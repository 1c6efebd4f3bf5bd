pub mod account;
pub mod card;
pub mod customer;
pub mod efaktura;
pub mod payment;
pub mod standing_order;
pub mod transaction;
pub mod transfer;

pub use account::Account;
pub use card::Card;
pub use customer::{Address, ContactInformation, Customer, PhoneNumber};
pub use efaktura::{Efaktura, EfakturaListQuery, EfakturaPayQuery};
pub use payment::{Payment, PaymentListQuery};
pub use standing_order::StandingOrder;
pub use transaction::{CardDetails, Transaction, TransactionDetails, TransactionListQuery};
pub use transfer::TransferQuery;

use chrono::{DateTime, SecondsFormat, Utc};

/// Query parameters as name/value pairs, in the order they are sent.
pub type QueryPairs = Vec<(&'static str, String)>;

/// Dates in list queries are sent as RFC3339.
pub(crate) fn format_date(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date() {
        let date = Utc.with_ymd_and_hms(2024, 1, 31, 13, 5, 0).unwrap();
        assert_eq!(format_date(&date), "2024-01-31T13:05:00Z");
    }
}
