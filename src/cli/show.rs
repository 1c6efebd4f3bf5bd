use super::{connect, print_json};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use sbanken::{Client, Config, EfakturaListQuery, PaymentListQuery, TransactionListQuery};
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum ShowResource {
    /// Show configuration path
    Paths,
    /// List accounts
    Accounts,
    /// Show a single account
    Account { account_id: String },
    /// List cards
    Cards,
    /// Show the customer
    Customer,
    /// Show contact information from the customer's profile
    Profile,
    /// List payments for an account
    Payments {
        account_id: String,
        #[arg(long)]
        index: Option<u32>,
        #[arg(long)]
        length: Option<u32>,
    },
    /// Show a single payment
    Payment {
        account_id: String,
        payment_id: String,
    },
    /// List transactions for an account
    Transactions {
        account_id: String,
        /// Read from the archive instead of recent transactions
        #[arg(long)]
        archived: bool,
        #[arg(long)]
        start_date: Option<DateTime<Utc>>,
        #[arg(long)]
        end_date: Option<DateTime<Utc>>,
        #[arg(long)]
        index: Option<u32>,
        #[arg(long)]
        length: Option<u32>,
    },
    /// List standing orders for an account
    StandingOrders { account_id: String },
    /// List eFakturas
    Efakturas {
        /// Only eFakturas that have not been processed
        #[arg(long)]
        new: bool,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        start_date: Option<DateTime<Utc>>,
        #[arg(long)]
        end_date: Option<DateTime<Utc>>,
        #[arg(long)]
        index: Option<u32>,
        #[arg(long)]
        length: Option<u32>,
    },
    /// Show a single eFaktura
    Efaktura { efaktura_id: String },
}

impl ShowResource {
    pub async fn execute(&self) -> Result<()> {
        match self {
            ShowResource::Paths => show_paths(),
            resource => resource.fetch(&connect().await?).await,
        }
    }

    async fn fetch(&self, client: &Client) -> Result<()> {
        match self {
            ShowResource::Paths => show_paths(),
            ShowResource::Accounts => print_json(&client.list_accounts().await?),
            ShowResource::Account { account_id } => {
                print_json(&client.read_account(account_id).await?)
            }
            ShowResource::Cards => print_json(&client.list_cards().await?),
            ShowResource::Customer => print_json(&client.get_customer().await?),
            ShowResource::Profile => print_json(&client.get_contact_information().await?),
            ShowResource::Payments {
                account_id,
                index,
                length,
            } => {
                let query = PaymentListQuery {
                    index: *index,
                    length: *length,
                };
                print_json(&client.list_payments(account_id, Some(&query)).await?)
            }
            ShowResource::Payment {
                account_id,
                payment_id,
            } => print_json(&client.read_payment(account_id, payment_id).await?),
            ShowResource::Transactions {
                account_id,
                archived,
                start_date,
                end_date,
                index,
                length,
            } => {
                let query = TransactionListQuery {
                    start_date: *start_date,
                    end_date: *end_date,
                    index: *index,
                    length: *length,
                };
                let transactions = match archived {
                    true => {
                        client
                            .list_archived_transactions(account_id, Some(&query))
                            .await?
                    }
                    false => client.list_transactions(account_id, Some(&query)).await?,
                };
                print_json(&transactions)
            }
            ShowResource::StandingOrders { account_id } => {
                print_json(&client.list_standing_orders(account_id).await?)
            }
            ShowResource::Efakturas {
                new,
                status,
                start_date,
                end_date,
                index,
                length,
            } => {
                let query = EfakturaListQuery {
                    start_date: *start_date,
                    end_date: *end_date,
                    status: status.clone(),
                    index: *index,
                    length: *length,
                };
                let efakturas = match new {
                    true => client.list_new_efakturas(Some(&query)).await?,
                    false => client.list_efakturas(Some(&query)).await?,
                };
                print_json(&efakturas)
            }
            ShowResource::Efaktura { efaktura_id } => {
                print_json(&client.read_efaktura(efaktura_id).await?)
            }
        }
    }
}

fn show_paths() -> Result<()> {
    let config_path = Config::config_file()?;

    info!(path = ?config_path, "Config path");

    Ok(())
}
