mod auth;
mod show;
mod transfer;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use sbanken::{Client, Config};
use serde::Serialize;

pub use show::ShowResource;

#[derive(Parser, Debug)]
#[command(name = "sbanken")]
#[command(about = "Query accounts and move money with the Sbanken API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Auth => auth::verify().await,
            Commands::Show { resource } => resource.execute().await,
            Commands::Transfer {
                from,
                to,
                amount,
                message,
                yes,
            } => transfer::transfer(from, to, *amount, message, *yes).await,
            Commands::PayEfaktura {
                efaktura_id,
                account_id,
                minimum,
                yes,
            } => transfer::pay_efaktura(efaktura_id, account_id, *minimum, *yes).await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify that the configured credentials are accepted
    Auth,
    Show {
        #[command(subcommand)]
        resource: ShowResource,
    },
    /// Transfer money between two of your own accounts
    Transfer {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: Decimal,
        #[arg(long, default_value = "")]
        message: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Pay an eFaktura from one of your accounts
    PayEfaktura {
        efaktura_id: String,
        #[arg(long)]
        account_id: String,
        /// Pay only the minimum amount
        #[arg(long)]
        minimum: bool,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

async fn connect() -> Result<Client> {
    let config = Config::load().context("Failed to load configuration")?;
    Client::new(&config)
        .await
        .context("Failed to connect to Sbanken")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
