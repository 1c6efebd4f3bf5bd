use super::connect;
use anyhow::{Result, bail};
use dialoguer::Confirm;
use rust_decimal::Decimal;
use sbanken::{EfakturaPayQuery, TransferQuery};
use tracing::info;

pub async fn transfer(from: &str, to: &str, amount: Decimal, message: &str, yes: bool) -> Result<()> {
    if !confirmed(&format!("Transfer {} from {} to {}?", amount, from, to), yes)? {
        bail!("transfer cancelled");
    }

    let client = connect().await?;
    let query = TransferQuery {
        from_account_id: from.to_string(),
        to_account_id: to.to_string(),
        message: message.to_string(),
        amount,
    };
    client.transfer(&query).await?;

    info!("Transfer submitted");

    Ok(())
}

pub async fn pay_efaktura(efaktura_id: &str, account_id: &str, minimum: bool, yes: bool) -> Result<()> {
    let prompt = match minimum {
        true => format!("Pay the minimum amount of eFaktura {} from {}?", efaktura_id, account_id),
        false => format!("Pay eFaktura {} from {}?", efaktura_id, account_id),
    };
    if !confirmed(&prompt, yes)? {
        bail!("payment cancelled");
    }

    let client = connect().await?;
    let query = EfakturaPayQuery {
        efaktura_id: efaktura_id.to_string(),
        account_id: account_id.to_string(),
        pay_only_minimum_amount: minimum,
    };
    client.pay_efaktura(&query).await?;

    info!("eFaktura payment submitted");

    Ok(())
}

fn confirmed(prompt: &str, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }

    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
