use super::connect;
use anyhow::Result;
use tracing::info;

pub async fn verify() -> Result<()> {
    let _client = connect().await?;

    info!("Sbanken authentication verified");

    Ok(())
}
