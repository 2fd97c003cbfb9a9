//! `filedrop clear-history` – empty the server's transfer log.

use anyhow::Result;
use filedrop::TransferSession;

pub async fn run_clear_history(session: &TransferSession) -> Result<()> {
    session.history().try_clear().await?;
    println!("Transfer history cleared");
    Ok(())
}
