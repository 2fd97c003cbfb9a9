//! `filedrop history` – print the server's transfer log.

use anyhow::Result;
use filedrop::TransferSession;

pub async fn run_history(session: &TransferSession, oldest_first: bool) -> Result<()> {
    let history = session.history();
    history.try_refresh().await?;

    let items = if oldest_first {
        history.items()
    } else {
        history.newest_first()
    };
    if items.is_empty() {
        println!("No transfers recorded.");
        return Ok(());
    }

    println!(
        "{:<6} {:<10} {:<20} {:<16} {}",
        "ID", "SIZE", "TIME", "FROM", "FILENAME"
    );
    for item in items {
        println!(
            "{:<6} {:<10} {:<20} {:<16} {}",
            item.id,
            item.display_size(),
            item.display_time(),
            item.client_ip,
            item.filename
        );
    }
    Ok(())
}
