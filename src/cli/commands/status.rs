//! `filedrop status` – probe the server once.

use anyhow::Result;
use filedrop::TransferSession;

pub async fn run_status(session: &TransferSession) -> Result<()> {
    let state = session.monitor().probe().await;
    println!("Server {}: {}", session.config().server_url, state);

    if let Some(info) = session.monitor().server_info() {
        println!("{:<10} {}", "HOSTNAME", info.hostname);
        println!("{:<10} {}", "SYSTEM", info.system);
        println!("{:<10} {}", "MACHINE", info.machine);
        println!("{:<10} {}", "PROCESSOR", info.processor);
        println!("{:<10} {}", "IP", info.ip);
    }
    Ok(())
}
