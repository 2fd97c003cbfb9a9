//! `filedrop watch` – follow connectivity until interrupted.

use anyhow::Result;
use filedrop::{ConnectionState, TransferSession};

pub async fn run_watch(session: &TransferSession) -> Result<()> {
    let mut snapshots = session.monitor().subscribe();
    let mut last: Option<ConnectionState> = None;
    session.start();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = snapshots.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                if last == Some(snapshot.state) {
                    continue;
                }
                last = Some(snapshot.state);
                match &snapshot.server_info {
                    Some(info) => println!(
                        "{}: {} ({}, {})",
                        snapshot.state, info.hostname, info.ip, info.system
                    ),
                    None => println!("{}", snapshot.state),
                }
            }
        }
    }

    session.shutdown();
    Ok(())
}
