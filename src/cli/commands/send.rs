//! `filedrop send <files>...` – upload files as a single batch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use filedrop::{BatchOutcome, BatchSummary, FileHandle, TransferSession};

pub async fn run_send(session: &TransferSession, paths: &[PathBuf]) -> Result<()> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let file = FileHandle::open(path)
            .await
            .with_context(|| format!("could not read {}", path.display()))?;
        files.push(file);
    }

    // No schedule runs for a one-shot command, so the monitor needs one probe.
    session.monitor().probe().await;
    let results = session.send_files(&files).await?;

    for result in &results {
        if result.success {
            let size = result.display_size().unwrap_or_else(|| "-".to_string());
            println!("{:<4} {:<10} {}", "OK", size, result.filename);
        } else {
            let error = result.error.as_deref().unwrap_or("unknown error");
            println!("{:<4} {:<10} {} ({})", "FAIL", "-", result.filename, error);
        }
    }

    let summary = BatchSummary::from_results(&results);
    match summary.outcome() {
        BatchOutcome::AllSucceeded => println!("Sent {} of {}", summary.succeeded, files.len()),
        BatchOutcome::PartialFailure => println!(
            "Sent {} of {}, {} failed",
            summary.succeeded,
            files.len(),
            summary.failed
        ),
        BatchOutcome::AllFailed | BatchOutcome::Empty => println!("Nothing was sent"),
    }
    Ok(())
}
