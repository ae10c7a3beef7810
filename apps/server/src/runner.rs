//! The poll loop.

use crate::config::Config;
use std::time::Duration;
use tracing::info;
use volwatch_alerts::{format_summary, should_alert, TelegramNotifier};
use volwatch_core::Snapshot;
use volwatch_feeds::{build_client, fetch_all_volumes};
use volwatch_store::{Database, DbError};

/// Drive poll cycles until single-shot completion.
///
/// Storage failures propagate and terminate the process; fetch and
/// delivery failures degrade to a smaller snapshot or a lost alert.
pub async fn run(
    config: &Config,
    db: &Database,
    notifier: Option<&TelegramNotifier>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let client = build_client()?;

    loop {
        poll_cycle(config, db, &client, notifier).await?;

        if config.run_once {
            info!("single-shot run complete");
            return Ok(());
        }

        tokio::time::sleep(Duration::from_secs(config.poll_seconds)).await;
    }
}

/// One snapshot-persist-evaluate cycle.
async fn poll_cycle(
    config: &Config,
    db: &Database,
    client: &reqwest::Client,
    notifier: Option<&TelegramNotifier>,
) -> Result<(), DbError> {
    let ts = chrono::Utc::now().timestamp();

    // Prior totals are read before this cycle's upsert: `last` is the
    // prior poll's total, never the one being written now.
    let (last, prev) = db.last_two_totals().await?;

    let records = fetch_all_volumes(client).await;
    let snapshot = Snapshot::new(ts, records);
    info!(
        ts,
        records = snapshot.records.len(),
        total_usd = snapshot.total_usd,
        "snapshot taken"
    );

    for record in &snapshot.records {
        db.insert_record(ts, record).await?;
    }
    db.upsert_total(ts, snapshot.total_usd).await?;

    let last_total = last.map(|t| t.total_usd);
    let prev_total = prev.map(|t| t.total_usd);

    let summary = format_summary(&snapshot, last_total, prev_total);
    println!("{}", summary);

    if should_alert(snapshot.total_usd, last_total, &config.thresholds) {
        info!("alert threshold crossed");
        if let Some(notifier) = notifier {
            notifier.send(&summary).await;
        }
    }

    Ok(())
}
