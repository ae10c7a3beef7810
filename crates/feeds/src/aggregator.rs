//! Concurrent fan-out across all exchange fetchers.

use crate::fetcher::{BinanceFetcher, BitmexFetcher, BybitFetcher, DeribitFetcher, OkxFetcher};
use tracing::debug;
use volwatch_core::VolumeRecord;

/// Fetch 24h volume from every exchange concurrently.
///
/// Fetchers are independent; one failing entirely just contributes
/// zero records. Results keep a fixed display order regardless of
/// which request finishes first.
pub async fn fetch_all_volumes(client: &reqwest::Client) -> Vec<VolumeRecord> {
    let (binance, bybit, okx, deribit, bitmex) = tokio::join!(
        BinanceFetcher::fetch(client),
        BybitFetcher::fetch(client),
        OkxFetcher::fetch(client),
        DeribitFetcher::fetch(client),
        BitmexFetcher::fetch(client),
    );

    let mut records = Vec::new();
    records.extend(binance);
    records.extend(bybit);
    records.extend(okx);
    records.extend(deribit);
    records.extend(bitmex);

    debug!("aggregated {} volume records", records.len());
    records
}
