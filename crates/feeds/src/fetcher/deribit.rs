//! Deribit futures volume fetcher.

use crate::rest::{fetch_json, notional, num};
use tracing::debug;
use volwatch_core::{Exchange, VolumeRecord};

/// Fetches 24h volume across all listed Deribit ETH futures.
///
/// The book summary reports `volume` in base ETH per instrument;
/// multiplying by `last` (USD) gives the notional.
pub struct DeribitFetcher;

impl DeribitFetcher {
    const SUMMARY_URL: &'static str =
        "https://www.deribit.com/api/v2/public/get_book_summary_by_currency";

    pub async fn fetch(client: &reqwest::Client) -> Vec<VolumeRecord> {
        let params = [("currency", "ETH"), ("kind", "future")];
        let data = match fetch_json(client, Self::SUMMARY_URL, &params).await {
            Ok(data) => data,
            Err(e) => {
                debug!("deribit: book summary fetch failed: {}", e);
                return Vec::new();
            }
        };

        Self::parse_summaries(&data)
    }

    /// One record per instrument in `result`.
    fn parse_summaries(data: &serde_json::Value) -> Vec<VolumeRecord> {
        let Some(arr) = data["result"].as_array() else {
            return Vec::new();
        };

        arr.iter()
            .map(|it| {
                let base = num(&it["volume"]);
                let last = num(&it["last"]);
                let market = it["instrument_name"].as_str().unwrap_or("ETH-FUT");
                VolumeRecord::new(
                    Exchange::Deribit,
                    market,
                    base,
                    notional(base, last),
                    it.clone(),
                )
            })
            .collect()
    }
}
