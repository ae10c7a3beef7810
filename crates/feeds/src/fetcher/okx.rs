//! OKX swap volume fetcher.

use crate::rest::{fetch_json, num};
use futures_util::future::join_all;
use tracing::debug;
use volwatch_core::{Exchange, VolumeRecord};

/// Fetches 24h volume for both OKX ETH swaps.
///
/// `volCcy24h` is the 24h volume already in quote currency (USDT or
/// USD depending on the instrument); `vol24h` is base volume.
pub struct OkxFetcher;

impl OkxFetcher {
    const TICKER_URL: &'static str = "https://www.okx.com/api/v5/market/ticker";

    const INSTRUMENTS: &'static [&'static str] = &["ETH-USDT-SWAP", "ETH-USD-SWAP"];

    pub async fn fetch(client: &reqwest::Client) -> Vec<VolumeRecord> {
        let fetches: Vec<_> = Self::INSTRUMENTS
            .iter()
            .map(|&inst| Self::fetch_instrument(client, inst))
            .collect();

        join_all(fetches).await.into_iter().flatten().collect()
    }

    async fn fetch_instrument(client: &reqwest::Client, inst: &str) -> Option<VolumeRecord> {
        match fetch_json(client, Self::TICKER_URL, &[("instId", inst)]).await {
            Ok(data) => {
                let record = Self::parse_ticker(&data, inst);
                if record.is_none() {
                    debug!("okx: empty data array for {}", inst);
                }
                record
            }
            Err(e) => {
                debug!("okx: {} fetch failed: {}", inst, e);
                None
            }
        }
    }

    fn parse_ticker(data: &serde_json::Value, inst: &str) -> Option<VolumeRecord> {
        let it = data["data"].as_array()?.first()?;
        Some(VolumeRecord::new(
            Exchange::Okx,
            inst,
            num(&it["vol24h"]),
            num(&it["volCcy24h"]),
            it.clone(),
        ))
    }
}
