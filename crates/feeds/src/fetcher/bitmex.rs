//! BitMEX instrument volume fetcher.

use crate::rest::{fetch_json, notional, num};
use tracing::debug;
use volwatch_core::{Exchange, VolumeRecord};

/// Fetches 24h volume for the BitMEX ETHUSDT perpetual.
///
/// `turnover24h` on ETHUSDT is already quote currency and is preferred;
/// when it is missing or zero, `volume24h × lastPrice` stands in.
pub struct BitmexFetcher;

impl BitmexFetcher {
    const INSTRUMENT_URL: &'static str = "https://www.bitmex.com/api/v1/instrument";

    pub async fn fetch(client: &reqwest::Client) -> Vec<VolumeRecord> {
        let params = [
            ("symbol", "ETHUSDT"),
            ("columns", "symbol,volume24h,turnover24h,lastPrice"),
        ];
        match fetch_json(client, Self::INSTRUMENT_URL, &params).await {
            Ok(data) => Self::parse_instrument(&data).into_iter().collect(),
            Err(e) => {
                debug!("bitmex: ETHUSDT fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    fn parse_instrument(data: &serde_json::Value) -> Option<VolumeRecord> {
        let it = data.as_array()?.first()?;

        let turnover = num(&it["turnover24h"]).filter(|t| *t != 0.0);
        let record = match turnover {
            Some(t) => VolumeRecord::new(Exchange::Bitmex, "ETHUSDT_PERP", None, Some(t), it.clone()),
            None => {
                let base = num(&it["volume24h"]);
                let last = num(&it["lastPrice"]);
                VolumeRecord::new(
                    Exchange::Bitmex,
                    "ETHUSDT_PERP",
                    base,
                    notional(base, last),
                    it.clone(),
                )
            }
        };

        Some(record)
    }
}
