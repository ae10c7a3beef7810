//! Binance derivatives volume fetcher.

use crate::rest::{fetch_json, notional, num};
use tracing::debug;
use volwatch_core::{Exchange, VolumeRecord};

/// Fetches 24h volume for Binance ETH perpetuals.
///
/// The USDT-margined book reports `quoteVolume` already in USDT
/// notional; the COIN-margined book reports contract volume in ETH,
/// which needs a last-price multiplication.
pub struct BinanceFetcher;

impl BinanceFetcher {
    const FAPI_URL: &'static str = "https://fapi.binance.com/fapi/v1/ticker/24hr";
    const DAPI_URL: &'static str = "https://dapi.binance.com/dapi/v1/ticker/24hr";

    pub async fn fetch(client: &reqwest::Client) -> Vec<VolumeRecord> {
        let mut out = Vec::new();

        match fetch_json(client, Self::FAPI_URL, &[("symbol", "ETHUSDT")]).await {
            Ok(data) => out.push(Self::parse_usdt_perp(&data)),
            Err(e) => debug!("binance_futures: ETHUSDT fetch failed: {}", e),
        }

        match fetch_json(client, Self::DAPI_URL, &[("symbol", "ETHUSD_PERP")]).await {
            Ok(data) => out.push(Self::parse_coin_perp(&data)),
            Err(e) => debug!("binance_coin_futures: ETHUSD_PERP fetch failed: {}", e),
        }

        out
    }

    /// USDT-margined perpetual: `quoteVolume` is quote turnover.
    fn parse_usdt_perp(data: &serde_json::Value) -> VolumeRecord {
        VolumeRecord::new(
            Exchange::BinanceFutures,
            "ETHUSDT_PERP",
            num(&data["volume"]),
            num(&data["quoteVolume"]),
            data.clone(),
        )
    }

    /// COIN-margined perpetual: `volume` is in ETH contracts.
    fn parse_coin_perp(data: &serde_json::Value) -> VolumeRecord {
        let base = num(&data["volume"]);
        let last = num(&data["lastPrice"]);
        VolumeRecord::new(
            Exchange::BinanceCoinFutures,
            "ETHUSD_PERP",
            base,
            notional(base, last),
            data.clone(),
        )
    }
}
