//! Bybit v5 volume fetcher.

use crate::rest::{fetch_json, num};
use tracing::debug;
use volwatch_core::{Exchange, VolumeRecord};

/// Fetches 24h turnover for Bybit ETH perpetuals.
///
/// Both the linear (USDT) and inverse (USD) tickers report
/// `turnover24h` already in quote currency, so no price multiplication
/// is needed and `base_volume` stays null.
pub struct BybitFetcher;

impl BybitFetcher {
    const TICKERS_URL: &'static str = "https://api.bybit.com/v5/market/tickers";

    /// (category, symbol, market label)
    const INSTRUMENTS: &'static [(&'static str, &'static str, &'static str)] = &[
        ("linear", "ETHUSDT", "ETHUSDT_PERP"),
        ("inverse", "ETHUSD", "ETHUSD_PERP"),
    ];

    pub async fn fetch(client: &reqwest::Client) -> Vec<VolumeRecord> {
        let mut out = Vec::new();

        for &(category, symbol, market) in Self::INSTRUMENTS {
            let params = [("category", category), ("symbol", symbol)];
            match fetch_json(client, Self::TICKERS_URL, &params).await {
                Ok(data) => match Self::parse_ticker(&data, market) {
                    Some(record) => out.push(record),
                    None => debug!("bybit: no usable ticker for {}", symbol),
                },
                Err(e) => debug!("bybit: {} fetch failed: {}", symbol, e),
            }
        }

        out
    }

    /// The v5 envelope carries tickers under `result.list`; a non-zero
    /// `retCode` means the request was rejected and the instrument is
    /// dropped for this poll.
    fn parse_ticker(data: &serde_json::Value, market: &str) -> Option<VolumeRecord> {
        if data["retCode"].as_i64() != Some(0) {
            return None;
        }

        let it = data["result"]["list"].as_array()?.first()?;
        Some(VolumeRecord::new(
            Exchange::Bybit,
            market,
            None,
            num(&it["turnover24h"]),
            it.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn envelope(ret_code: i64, list: serde_json::Value) -> serde_json::Value {
        json!({
            "retCode": ret_code,
            "retMsg": "OK",
            "result": {"category": "linear", "list": list}
        })
    }

    #[test]
    fn test_parse_ticker_reads_turnover() {
        let data = envelope(
            0,
            json!([{"symbol": "ETHUSDT", "turnover24h": "1250000000.75", "volume24h": "480000"}]),
        );

        let record = BybitFetcher::parse_ticker(&data, "ETHUSDT_PERP").unwrap();
        assert_eq!(record.exchange, Exchange::Bybit);
        assert_eq!(record.market, "ETHUSDT_PERP");
        assert_eq!(record.base_volume, None);
        assert_eq!(record.quote_volume_usd, Some(1_250_000_000.75));
    }

    #[test]
    fn test_parse_ticker_rejects_error_ret_code() {
        let data = envelope(10001, json!([{"turnover24h": "1"}]));
        assert!(BybitFetcher::parse_ticker(&data, "ETHUSDT_PERP").is_none());
    }

    #[test]
    fn test_parse_ticker_rejects_empty_list() {
        let data = envelope(0, json!([]));
        assert!(BybitFetcher::parse_ticker(&data, "ETHUSDT_PERP").is_none());
    }

    #[test]
    fn test_parse_ticker_non_numeric_turnover_is_null() {
        let data = envelope(0, json!([{"symbol": "ETHUSDT", "turnover24h": "unavailable"}]));
        let record = BybitFetcher::parse_ticker(&data, "ETHUSDT_PERP").unwrap();
        assert_eq!(record.quote_volume_usd, None);
    }
}
