//! Normalized volume observations.

use crate::Exchange;
use serde::{Deserialize, Serialize};

/// One market's 24h volume at one poll, normalized to USD notional.
///
/// `quote_volume_usd` is `None` when the exchange's figures could not
/// be normalized (missing price, non-numeric field). The raw ticker
/// payload is retained verbatim for later inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolumeRecord {
    pub exchange: Exchange,
    pub market: String,
    /// 24h volume in base-asset units, when the exchange reports one.
    pub base_volume: Option<f64>,
    /// 24h volume in USD/USDT notional.
    pub quote_volume_usd: Option<f64>,
    pub raw: serde_json::Value,
}

impl VolumeRecord {
    pub fn new(
        exchange: Exchange,
        market: impl Into<String>,
        base_volume: Option<f64>,
        quote_volume_usd: Option<f64>,
        raw: serde_json::Value,
    ) -> Self {
        Self {
            exchange,
            market: market.into(),
            base_volume,
            quote_volume_usd,
            raw,
        }
    }

    /// Whether this record contributes to a snapshot total.
    /// Null and zero quote volumes are kept in the record list but
    /// excluded from the sum.
    pub fn contributes(&self) -> bool {
        matches!(self.quote_volume_usd, Some(q) if q != 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contributes() {
        let raw = json!({});
        let with_volume = VolumeRecord::new(
            Exchange::Bybit,
            "ETHUSDT_PERP",
            None,
            Some(1_000_000.0),
            raw.clone(),
        );
        let zero = VolumeRecord::new(Exchange::Bybit, "ETHUSD_PERP", None, Some(0.0), raw.clone());
        let null = VolumeRecord::new(Exchange::Bybit, "ETHUSD_PERP", None, None, raw);

        assert!(with_volume.contributes());
        assert!(!zero.contributes());
        assert!(!null.contributes());
    }
}
