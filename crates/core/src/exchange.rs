//! Exchange identifiers.

use serde::{Deserialize, Serialize};

/// Reporting venue for a volume observation.
///
/// Binance derivatives appear under two venue labels because the
/// USDT-margined and COIN-margined books live on separate endpoints
/// with different volume units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    BinanceFutures,
    BinanceCoinFutures,
    Bybit,
    Okx,
    Deribit,
    Bitmex,
}

impl Exchange {
    pub fn as_str(self) -> &'static str {
        match self {
            Exchange::BinanceFutures => "binance_futures",
            Exchange::BinanceCoinFutures => "binance_coin_futures",
            Exchange::Bybit => "bybit",
            Exchange::Okx => "okx",
            Exchange::Deribit => "deribit",
            Exchange::Bitmex => "bitmex",
        }
    }

    /// All venues, in the order they appear in summaries.
    pub fn all() -> &'static [Exchange] {
        &[
            Exchange::BinanceFutures,
            Exchange::BinanceCoinFutures,
            Exchange::Bybit,
            Exchange::Okx,
            Exchange::Deribit,
            Exchange::Bitmex,
        ]
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_as_str() {
        assert_eq!(Exchange::BinanceFutures.as_str(), "binance_futures");
        assert_eq!(Exchange::Okx.as_str(), "okx");
        assert_eq!(Exchange::Bitmex.as_str(), "bitmex");
    }

    #[test]
    fn test_exchange_display_matches_as_str() {
        for &exchange in Exchange::all() {
            assert_eq!(exchange.to_string(), exchange.as_str());
        }
    }

    #[test]
    fn test_exchange_all_order() {
        let all = Exchange::all();
        assert_eq!(all.first(), Some(&Exchange::BinanceFutures));
        assert_eq!(all.last(), Some(&Exchange::Bitmex));
        assert_eq!(all.len(), 6);
    }
}
