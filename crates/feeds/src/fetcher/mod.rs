//! Exchange-specific volume fetchers.
//!
//! Every fetcher swallows its own failures: a fetch or parse error for
//! one instrument drops that instrument from the poll, never the cycle.

mod binance;
mod bitmex;
mod bybit;
mod deribit;
mod okx;

pub use binance::BinanceFetcher;
pub use bitmex::BitmexFetcher;
pub use bybit::BybitFetcher;
pub use deribit::DeribitFetcher;
pub use okx::OkxFetcher;
