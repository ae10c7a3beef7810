//! Poll snapshots and aggregate totals.

use crate::VolumeRecord;

/// The complete set of volume observations taken at one poll timestamp.
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Poll time in epoch seconds.
    pub ts: i64,
    pub records: Vec<VolumeRecord>,
    /// Sum of `quote_volume_usd` over contributing records.
    pub total_usd: f64,
}

impl Snapshot {
    /// Build a snapshot from one poll's records, summing USD volume
    /// over records with a non-null, non-zero quote volume.
    pub fn new(ts: i64, records: Vec<VolumeRecord>) -> Self {
        let total_usd = records
            .iter()
            .filter(|r| r.contributes())
            .filter_map(|r| r.quote_volume_usd)
            .sum();
        Self {
            ts,
            records,
            total_usd,
        }
    }
}

/// One aggregate total per poll, keyed by timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalEntry {
    pub ts: i64,
    pub total_usd: f64,
}

/// Percentage change of `new` against `old`.
///
/// `None` when there is no prior total or the prior total is zero.
pub fn pct_change(new: f64, old: Option<f64>) -> Option<f64> {
    match old {
        Some(old) if old != 0.0 => Some((new - old) / old * 100.0),
        _ => None,
    }
}
