//! Alert thresholds and snapshot summaries.

use volwatch_core::{pct_change, Snapshot};

/// Thresholds on the total-volume move between consecutive polls.
#[derive(Debug, Clone, Copy)]
pub struct AlertThresholds {
    /// Minimum absolute percentage change vs the prior poll.
    pub change_pct: f64,
    /// Minimum absolute USD change vs the prior poll. A threshold of 0
    /// is satisfied by any move once a prior total exists.
    pub change_usd: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            change_pct: 10.0,
            change_usd: 0.0,
        }
    }
}

/// Whether the move vs the prior poll's total crosses either threshold.
///
/// The first-ever poll has nothing to compare against and never
/// alerts. An undefined percentage (prior total of zero) never fires
/// on its own; the absolute check still applies.
pub fn should_alert(
    current_total: f64,
    last_total: Option<f64>,
    thresholds: &AlertThresholds,
) -> bool {
    let Some(last) = last_total else {
        return false;
    };

    if let Some(pc) = pct_change(current_total, Some(last)) {
        if pc.abs() >= thresholds.change_pct {
            return true;
        }
    }

    (current_total - last).abs() >= thresholds.change_usd
}

/// Human-readable summary of a snapshot, formatted for Telegram HTML.
///
/// Always written to stdout each cycle; dispatched to Telegram only
/// when the alert condition fires.
pub fn format_summary(snapshot: &Snapshot, last: Option<f64>, prev: Option<f64>) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "<b>ETH Futures Volume (24h)</b> — <i>{}</i>",
        format_ts(snapshot.ts)
    ));
    lines.push(format!(
        "Total notional: <b>${}</b>",
        format_usd(snapshot.total_usd)
    ));

    if let Some(last) = last {
        lines.push(format!("Δ vs last: {}", format_delta(snapshot.total_usd, last)));
    }
    if let Some(prev) = prev {
        lines.push(format!("Δ vs prev: {}", format_delta(snapshot.total_usd, prev)));
    }

    lines.push("— breakdown —".to_string());
    for record in snapshot.records.iter().filter(|r| r.contributes()) {
        if let Some(quote) = record.quote_volume_usd {
            lines.push(format!(
                "{}: {} → ${}",
                record.exchange,
                record.market,
                format_usd(quote)
            ));
        }
    }

    lines.join("\n")
}

fn format_delta(current: f64, reference: f64) -> String {
    let change = current - reference;
    let pc = pct_change(current, Some(reference)).unwrap_or(0.0);
    format!("{} USD ({:+.2}%)", format_signed_usd(change), pc)
}

fn format_ts(ts: i64) -> String {
    match chrono::DateTime::from_timestamp(ts, 0) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => ts.to_string(),
    }
}

/// Whole-dollar amount with thousands separators.
fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let digits = format!("{:.0}", value.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

fn format_signed_usd(value: f64) -> String {
    if value >= 0.0 {
        format!("+{}", format_usd(value))
    } else {
        format_usd(value)
    }
}
