//! Process configuration, read once at startup.

use volwatch_alerts::AlertThresholds;

/// Environment-derived settings for the poll loop.
///
/// Malformed values fall back to their defaults rather than aborting.
#[derive(Debug, Clone)]
pub struct Config {
    pub thresholds: AlertThresholds,
    /// Seconds between poll cycles.
    pub poll_seconds: u64,
    /// Perform exactly one cycle, then exit 0.
    pub run_once: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thresholds: AlertThresholds::default(),
            poll_seconds: 300,
            run_once: false,
        }
    }
}

impl Config {
    /// Read ALERT_CHANGE_PCT, ALERT_CHANGE_USD, POLL_SECONDS and
    /// RUN_ONCE from the environment.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            thresholds: AlertThresholds {
                change_pct: env_parse("ALERT_CHANGE_PCT", defaults.thresholds.change_pct),
                change_usd: env_parse("ALERT_CHANGE_USD", defaults.thresholds.change_usd),
            },
            poll_seconds: env_parse("POLL_SECONDS", defaults.poll_seconds),
            run_once: env_bool("RUN_ONCE"),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn env_bool(key: &str) -> bool {
    std::env::var(key)
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
