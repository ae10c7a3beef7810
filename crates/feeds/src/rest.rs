//! Shared HTTP plumbing for exchange REST calls.

use crate::error::FeedError;
use std::time::Duration;

/// Per-request timeout for every exchange call. A request that exceeds
/// it counts as a failed instrument, not a stalled cycle.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the shared HTTP client used for all exchange requests.
pub fn build_client() -> Result<reqwest::Client, FeedError> {
    Ok(reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?)
}

/// GET a JSON document, enforcing a 2xx status.
pub async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
    params: &[(&str, &str)],
) -> Result<serde_json::Value, FeedError> {
    let response = client.get(url).query(params).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status.as_u16()));
    }

    response
        .json::<serde_json::Value>()
        .await
        .map_err(|e| FeedError::Parse(e.to_string()))
}

/// Tolerant numeric field access: accepts JSON numbers and numeric
/// strings, yields `None` for anything else.
pub fn num(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// `base × price` USD notional. Nulls out when either factor is
/// missing or zero.
pub fn notional(base: Option<f64>, price: Option<f64>) -> Option<f64> {
    match (base, price) {
        (Some(b), Some(p)) if b != 0.0 && p != 0.0 => Some(b * p),
        _ => None,
    }
}
