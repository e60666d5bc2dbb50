//! Backoff policy applied when the Riot API throttles a request.

use std::time::Duration;

use reqwest::header::{HeaderMap, RETRY_AFTER};

/// Total attempts for a single request, the first one included.
pub const MAX_ATTEMPTS: u32 = 3;

/// Delay before retrying after the given (1-based) throttled attempt: 2s, 4s, 8s...
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2_u64.saturating_pow(attempt.max(1)))
}

/// Delay requested by the server through a `Retry-After: <seconds>` header.
pub fn retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs)
}

/// How long to wait after a throttled attempt.
pub fn throttle_delay(headers: &HeaderMap, attempt: u32) -> Duration {
    retry_after(headers).unwrap_or_else(|| backoff_delay(attempt))
}
