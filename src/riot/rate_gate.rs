use std::num::NonZeroU32;
use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;

/// Gate enforcing a minimum interval between two outbound requests.
///
/// `requests` permits are spread evenly over `interval` and no burst is
/// allowed, so two grants are always at least `interval / requests` apart.
#[derive(Debug)]
pub struct RateGate {
    limiter: DefaultDirectRateLimiter,
    spacing: Duration,
}

impl RateGate {
    pub fn new(requests: NonZeroU32, interval: Duration) -> Self {
        let spacing = interval / requests.get();
        let quota = Quota::with_period(spacing)
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MAX))
            .allow_burst(nonzero!(1_u32));

        Self {
            limiter: RateLimiter::direct(quota),
            spacing,
        }
    }

    /// Wait until the next request is allowed. Dropping the future cancels the wait.
    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }

    /// Minimum delay between two grants.
    pub fn spacing(&self) -> Duration {
        self.spacing
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[tokio::test]
    async fn first_permit_is_immediate() {
        let gate = RateGate::new(nonzero!(1_u32), Duration::from_secs(5));

        let start = Instant::now();
        gate.acquire().await;

        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[tokio::test]
    async fn permits_are_spaced_by_the_interval() {
        let interval = Duration::from_millis(150);
        let gate = RateGate::new(nonzero!(1_u32), interval);
        let calls = 4;

        let start = Instant::now();
        for _ in 0..calls {
            gate.acquire().await;
        }
        let elapsed = start.elapsed();

        // Limiter and test use different clocks, allow for sub-millisecond skew.
        let expected = interval * (calls - 1);
        assert!(
            elapsed + Duration::from_millis(2) >= expected,
            "{elapsed:?} < {expected:?}"
        );
    }

    #[test]
    fn requests_per_interval_sets_spacing() {
        let gate = RateGate::new(nonzero!(4_u32), Duration::from_secs(2));
        assert_eq!(gate.spacing(), Duration::from_millis(500));
    }

    #[tokio::test]
    async fn zero_interval_never_blocks() {
        let gate = RateGate::new(nonzero!(1_u32), Duration::ZERO);

        let start = Instant::now();
        for _ in 0..100 {
            gate.acquire().await;
        }

        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
