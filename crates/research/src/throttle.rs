//! Outbound request pacing.
//!
//! The pipeline inserts fixed politeness delays between successive hits
//! to the same upstream: one between page fetches during synthesis, a
//! longer one between search-engine queries. The policy is a trait so
//! tests can substitute an immediate no-op.

use std::time::Duration;

/// Pacing policy for outbound requests.
#[async_trait::async_trait]
pub trait Throttle: Send + Sync {
    /// Wait between consecutive source-page fetches.
    async fn between_sources(&self);

    /// Wait between consecutive search-engine queries.
    async fn between_queries(&self);
}

/// Fixed-interval pacing backed by `tokio::time::sleep`.
pub struct FixedThrottle {
    source_delay: Duration,
    query_delay: Duration,
}

impl FixedThrottle {
    pub fn new(source_delay: Duration, query_delay: Duration) -> Self {
        Self {
            source_delay,
            query_delay,
        }
    }

    /// Build from millisecond settings as they appear in configuration.
    pub fn from_millis(source_delay_ms: u64, query_delay_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(source_delay_ms),
            Duration::from_millis(query_delay_ms),
        )
    }
}

#[async_trait::async_trait]
impl Throttle for FixedThrottle {
    async fn between_sources(&self) {
        tokio::time::sleep(self.source_delay).await;
    }

    async fn between_queries(&self) {
        tokio::time::sleep(self.query_delay).await;
    }
}

/// No-op pacing for tests.
pub struct NoThrottle;

#[async_trait::async_trait]
impl Throttle for NoThrottle {
    async fn between_sources(&self) {}

    async fn between_queries(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_throttle_sleeps_configured_interval() {
        let throttle = FixedThrottle::from_millis(20, 40);

        let before = std::time::Instant::now();
        throttle.between_sources().await;
        assert!(before.elapsed() >= Duration::from_millis(20));

        let before = std::time::Instant::now();
        throttle.between_queries().await;
        assert!(before.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_no_throttle_returns_immediately() {
        let throttle = NoThrottle;
        throttle.between_sources().await;
        throttle.between_queries().await;
    }
}
