//! Outbound request spacing.
//!
//! EDGAR tolerates a handful of requests per second per client. All
//! outbound calls go through one [`RateGate`], which enforces a minimum
//! interval (plus a small random jitter) between consecutive requests.

use crate::config::RatePolicy;
use rand::Rng;
use std::time::Duration;
use tokio::time::Instant;

/// Enforces minimum spacing between outbound requests.
///
/// Single-consumer: the pipeline is sequential, so no cross-task queuing
/// is needed.
pub struct RateGate {
    policy: RatePolicy,
    last_call: Option<Instant>,
}

impl RateGate {
    /// Create a gate with the given policy. The first `wait` never sleeps.
    pub fn new(policy: RatePolicy) -> Self {
        Self {
            policy,
            last_call: None,
        }
    }

    /// Block until at least `min_interval` + jitter has elapsed since the
    /// previous call returned, then record the new last-call instant.
    pub async fn wait(&mut self) {
        if let Some(last) = self.last_call {
            let jitter = if self.policy.jitter.is_zero() {
                Duration::ZERO
            } else {
                let max_ms = self.policy.jitter.as_millis() as u64;
                Duration::from_millis(rand::thread_rng().gen_range(0..=max_ms))
            };
            let due = last + self.policy.min_interval + jitter;
            let now = Instant::now();
            if due > now {
                tokio::time::sleep(due - now).await;
            }
        }
        self.last_call = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(min_ms: u64, jitter_ms: u64) -> RatePolicy {
        RatePolicy {
            min_interval: Duration::from_millis(min_ms),
            jitter: Duration::from_millis(jitter_ms),
        }
    }

    #[tokio::test]
    async fn test_first_wait_returns_immediately() {
        let mut gate = RateGate::new(policy(500, 0));
        let start = Instant::now();
        gate.wait().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_wait_enforces_min_interval() {
        let mut gate = RateGate::new(policy(500, 0));
        gate.wait().await;
        let start = Instant::now();
        gate.wait().await;
        assert!(start.elapsed() >= Duration::from_millis(500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_elapsed_interval_is_credited() {
        let mut gate = RateGate::new(policy(500, 0));
        gate.wait().await;
        tokio::time::sleep(Duration::from_millis(600)).await;
        let start = Instant::now();
        gate.wait().await;
        // Spacing already satisfied, so no additional sleep.
        assert!(start.elapsed() < Duration::from_millis(10));
    }
}
