//! Minimum-interval request throttle.
//!
//! Consecutive network calls are spaced by at least `60 / rate_limit`
//! seconds. There is no burst allowance: the throttle only remembers when
//! the last call went out.

use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_request: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: None,
        }
    }

    /// Throttle for `rate_limit` requests per minute. A limit of 0 is treated as 1.
    pub fn per_minute(rate_limit: u32) -> Self {
        Self::new(Duration::from_secs_f64(60.0 / f64::from(rate_limit.max(1))))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn last_request(&self) -> Option<Instant> {
        self.last_request
    }

    /// How long a call made at `now` would still have to wait.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_request {
            Some(last) => self.interval.saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Sleep until the next call is allowed, then record it as made.
    pub async fn wait(&mut self) {
        let wait = self.remaining(Instant::now());
        if !wait.is_zero() {
            debug!("Rate limiting: waiting {:.2} seconds", wait.as_secs_f64());
            tokio::time::sleep(wait).await;
        }
        self.last_request = Some(Instant::now());
    }
}
