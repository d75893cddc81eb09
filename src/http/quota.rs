//! Request quota for the shared transport
//!
//! The fetch engine already waits a fixed delay before every page. The quota
//! sits on the transport instead, so sequential fetches that reuse one
//! transport stay under a per-second budget as a whole.

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;

/// Token bucket settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaConfig {
    /// Sustained requests per second
    pub requests_per_second: u32,
    /// Requests allowed back to back before throttling
    pub burst_size: u32,
}

impl Default for QuotaConfig {
    fn default() -> Self {
        // Matches the 200ms page delay.
        Self {
            requests_per_second: 5,
            burst_size: 1,
        }
    }
}

impl QuotaConfig {
    /// Create a new quota config
    pub fn new(requests_per_second: u32, burst_size: u32) -> Self {
        Self {
            requests_per_second,
            burst_size,
        }
    }
}

/// Token bucket shared by every request sent through one transport
#[derive(Clone)]
pub struct RequestQuota {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>>,
}

impl RequestQuota {
    /// Create a quota; zero values are raised to one
    pub fn new(config: &QuotaConfig) -> Self {
        let per_second = NonZeroU32::new(config.requests_per_second).unwrap_or(NonZeroU32::MIN);
        let burst = NonZeroU32::new(config.burst_size).unwrap_or(NonZeroU32::MIN);
        let quota = Quota::per_second(per_second).allow_burst(burst);

        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Wait until the next request may go out
    pub async fn acquire(&self) {
        self.limiter.until_ready().await;
    }

    /// Take a permit if one is free right now
    pub fn try_acquire(&self) -> bool {
        self.limiter.check().is_ok()
    }
}

impl std::fmt::Debug for RequestQuota {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestQuota").finish_non_exhaustive()
    }
}
