//! Blocking request pacing for shared public providers.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use governor::clock::{Clock, DefaultClock};
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};

/// A cloneable limiter allowing one request per interval.
///
/// Clones share the same budget, so all providers built from one limiter
/// are paced together.
#[derive(Clone)]
pub struct Limiter {
    inner: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    clock: DefaultClock,
}

impl Limiter {
    /// One request per `interval`. Returns `None` for a zero interval.
    pub fn per_interval(interval: Duration) -> Option<Self> {
        let quota = Quota::with_period(interval)?;
        Some(Self {
            inner: Arc::new(RateLimiter::direct(quota)),
            clock: DefaultClock::default(),
        })
    }

    /// Blocks the current thread until a request may be sent.
    pub fn wait(&self) {
        while let Err(not_until) = self.inner.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }
}

impl std::fmt::Debug for Limiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Limiter").finish_non_exhaustive()
    }
}
