//! Pacing gate for rate-limited services.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

/// Serializes requests so that consecutive acquisitions are at least
/// `min_interval` apart, process-wide for whoever shares the clone.
///
/// Nominatim's usage policy allows one request per second; every geocoding
/// call goes through one shared gate regardless of which tool triggered it.
/// All clones share the same schedule.
#[derive(Clone)]
pub struct RequestGate {
    last_pass: Arc<Mutex<Option<Instant>>>,
    min_interval: Duration,
}

impl RequestGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_pass: Arc::new(Mutex::new(None)),
            min_interval,
        }
    }

    /// Waits until the interval since the previous pass has elapsed.
    ///
    /// Concurrent callers queue on the internal lock and are released one
    /// interval apart, in lock acquisition order.
    pub async fn acquire(&self) {
        let mut last = self.last_pass.lock().await;
        let now = Instant::now();
        let next = match *last {
            Some(prev) => {
                let earliest = prev + self.min_interval;
                if earliest > now { earliest } else { now }
            }
            None => now,
        };
        tokio::time::sleep_until(next).await;
        *last = Some(next);
    }
}
