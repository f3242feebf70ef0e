//! Client-side rate limiting for outbound API calls.

use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use super::cancel::CancelToken;
use super::errors::HttpError;

/// Length of the rolling window the request budget applies to.
const WINDOW: Duration = Duration::from_secs(60);

/// A rolling-window rate limiter for outbound requests.
///
/// Tracks the timestamps of requests admitted in the last sixty seconds.
/// When the window is full, [`acquire`](Self::acquire) waits until the
/// oldest timestamp ages out instead of failing the call, so a burst of
/// calls is smoothed rather than rejected. Waiters respect cancellation.
///
/// Each retry attempt acquires a fresh slot: retrying a request consumes
/// budget the same way a new request does.
#[derive(Debug)]
pub struct RateLimiter {
    requests_per_minute: usize,
    window: Mutex<VecDeque<Instant>>,
}

impl RateLimiter {
    /// Creates a limiter admitting `requests_per_minute` requests per
    /// rolling sixty-second window.
    #[must_use]
    pub fn new(requests_per_minute: u32) -> Self {
        Self {
            requests_per_minute: requests_per_minute as usize,
            window: Mutex::new(VecDeque::with_capacity(requests_per_minute as usize)),
        }
    }

    /// Acquires a request slot, waiting for the window to open if needed.
    ///
    /// The slot is consumed only on admission: a waiter that is cancelled
    /// never counts against the budget.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Cancelled`] if `cancel` fires before a slot
    /// opens.
    pub async fn acquire(&self, cancel: &CancelToken) -> Result<(), HttpError> {
        loop {
            if cancel.is_cancelled() {
                return Err(HttpError::Cancelled);
            }

            let wait_until = {
                let mut window = self.window.lock().await;
                let now = Instant::now();

                while let Some(oldest) = window.front() {
                    if now.duration_since(*oldest) >= WINDOW {
                        window.pop_front();
                    } else {
                        break;
                    }
                }

                if window.len() < self.requests_per_minute {
                    window.push_back(now);
                    return Ok(());
                }

                // Window is full; the oldest entry decides when it reopens.
                *window.front().unwrap_or(&now) + WINDOW
            };

            let pause = wait_until.saturating_duration_since(Instant::now());
            debug!(
                wait_ms = pause.as_millis() as u64,
                "rate limit window full, waiting for a slot"
            );

            tokio::select! {
                () = tokio::time::sleep_until(wait_until) => {}
                () = cancel.cancelled() => return Err(HttpError::Cancelled),
            }
        }
    }

    /// Returns the number of requests admitted in the current window.
    pub async fn in_flight(&self) -> usize {
        let mut window = self.window.lock().await;
        let now = Instant::now();
        while let Some(oldest) = window.front() {
            if now.duration_since(*oldest) >= WINDOW {
                window.pop_front();
            } else {
                break;
            }
        }
        window.len()
    }
}
