//! Bounded, fixed-delay retry for the send step.
//!
//! Only the dispatch of a request goes through `retry`. Status checks and
//! body decoding happen afterwards, once, on whichever response came back.

use std::thread;
use std::time::Duration;

use tracing::debug;

/// How many times to attempt an operation and how long to pause in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first. 0 behaves like 1.
    pub max_attempts: u32,
    /// Fixed pause between attempts. No pause follows the last attempt.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Policy applied to every send: 3 attempts, 100ms apart.
    pub const SEND: RetryPolicy = RetryPolicy {
        max_attempts: 3,
        delay: Duration::from_millis(100),
    };
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::SEND
    }
}

/// Run `op` until it succeeds, fails with an error `is_retryable` rejects,
/// or `policy.max_attempts` is used up. Returns the last error in the
/// latter two cases. `op` receives the 1-based attempt number.
pub fn retry<T, E, F, R>(policy: &RetryPolicy, is_retryable: R, mut op: F) -> Result<T, E>
where
    F: FnMut(u32) -> Result<T, E>,
    R: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt) {
            Ok(value) => return Ok(value),
            Err(err) if attempt < max_attempts && is_retryable(&err) => {
                debug!(
                    attempt,
                    max_attempts,
                    delay = ?policy.delay,
                    error = %err,
                    "attempt failed, retrying"
                );
                thread::sleep(policy.delay);
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}
