//! Retry loop with linear backoff and rate-limit handling.

use std::future::Future;
use std::time::Duration;

use log::{debug, warn};
use reqwest::{Response, StatusCode};
use tokio::time::sleep;

/// Maximum number of attempts for one logical request.
pub const MAX_RETRIES: usize = 3;

/// Seconds multiplier for the linear backoff delay.
pub const BACKOFF_FACTOR: f64 = 1.0;

/// Bounds and pacing for the retry loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first. Must be at least 1.
    pub max_retries: usize,
    /// Seconds multiplier for the linear backoff; negative counts as zero.
    pub backoff_factor: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: MAX_RETRIES,
            backoff_factor: BACKOFF_FACTOR,
        }
    }
}

impl RetryPolicy {
    /// Wait after attempt `index` (0-based): `backoff_factor * (index + 1)`
    /// seconds. The delay grows linearly, not exponentially.
    pub fn delay(&self, index: usize) -> Duration {
        Duration::from_secs_f64(self.backoff_factor.max(0.0) * (index + 1) as f64)
    }
}

/// Outcome of a single request attempt.
///
/// Transport failures and rate limiting both consume one attempt slot but
/// exhaust differently: the last transport error propagates, while the last
/// 429 response is handed back as a plain response for the caller's own
/// status check.
#[derive(Debug)]
pub(crate) enum Attempt {
    /// The server answered with anything other than 429; always final.
    Done(Response),
    /// The server answered 429; eligible for another attempt.
    RateLimited(Response),
    /// The request never produced a response.
    Transport(reqwest::Error),
}

/// Classify the result of one send into an [`Attempt`].
pub(crate) fn classify_response(result: Result<Response, reqwest::Error>) -> Attempt {
    match result {
        Ok(response) if response.status() == StatusCode::TOO_MANY_REQUESTS => {
            Attempt::RateLimited(response)
        }
        Ok(response) => Attempt::Done(response),
        Err(error) => Attempt::Transport(error),
    }
}

/// Drive `attempt` until it yields a non-429 response, the rate-limit
/// budget runs out, or a transport error survives the final attempt.
///
/// A 429 sleeps the backoff delay even on the final attempt before the
/// last-seen response is returned; a final transport error propagates
/// immediately with no trailing sleep.
pub(crate) async fn run<F, Fut>(
    policy: &RetryPolicy,
    attempt: F,
) -> Result<Response, reqwest::Error>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Attempt>,
{
    // A policy asking for zero attempts still issues one request.
    let attempts = policy.max_retries.max(1);
    let mut index = 0;

    loop {
        match attempt().await {
            Attempt::Done(response) => return Ok(response),
            Attempt::RateLimited(response) => {
                let wait = policy.delay(index);
                warn!(
                    "Rate limit hit, retrying in {:.1}s... (attempt {}/{})",
                    wait.as_secs_f64(),
                    index + 1,
                    attempts
                );
                sleep(wait).await;
                if index + 1 >= attempts {
                    // Budget exhausted: hand the last 429 back as-is and
                    // leave the status check to the caller.
                    return Ok(response);
                }
            }
            Attempt::Transport(error) => {
                if index + 1 >= attempts {
                    return Err(error);
                }
                let wait = policy.delay(index);
                debug!(
                    "Request failed ({}), retrying in {:.1}s... (attempt {}/{})",
                    error,
                    wait.as_secs_f64(),
                    index + 1,
                    attempts
                );
                sleep(wait).await;
            }
        }
        index += 1;
    }
}
