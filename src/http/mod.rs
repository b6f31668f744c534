//! HTTP transport: request descriptions, the shared client, and retry.

mod client;
mod request;
mod retry;

pub use client::HttpClient;
pub use request::{ApiRequest, Method};
pub use retry::{BACKOFF_FACTOR, MAX_RETRIES, RetryPolicy};
