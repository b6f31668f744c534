//! HTTP client that sends [`ApiRequest`]s through the retry loop.

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Response};

use super::request::{ApiRequest, Method};
use super::retry::{self, RetryPolicy};

/// HTTP client with built-in retry for rate limits and transport errors.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    policy: RetryPolicy,
}

impl HttpClient {
    /// Wraps a reqwest client with the default retry policy.
    pub fn new(client: Client) -> Self {
        Self::with_policy(client, RetryPolicy::default())
    }

    /// Wraps a reqwest client with a custom retry policy.
    pub fn with_policy(client: Client, policy: RetryPolicy) -> Self {
        Self { client, policy }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// The retry policy applied to every request.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Sends `request`, retrying on 429 and on transport errors.
    ///
    /// Every response that is not a 429 comes back as `Ok`, HTTP errors
    /// included; callers decide what a 404 or a 500 means for them. An
    /// `Err` means no response was ever received.
    #[tracing::instrument(skip(self, request))]
    pub async fn execute(&self, request: &ApiRequest) -> Result<Response> {
        debug!("{} {}...", request.method, request.url);

        retry::run(&self.policy, || async {
            retry::classify_response(self.attempt(request).await)
        })
        .await
        .context("Failed to send request")
    }

    /// One send of `request`, no retry.
    async fn attempt(&self, request: &ApiRequest) -> Result<Response, reqwest::Error> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if request.method == Method::Post
            && let Some(body) = &request.body
        {
            builder = builder.body(body.clone());
        }

        builder.send().await
    }
}
