//! Request descriptor consumed by the retrying HTTP client.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;

/// HTTP method supported by the vendor APIs.
///
/// Only GET and POST exist on the wire for any vendor operation; anything
/// else is a caller bug and fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            _ => anyhow::bail!("Unknown HTTP method: {}. Expected GET or POST.", s),
        }
    }
}

/// One vendor request: URL, method, query parameters, headers and an
/// optional pre-serialized body.
///
/// Built fresh by a vendor-client method for every call and handed to
/// [`HttpClient::execute`](super::HttpClient::execute). The body is opaque
/// to this layer (the JSON-RPC client serializes its payload up front) and
/// is only sent on POST.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub url: String,
    pub method: Method,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    /// Create a GET request for the given URL.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(url, Method::Get)
    }

    /// Create a POST request for the given URL.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(url, Method::Post)
    }

    fn new(url: impl Into<String>, method: Method) -> Self {
        Self {
            url: url.into(),
            method,
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Append one query parameter. Pairs are sent in insertion order.
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Append one request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a pre-serialized body. Ignored unless the method is POST.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
