//! Transport seam between index resources and the API.
//!
//! Resources never talk HTTP themselves: they describe a request as an
//! [`ApiRequest`] and hand it to a [`Connection`]. The production
//! implementation is [`HttpConnection`]; tests substitute their own.
//!
//! ## Module Organization
//!
//! - `config`: connection settings with environment-backed defaults
//! - `http`: reqwest-backed [`Connection`]
//! - `response`: response parsing for the HTTP transport
//! - `url_builder`: URL construction for API endpoints

pub mod config;
pub mod http;
mod response;
pub mod url_builder;

pub use config::ConnectionConfig;
pub use http::HttpConnection;
pub use url_builder::UrlBuilder;

pub use reqwest::Method;

use crate::SearchResult;
use serde_json::Value;
use std::collections::BTreeMap;

/// Query parameters of a request, keyed by their wire name.
///
/// Values stay JSON so numeric parameters such as `pageSize` keep their type
/// until the transport renders them.
pub type QueryParams = BTreeMap<String, Value>;

/// A single API call as issued by a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the versioned API root, with a leading slash.
    pub path: String,
    pub query_params: QueryParams,
    /// Optional JSON body.
    pub data: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query_params: QueryParams::new(),
            data: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn with_query_params(mut self, query_params: QueryParams) -> Self {
        self.query_params = query_params;
        self
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Capability to send an [`ApiRequest`] and return the decoded response body.
///
/// A miss must be reported as [`crate::SearchClientError::NotFound`].
#[async_trait::async_trait]
pub trait Connection: Send + Sync {
    async fn api_request(&self, request: ApiRequest) -> SearchResult<Value>;
}
