//! reqwest-backed [`Connection`]

use {
    super::{
        config::ConnectionConfig, response::parse_response, url_builder::UrlBuilder, ApiRequest,
        Connection, QueryParams,
    },
    crate::{
        debug::{OperationEntry, OperationLog},
        SearchResult,
    },
    ::tracing::{debug, instrument},
    anyhow::Context,
    reqwest::Client,
    serde_json::Value,
    std::time::Instant,
    url::Url,
};

#[derive(Clone, Debug)]
pub struct HttpConnection {
    api_base_url: Url,
    api_version: String,
    http: Client,
    operation_log: OperationLog,
}

impl HttpConnection {
    /// Creates a connection from the given settings.
    ///
    /// # Example
    /// ```rust,ignore
    /// let conn = HttpConnection::new(&ConnectionConfig::default())?;
    /// ```
    pub fn new(config: &ConnectionConfig) -> anyhow::Result<Self> {
        let api_base_url = Url::parse(&config.api_base_url)
            .context(format!("invalid API base URL: {}", &config.api_base_url))?;

        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            api_base_url,
            api_version: config.api_version.clone(),
            http,
            operation_log: OperationLog::new(config.operation_log_size),
        })
    }

    pub fn api_base_url(&self) -> &Url {
        &self.api_base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Recent requests sent through this connection
    pub fn operation_log(&self) -> &OperationLog {
        &self.operation_log
    }

    pub(crate) fn build_url(&self) -> UrlBuilder<'_> {
        UrlBuilder::new(&self.api_base_url, &self.api_version)
    }

    /// Full URL for an API path and its query parameters.
    pub fn build_api_url(&self, path: &str, query_params: &QueryParams) -> String {
        query_params
            .iter()
            .fold(self.build_url().path(path), |builder, (key, value)| {
                builder.query_value(key, value)
            })
            .build()
    }

    async fn send(&self, request: &ApiRequest, uri: &str) -> SearchResult<Value> {
        let mut builder = self.http.request(request.method.clone(), uri);
        if let Some(data) = &request.data {
            builder = builder.json(data);
        }

        let res = builder.send().await?;
        parse_response(res).await
    }
}

#[async_trait::async_trait]
impl Connection for HttpConnection {
    #[instrument(
        name = "cloudsearch.http.api_request",
        skip(self, request),
        fields(
            method = %request.method,
            path = %request.path
        ),
        err
    )]
    async fn api_request(&self, request: ApiRequest) -> SearchResult<Value> {
        let uri = self.build_api_url(&request.path, &request.query_params);
        debug!("{} {}", &request.method, &uri);

        let entry = OperationEntry::new(request.method.as_str(), &request.path);
        let start = Instant::now();

        let result = self.send(&request, &uri).await;

        let duration_ms = start.elapsed().as_millis() as u64;
        self.operation_log.push(match &result {
            Ok(_) => entry.success(duration_ms),
            Err(err) => entry.failure(err.to_string(), duration_ms),
        });

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_api_url_with_params() {
        let conn = HttpConnection::new(
            &ConnectionConfig::default().with_api_base_url("https://cloudsearch.example.com"),
        )
        .unwrap();

        let params = QueryParams::from([
            ("pageSize".to_string(), json!(3)),
            ("pageToken".to_string(), json!("TOKEN")),
            ("view".to_string(), json!("FULL")),
        ]);

        assert_eq!(
            conn.build_api_url("/projects/project/indexes/index-id/documents", &params),
            "https://cloudsearch.example.com/v1/projects/project/indexes/index-id/documents?pageSize=3&pageToken=TOKEN&view=FULL"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = HttpConnection::new(&ConnectionConfig::default().with_api_base_url("not a url"))
            .unwrap_err();
        assert!(err.to_string().contains("invalid API base URL"));
    }
}
