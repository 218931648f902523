//! URL building utilities for Cloud Search API endpoints

use serde_json::Value;
use url::Url;

/// Builds `{api_base_url}/{api_version}{path}?{query}` URLs.
#[derive(Debug)]
pub struct UrlBuilder<'a> {
    base: &'a Url,
    api_version: &'a str,
    parts: Vec<String>,
    query_params: Vec<(String, String)>,
}

impl<'a> UrlBuilder<'a> {
    pub fn new(base: &'a Url, api_version: &'a str) -> Self {
        Self {
            base,
            api_version,
            parts: Vec::new(),
            query_params: Vec::new(),
        }
    }

    /// Append a request path such as `/projects/p/indexes/i/documents`
    pub fn path(mut self, path: &str) -> Self {
        self.parts.extend(
            path.split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
        );
        self
    }

    /// Add a query parameter; the value is URL-encoded on build
    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.query_params.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a JSON-valued query parameter. Strings are sent bare, `null` is skipped.
    pub fn query_value(self, key: &str, value: &Value) -> Self {
        match value {
            Value::Null => self,
            Value::String(s) => self.query(key, s),
            other => self.query(key, &other.to_string()),
        }
    }

    /// Build the final URL string
    pub fn build(self) -> String {
        let mut url = format!(
            "{}/{}",
            self.base.as_str().trim_end_matches('/'),
            self.api_version
        );

        for part in &self.parts {
            url.push('/');
            url.push_str(part);
        }

        if !self.query_params.is_empty() {
            let query_string = self
                .query_params
                .iter()
                .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
                .collect::<Vec<_>>()
                .join("&");
            url.push('?');
            url.push_str(&query_string);
        }

        url
    }
}
