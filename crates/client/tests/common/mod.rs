//! Test doubles shared by the integration tests.

#![allow(dead_code)]

use cloudsearch_client::{ApiRequest, Client, Connection, SearchClientError, SearchResult};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;

pub const PROJECT: &str = "project";
pub const INDEX_ID: &str = "index-id";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// Connection that replays queued responses and records every request.
/// Once the queue is empty each request fails with `NotFound("miss")`.
pub struct MockConnection {
    responses: Mutex<VecDeque<Value>>,
    requested: Mutex<Vec<ApiRequest>>,
}

impl MockConnection {
    pub fn new(responses: impl IntoIterator<Item = Value>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<ApiRequest> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Connection for MockConnection {
    async fn api_request(&self, request: ApiRequest) -> SearchResult<Value> {
        self.requested.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SearchClientError::NotFound("miss".to_string()))
    }
}

pub struct MockClient {
    pub project: String,
    pub connection: MockConnection,
}

impl MockClient {
    pub fn new(responses: impl IntoIterator<Item = Value>) -> Self {
        Self {
            project: PROJECT.to_string(),
            connection: MockConnection::new(responses),
        }
    }
}

impl Client for MockClient {
    fn project(&self) -> &str {
        &self.project
    }

    fn connection(&self) -> &dyn Connection {
        &self.connection
    }
}

pub fn make_resource() -> Value {
    json!({
        "projectId": PROJECT,
        "indexId": INDEX_ID,
        "indexedField": {
            "textFields": ["text-1", "text-2"],
            "htmlFields": ["html-1", "html-2"],
            "atomFields": ["atom-1", "atom-2"],
            "dateFields": ["date-1", "date-2"],
            "numberFields": ["number-1", "number-2"],
            "geoFields": ["geo-1", "geo-2"]
        }
    })
}

pub fn make_document_resource(doc_id: &str, rank: i64, title: &str) -> Value {
    json!({
        "docId": doc_id,
        "rank": rank,
        "fields": {
            "title": {
                "values": [{
                    "stringValue": title,
                    "stringFormat": "text",
                    "lang": "en"
                }]
            }
        }
    })
}

pub fn documents_path() -> String {
    format!("/projects/{}/indexes/{}/documents", PROJECT, INDEX_ID)
}
