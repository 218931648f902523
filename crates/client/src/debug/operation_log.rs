//! In-memory operation log for debugging recent requests

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

/// A single request entry in the log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationEntry {
    /// When the request was sent
    pub timestamp: DateTime<Utc>,
    /// HTTP method
    pub method: String,
    /// API path, without the base URL or query string
    pub path: String,
    /// Whether the request succeeded
    pub success: bool,
    /// Duration in milliseconds
    pub duration_ms: u64,
    /// Error message if the request failed
    pub error: Option<String>,
}

impl OperationEntry {
    pub fn new(method: &str, path: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            method: method.to_string(),
            path: path.to_string(),
            success: false,
            duration_ms: 0,
            error: None,
        }
    }

    /// Mark the request as successful
    pub fn success(mut self, duration_ms: u64) -> Self {
        self.success = true;
        self.duration_ms = duration_ms;
        self
    }

    /// Mark the request as failed
    pub fn failure(mut self, error: String, duration_ms: u64) -> Self {
        self.success = false;
        self.error = Some(error);
        self.duration_ms = duration_ms;
        self
    }
}

/// Thread-safe ring buffer for storing recent requests
#[derive(Clone, Debug)]
pub struct OperationLog {
    entries: Arc<RwLock<VecDeque<OperationEntry>>>,
    max_size: usize,
}

impl OperationLog {
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(VecDeque::with_capacity(max_size))),
            max_size,
        }
    }

    /// Add an entry, evicting the oldest one when at capacity
    pub fn push(&self, entry: OperationEntry) {
        if self.max_size == 0 {
            return;
        }
        if let Ok(mut entries) = self.entries.write() {
            if entries.len() >= self.max_size {
                entries.pop_front();
            }
            entries.push_back(entry);
        }
    }

    /// All entries, newest last
    pub fn entries(&self) -> Vec<OperationEntry> {
        if let Ok(entries) = self.entries.read() {
            entries.iter().cloned().collect()
        } else {
            Vec::new()
        }
    }

    pub fn last(&self) -> Option<OperationEntry> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.back().cloned())
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    pub fn len(&self) -> usize {
        if let Ok(entries) = self.entries.read() {
            entries.len()
        } else {
            0
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
