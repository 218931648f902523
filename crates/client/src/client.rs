//! Project-scoped client handed to index resources

use {
    crate::{Connection, ConnectionConfig, HttpConnection, Index, SearchResult},
    serde_json::Value,
    std::{
        fmt::{Debug, Formatter},
        sync::Arc,
    },
};

/// What a resource needs from its owner: the project it lives in and a
/// connection to send requests through.
pub trait Client: Send + Sync {
    fn project(&self) -> &str;

    fn connection(&self) -> &dyn Connection;
}

#[derive(Clone)]
pub struct SearchClient {
    project: String,
    connection: Arc<dyn Connection>,
}

impl SearchClient {
    pub fn new(project: impl Into<String>, connection: Arc<dyn Connection>) -> Self {
        Self {
            project: project.into(),
            connection,
        }
    }

    /// Creates a client backed by an [`HttpConnection`].
    ///
    /// # Example
    /// ```rust,ignore
    /// let client = SearchClient::from_config("my-project", &ConnectionConfig::default())?;
    /// ```
    pub fn from_config(project: impl Into<String>, config: &ConnectionConfig) -> anyhow::Result<Self> {
        let connection = HttpConnection::new(config)?;
        Ok(Self::new(project, Arc::new(connection)))
    }

    /// Handle on an index of this project, without any server metadata.
    pub fn index(&self, name: impl Into<String>) -> Index<'_, Self> {
        Index::new(name, self)
    }

    /// Index built from a resource record returned by the API.
    pub fn index_from_api_repr(&self, resource: &Value) -> SearchResult<Index<'_, Self>> {
        Index::from_api_repr(resource, self)
    }
}

impl Client for SearchClient {
    fn project(&self) -> &str {
        &self.project
    }

    fn connection(&self) -> &dyn Connection {
        self.connection.as_ref()
    }
}

impl Debug for SearchClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchClient")
            .field("project", &self.project)
            .finish_non_exhaustive()
    }
}
