//! Document listing for an index

use {
    super::Index,
    crate::{ApiRequest, Client, Document, ListDocumentsResponse, QueryParams, SearchResult},
    ::tracing::{debug, instrument, trace},
    futures_util::stream::LocalBoxStream,
    serde::{Deserialize, Deserializer, Serialize, Serializer},
    serde_json::Value,
    std::fmt::{Display, Formatter},
};

/// How much of each document the listing returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentView {
    Full,
    IdOnly,
    /// Any other value the API accepts, sent verbatim
    Other(String),
}

impl DocumentView {
    pub fn as_str(&self) -> &str {
        match self {
            DocumentView::Full => "FULL",
            DocumentView::IdOnly => "ID_ONLY",
            DocumentView::Other(view) => view,
        }
    }
}

impl Display for DocumentView {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for DocumentView {
    fn from(view: &str) -> Self {
        match view {
            "FULL" => DocumentView::Full,
            "ID_ONLY" => DocumentView::IdOnly,
            other => DocumentView::Other(other.to_string()),
        }
    }
}

impl Serialize for DocumentView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DocumentView {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let view = String::deserialize(deserializer)?;
        Ok(DocumentView::from(view.as_str()))
    }
}

/// Options for [`Index::list_documents`]. Unset options are not sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListDocumentsOpts {
    /// Maximum number of documents per page (`pageSize`)
    pub max_results: Option<u32>,
    /// Cursor returned by a previous call (`pageToken`)
    pub page_token: Option<String>,
    pub view: Option<DocumentView>,
}

impl ListDocumentsOpts {
    pub fn with_max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn with_page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = Some(page_token.into());
        self
    }

    pub fn with_view(mut self, view: impl Into<DocumentView>) -> Self {
        self.view = Some(view.into());
        self
    }

    pub fn query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();

        if let Some(max_results) = self.max_results {
            params.insert("pageSize".to_string(), Value::from(max_results));
        }
        if let Some(page_token) = &self.page_token {
            params.insert("pageToken".to_string(), Value::from(page_token.as_str()));
        }
        if let Some(view) = &self.view {
            params.insert("view".to_string(), Value::from(view.as_str()));
        }

        params
    }
}

impl<'a, C: Client + ?Sized> Index<'a, C> {
    /// `{path}/documents`, the collection the listing reads from
    pub fn documents_path(&self) -> String {
        format!("{}/documents", self.path())
    }

    /// Fetches one page of documents.
    ///
    /// Returns the documents in server order together with the cursor for the
    /// next page, if the server reported one. Following the cursor is up to
    /// the caller; see [`Index::documents`] for a stream that does it.
    ///
    /// # Example
    /// ```rust,ignore
    /// let (documents, token) = index
    ///     .list_documents(ListDocumentsOpts::default().with_max_results(3).with_view("FULL"))
    ///     .await?;
    /// ```
    #[instrument(
        name = "cloudsearch.index.list_documents",
        skip(self),
        fields(
            project = %self.project(),
            index = %self.name
        ),
        err
    )]
    pub async fn list_documents(
        &self,
        opts: ListDocumentsOpts,
    ) -> SearchResult<(Vec<Document>, Option<String>)> {
        let request = ApiRequest::get(self.documents_path()).with_query_params(opts.query_params());

        debug!("listing documents: {} {:?}", &request.path, &request.query_params);

        let response = self.client.connection().api_request(request).await?;
        let ListDocumentsResponse {
            documents,
            next_page_token,
        } = ListDocumentsResponse::deserialize(&response)?;

        trace!(
            "received {} documents, next page token: {:?}",
            documents.len(),
            &next_page_token
        );

        Ok((documents, next_page_token))
    }

    /// Streams every document of the index, following page tokens until the
    /// server stops returning one. An empty token marks the last page.
    /// `opts.page_token` sets where to start.
    pub fn documents<'s>(
        &'s self,
        opts: ListDocumentsOpts,
    ) -> LocalBoxStream<'s, SearchResult<Document>> {
        Box::pin(async_stream::stream! {
            let mut opts = opts;
            loop {
                match self.list_documents(opts.clone()).await {
                    Ok((documents, next_page_token)) => {
                        for document in documents {
                            yield Ok(document);
                        }
                        match next_page_token {
                            Some(token) if !token.is_empty() => opts.page_token = Some(token),
                            _ => break,
                        }
                    }
                    Err(err) => {
                        yield Err(err);
                        break;
                    }
                }
            }
        })
    }
}
