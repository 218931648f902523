//! Client for the hosted Cloud Search index API.
//!
//! An [`Index`] is a read-only projection of a server-side index resource.
//! It is built either directly from a name or from the resource record the
//! API returns, and lists its documents page by page through the
//! [`Connection`] owned by its [`Client`].
//!
//! ```rust,ignore
//! let client = SearchClient::from_config("my-project", &ConnectionConfig::default())?;
//! let index = client.index("products");
//!
//! let (documents, next_page_token) = index
//!     .list_documents(ListDocumentsOpts::default().with_max_results(25))
//!     .await?;
//! ```

pub use {client::*, connection::*, debug::*, document::*, err::*, index::*};

pub mod client;
pub mod connection;
pub mod debug;
mod document;
pub mod err;
mod index;

pub type SearchResult<T> = Result<T, SearchClientError>;
