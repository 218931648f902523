use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchClientError {
    /// A required key was absent from a server resource record.
    #[error("resource is missing required field `{0}`")]
    MissingField(&'static str),

    /// The transport could not find the requested resource.
    #[error("not found: {0}")]
    NotFound(String),

    /// Any other error status returned by the API.
    #[error("API request failed with {code} ({status}): {message}")]
    Api {
        code: u16,
        status: String,
        message: String,
    },

    #[error(transparent)]
    HTTP(#[from] reqwest::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("{0}")]
    Other(String),
}

impl SearchClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, SearchClientError::NotFound(_))
    }

    pub fn is_missing_field(&self, field: &str) -> bool {
        matches!(self, SearchClientError::MissingField(name) if *name == field)
    }
}
