//! Response parsing utilities for the HTTP connection

use {
    crate::{SearchClientError, SearchResult},
    ::tracing::{error, instrument, trace},
    reqwest::Response,
    serde_json::{json, Value},
    tap::TapFallible,
};

/// Decodes a successful response body; an empty body is an empty object.
pub(crate) fn parse_body(full: &str) -> SearchResult<Value> {
    if full.trim().is_empty() {
        return Ok(json!({}));
    }

    let json = serde_json::from_str::<Value>(full)
        .tap_err(|e| error!("failed to parse response text as JSON ({:?}): {}", e, full))?;

    trace!("[HttpConnection] response: {:#?}", &json);

    Ok(json)
}

#[instrument(
    name = "cloudsearch.response.parse",
    skip(res),
    fields(status = res.status().as_u16()),
    err
)]
pub(crate) async fn parse_response(res: Response) -> SearchResult<Value> {
    let status = res.status();
    let full = res.text().await?;

    if status.is_success() {
        parse_body(&full)
    } else {
        Err(SearchClientError::from_response(status.as_u16(), &full))
    }
}
