mod common;

use cloudsearch_client::{Document, Index, ListDocumentsOpts, SearchResult};
use common::*;
use futures_util::{StreamExt, TryStreamExt};
use serde_json::json;

#[tokio::test]
async fn test_stream_follows_page_tokens() -> anyhow::Result<()> {
    init_tracing();

    let client = MockClient::new([
        json!({
            "documents": [
                make_document_resource("doc-1", 3, "One"),
                make_document_resource("doc-2", 2, "Two"),
            ],
            "nextPageToken": "page-2",
        }),
        json!({
            "documents": [make_document_resource("doc-3", 1, "Three")],
            "nextPageToken": "page-3",
        }),
        json!({}),
    ]);
    let index = Index::new(INDEX_ID, &client);

    let documents: Vec<Document> = index
        .documents(ListDocumentsOpts::default().with_max_results(2))
        .try_collect()
        .await?;

    let names: Vec<&str> = documents.iter().map(|d| d.name().as_str()).collect();
    assert_eq!(names, vec!["doc-1", "doc-2", "doc-3"]);

    let requested = client.connection.requested();
    assert_eq!(requested.len(), 3);
    assert_eq!(requested[0].query_params.get("pageToken"), None);
    assert_eq!(requested[1].query_params["pageToken"], json!("page-2"));
    assert_eq!(requested[2].query_params["pageToken"], json!("page-3"));
    assert!(requested
        .iter()
        .all(|r| r.query_params["pageSize"] == json!(2)));

    Ok(())
}

#[tokio::test]
async fn test_stream_starts_from_given_token() -> anyhow::Result<()> {
    let client = MockClient::new([json!({
        "documents": [make_document_resource("doc-9", 9, "Nine")]
    })]);
    let index = Index::new(INDEX_ID, &client);

    let documents: Vec<Document> = index
        .documents(ListDocumentsOpts::default().with_page_token("resume-here"))
        .try_collect()
        .await?;

    assert_eq!(documents.len(), 1);
    assert_eq!(
        client.connection.requested()[0].query_params["pageToken"],
        json!("resume-here")
    );

    Ok(())
}

#[tokio::test]
async fn test_stream_ends_after_error() {
    // first page advertises a second page the connection cannot serve
    let client = MockClient::new([json!({
        "documents": [make_document_resource("doc-1", 1, "One")],
        "nextPageToken": "gone",
    })]);
    let index = Index::new(INDEX_ID, &client);

    let results: Vec<SearchResult<Document>> = index
        .documents(ListDocumentsOpts::default())
        .collect()
        .await;

    assert_eq!(results.len(), 2);
    assert!(results[0].is_ok());
    assert!(results[1].as_ref().unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_stream_stops_on_empty_page_token() -> anyhow::Result<()> {
    let client = MockClient::new([
        json!({
            "documents": [make_document_resource("doc-1", 2, "One")],
            "nextPageToken": "page-2",
        }),
        json!({
            "documents": [make_document_resource("doc-2", 1, "Two")],
            "nextPageToken": "",
        }),
        json!({
            "documents": [make_document_resource("doc-1", 2, "One")],
            "nextPageToken": "",
        }),
    ]);
    let index = Index::new(INDEX_ID, &client);

    let documents: Vec<Document> = index
        .documents(ListDocumentsOpts::default())
        .try_collect()
        .await?;

    let names: Vec<&str> = documents.iter().map(|d| d.name().as_str()).collect();
    assert_eq!(names, vec!["doc-1", "doc-2"]);

    let requested = client.connection.requested();
    assert_eq!(requested.len(), 2);
    assert_eq!(requested[1].query_params["pageToken"], json!("page-2"));

    Ok(())
}
